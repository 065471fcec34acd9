//! Expansion of a recurrence rule into concrete practice dates.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};
use rally_core::types::RecurrenceKind;
use rally_core::util::date::{
    add_months_keeping_day, add_weeks, end_of_year, first_of_month_after, nth_weekday_of_month,
    weekday_ordinal,
};

use super::types::RecurrenceRule;
use crate::error::{ServiceError, ServiceResult};

/// Ordered, finite sequence of occurrence dates produced by [`expand`].
///
/// Dates are strictly increasing, start at the base date and never pass the
/// rule's end date. Monthly-by-date steps clamp to the month's last day;
/// monthly-by-nth-weekday steps skip months lacking the ordinal.
#[derive(Debug, Clone)]
pub struct Occurrences {
    base: NaiveDate,
    kind: RecurrenceKind,
    end: NaiveDate,
    weekday: Weekday,
    ordinal: u8,
    step: u32,
    done: bool,
}

impl Occurrences {
    fn new(base: NaiveDate, kind: RecurrenceKind, end: NaiveDate) -> Self {
        Self {
            base,
            kind,
            end,
            weekday: base.weekday(),
            ordinal: weekday_ordinal(base),
            step: 0,
            done: false,
        }
    }

    /// Date for the current step, or `None` once the sequence is exhausted.
    ///
    /// A skipped month advances `step` and keeps looking.
    fn candidate(&mut self) -> Option<NaiveDate> {
        match self.kind {
            RecurrenceKind::None => (self.step == 0).then_some(self.base),
            RecurrenceKind::Weekly => add_weeks(self.base, self.step),
            RecurrenceKind::MonthlyByDate => add_months_keeping_day(self.base, self.step),
            RecurrenceKind::MonthlyByNthWeekday => loop {
                let month_start = first_of_month_after(self.base, self.step)?;
                if month_start > self.end {
                    return None;
                }
                if let Some(date) = nth_weekday_of_month(
                    month_start.year(),
                    month_start.month(),
                    self.weekday,
                    self.ordinal,
                ) {
                    break Some(date);
                }
                tracing::trace!(
                    year = month_start.year(),
                    month = month_start.month(),
                    ordinal = self.ordinal,
                    weekday = %self.weekday,
                    "Skipping month without matching weekday"
                );
                self.step += 1;
            },
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.candidate() {
            Some(date) if date <= self.end => {
                self.step += 1;
                Some(date)
            }
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for Occurrences {}

/// ## Summary
/// Validates `rule` against `base_date` and returns its occurrence dates.
///
/// The horizon is the current calendar year: `end_date` must fall on or
/// before December 31 of the year containing `today`.
///
/// ## Errors
/// Returns `RecurrenceConfigError` if a repeating rule has no end date, the
/// end date precedes the base date, or it lies beyond the current year.
#[tracing::instrument(fields(kind = %rule.kind, end_date = ?rule.end_date))]
pub fn expand(
    base_date: NaiveDate,
    rule: &RecurrenceRule,
    today: NaiveDate,
) -> ServiceResult<Occurrences> {
    if !rule.kind.is_recurring() {
        return Ok(Occurrences::new(base_date, RecurrenceKind::None, base_date));
    }

    let end_date = rule.end_date.ok_or_else(|| {
        ServiceError::RecurrenceConfigError(format!(
            "an end date is required for {} recurrence",
            rule.kind
        ))
    })?;

    if end_date < base_date {
        return Err(ServiceError::RecurrenceConfigError(format!(
            "end date {end_date} is before the first practice on {base_date}"
        )));
    }

    let horizon = end_of_year(today);
    if end_date > horizon {
        return Err(ServiceError::RecurrenceConfigError(format!(
            "end date {end_date} is after the end of the current year ({horizon})"
        )));
    }

    Ok(Occurrences::new(base_date, rule.kind, end_date))
}

impl RecurrenceRule {
    /// ## Summary
    /// Renders this rule as RFC 5545 `DTSTART`/`RRULE` text anchored at `base_date`.
    ///
    /// Monthly-by-date uses `BYSETPOS=-1` over the candidate days so short
    /// months clamp to their last day, matching [`expand`].
    #[must_use]
    pub fn to_rrule(&self, base_date: NaiveDate) -> String {
        let dtstart = format!("DTSTART:{}T000000Z", base_date.format("%Y%m%d"));
        let until = self
            .end_date
            .unwrap_or(base_date)
            .format("%Y%m%dT000000Z")
            .to_string();

        let rule = match self.kind {
            RecurrenceKind::None => "FREQ=DAILY;COUNT=1".to_string(),
            RecurrenceKind::Weekly => format!("FREQ=WEEKLY;UNTIL={until}"),
            RecurrenceKind::MonthlyByDate if base_date.day() > 28 => {
                let days = (28..=base_date.day())
                    .map(|day| day.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                format!("FREQ=MONTHLY;UNTIL={until};BYMONTHDAY={days};BYSETPOS=-1")
            }
            RecurrenceKind::MonthlyByDate => {
                format!("FREQ=MONTHLY;UNTIL={until};BYMONTHDAY={}", base_date.day())
            }
            RecurrenceKind::MonthlyByNthWeekday => format!(
                "FREQ=MONTHLY;UNTIL={until};BYDAY={}{}",
                weekday_ordinal(base_date),
                rrule_weekday(base_date.weekday())
            ),
        };

        format!("{dtstart}\nRRULE:{rule}")
    }
}

const fn rrule_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}
