//! Calendar-day arithmetic for practice scheduling.
//!
//! ## Summary
//! All dates are timezone-naive local calendar days. Callers decide what
//! "today" is (the deployment's local clock) and pass it in.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Adds `weeks` whole weeks to `date`.
///
/// Returns `None` if the result falls outside chrono's representable range.
#[must_use]
pub fn add_weeks(date: NaiveDate, weeks: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(weeks) * 7))
}

/// Adds `months` calendar months to `date`, keeping its day-of-month.
///
/// When the target month is shorter than the day-of-month, the result is
/// clamped to the month's last day (2025-01-30 + 1 month = 2025-02-28).
/// Always step from the base date: chaining clamped results drifts.
#[must_use]
pub fn add_months_keeping_day(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Returns the `n`th `weekday` of the given month (1-based).
///
/// Returns `None` if the month has no such day, e.g. a fifth Tuesday.
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

/// Returns which occurrence of its weekday `date` is within its month.
///
/// 2025-06-03 is the 1st Tuesday of June, 2025-06-10 the 2nd.
#[must_use]
pub fn weekday_ordinal(date: NaiveDate) -> u8 {
    // day0 is at most 30, so the ordinal is at most 5
    u8::try_from(date.day0() / 7 + 1).unwrap_or(5)
}

/// Returns the first day of the month `months` after the month of `date`.
#[must_use]
pub fn first_of_month_after(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?.checked_add_months(Months::new(months))
}

/// Returns December 31 of the year `date` falls in.
#[must_use]
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Whether `date` is strictly before `today`.
#[must_use]
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
