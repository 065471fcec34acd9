use chrono::{Datelike, NaiveDate};
use rally_core::types::RecurrenceKind;
use rrule::RRuleSet;

use crate::practice::recurrence::expand;
use crate::practice::types::RecurrenceRule;

pub struct RecurrenceCase {
    pub name: &'static str,
    pub base: &'static str,
    pub kind: RecurrenceKind,
    pub end: &'static str,
    pub expected: &'static [&'static str],
    /// Whether the `rrule` crate must agree with the expander.
    pub check_rrule: bool,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "weekly_basic",
            base: "2025-06-03",
            kind: RecurrenceKind::Weekly,
            end: "2025-06-24",
            expected: &["2025-06-03", "2025-06-10", "2025-06-17", "2025-06-24"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "weekly_end_between_steps",
            base: "2025-06-03",
            kind: RecurrenceKind::Weekly,
            end: "2025-06-23",
            expected: &["2025-06-03", "2025-06-10", "2025-06-17"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "weekly_across_months",
            base: "2025-10-29",
            kind: RecurrenceKind::Weekly,
            end: "2025-11-19",
            expected: &["2025-10-29", "2025-11-05", "2025-11-12", "2025-11-19"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "weekly_single",
            base: "2025-06-03",
            kind: RecurrenceKind::Weekly,
            end: "2025-06-09",
            expected: &["2025-06-03"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_date_basic",
            base: "2025-03-15",
            kind: RecurrenceKind::MonthlyByDate,
            end: "2025-06-15",
            expected: &["2025-03-15", "2025-04-15", "2025-05-15", "2025-06-15"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_date_clamped_30th",
            base: "2025-01-30",
            kind: RecurrenceKind::MonthlyByDate,
            end: "2025-04-30",
            expected: &["2025-01-30", "2025-02-28", "2025-03-30", "2025-04-30"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_date_clamped_31st",
            base: "2025-08-31",
            kind: RecurrenceKind::MonthlyByDate,
            end: "2025-12-31",
            expected: &[
                "2025-08-31",
                "2025-09-30",
                "2025-10-31",
                "2025-11-30",
                "2025-12-31",
            ],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_date_leap_year",
            base: "2024-01-29",
            kind: RecurrenceKind::MonthlyByDate,
            end: "2024-03-29",
            expected: &["2024-01-29", "2024-02-29", "2024-03-29"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_nth_weekday_first_tuesday",
            base: "2025-06-03",
            kind: RecurrenceKind::MonthlyByNthWeekday,
            end: "2025-09-30",
            expected: &["2025-06-03", "2025-07-01", "2025-08-05", "2025-09-02"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_nth_weekday_third_saturday",
            base: "2025-02-15",
            kind: RecurrenceKind::MonthlyByNthWeekday,
            end: "2025-05-31",
            expected: &["2025-02-15", "2025-03-15", "2025-04-19", "2025-05-17"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "monthly_by_nth_weekday_fifth_skips",
            base: "2025-04-29",
            kind: RecurrenceKind::MonthlyByNthWeekday,
            end: "2025-12-31",
            expected: &["2025-04-29", "2025-07-29", "2025-09-30", "2025-12-30"],
            check_rrule: true,
        },
        RecurrenceCase {
            name: "none_ignores_end",
            base: "2025-06-03",
            kind: RecurrenceKind::None,
            end: "2025-12-31",
            expected: &["2025-06-03"],
            check_rrule: false,
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse {value}: {err}"))
}

pub fn assert_case(case: &RecurrenceCase) {
    let base = parse_date(case.base);
    let rule = RecurrenceRule::new(case.kind, parse_date(case.end));
    // "today" is January 1 of the case's own year
    let today = NaiveDate::from_ymd_opt(base.year(), 1, 1)
        .unwrap_or_else(|| panic!("Invalid reference date for {}", case.name));

    let expected: Vec<NaiveDate> = case.expected.iter().map(|value| parse_date(value)).collect();

    let actual: Vec<NaiveDate> = expand(base, &rule, today)
        .unwrap_or_else(|err| panic!("Case {} failed to expand: {err}", case.name))
        .collect();
    assert_eq!(actual, expected, "Case {} did not match", case.name);

    if case.check_rrule {
        let rrule_text = rule.to_rrule(base);
        let rrule_set: RRuleSet = rrule_text
            .parse()
            .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
        let oracle: Vec<NaiveDate> = rrule_set
            .all(100)
            .dates
            .iter()
            .map(chrono::DateTime::date_naive)
            .collect();
        assert_eq!(
            oracle, expected,
            "Case {} disagrees with rrule for {rrule_text}",
            case.name
        );
    }
}
