use chrono::{Datelike, Duration, NaiveDate, Weekday};
use leave_desk::calendar::{
    count_working_days, excluded_count, is_date_excluded, total_calendar_days, DurationSummary,
    HolidaySet,
};
use pretty_assertions::assert_eq;

mod common;

use common::date;

fn national_holidays() -> HolidaySet {
    HolidaySet::from_keys(["2024-01-26", "2024-03-25", "2024-08-15", "2024-10-02", "2024-12-25"])
        .unwrap()
}

/// Every (start, end) pair starting in the first quarter, spanning up to 20 days.
fn sample_ranges() -> Vec<(NaiveDate, NaiveDate)> {
    let mut ranges = Vec::new();
    let mut start = date(2024, 1, 1);
    while start < date(2024, 4, 1) {
        for span in -2..20 {
            ranges.push((start, start + Duration::days(span)));
        }
        start += Duration::days(1);
    }
    ranges
}

#[test]
fn test_working_plus_excluded_equals_total() {
    let holidays = national_holidays();
    for (start, end) in sample_ranges() {
        assert_eq!(
            total_calendar_days(start, end),
            count_working_days(start, end, &holidays) + excluded_count(start, end, &holidays),
            "range {start}..={end}"
        );
    }
}

#[test]
fn test_adding_holidays_never_increases_the_count() {
    let base = HolidaySet::from_keys(["2024-01-26"]).unwrap();
    let superset = national_holidays();
    assert!(base.iter().all(|day| superset.contains(*day)));

    for (start, end) in sample_ranges() {
        assert!(
            count_working_days(start, end, &superset) <= count_working_days(start, end, &base),
            "range {start}..={end}"
        );
    }
}

#[test]
fn test_every_sunday_alone_counts_zero() {
    let holidays = HolidaySet::new();
    let mut day = date(2024, 1, 7);
    while day.year() == 2024 {
        assert_eq!(day.weekday(), Weekday::Sun);
        assert_eq!(count_working_days(day, day, &holidays), 0);
        day += Duration::days(7);
    }
}

#[test]
fn test_repeated_calls_agree() {
    let holidays = national_holidays();
    let (start, end) = (date(2024, 1, 1), date(2024, 12, 31));
    let first = count_working_days(start, end, &holidays);
    let second = count_working_days(start, end, &holidays);
    assert_eq!(first, second);
    // 366 days, 52 Sundays, five weekday holidays
    assert_eq!(first, 366 - 52 - 5);
}

#[test]
fn test_single_date_predicate_matches_range_count() {
    let holidays = national_holidays();
    let mut day = date(2024, 1, 1);
    while day < date(2024, 3, 1) {
        let counted = count_working_days(day, day, &holidays);
        assert_eq!(counted == 0, is_date_excluded(day, &holidays), "{day}");
        day += Duration::days(1);
    }
}

#[test]
fn test_reference_scenarios() {
    let none = HolidaySet::new();
    assert_eq!(count_working_days(date(2024, 1, 1), date(2024, 1, 7), &none), 6);
    assert_eq!(count_working_days(date(2024, 1, 7), date(2024, 1, 7), &none), 0);

    let one = HolidaySet::from_keys(["2024-01-02"]).unwrap();
    assert_eq!(count_working_days(date(2024, 1, 1), date(2024, 1, 3), &one), 2);
}

#[test]
fn test_summary_for_a_leap_february() {
    let summary = DurationSummary::compute(date(2024, 2, 1), date(2024, 2, 29), &national_holidays());
    assert_eq!(summary.total_days, 29);
    assert_eq!(summary.excluded_days, 4);
    assert_eq!(summary.working_days, 25);
    assert!(summary.has_working_days());
}
