use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use super::holidays::HolidaySet;

/// Sundays and company holidays never count toward a leave duration.
pub fn is_date_excluded(date: NaiveDate, holidays: &HolidaySet) -> bool {
    date.weekday() == Weekday::Sun || holidays.contains(date)
}

/// Inclusive day iterator. Empty when `end < start`.
fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Number of working days in `start..=end`. Returns 0 for an inverted range;
/// callers reject that case before relying on the count.
pub fn count_working_days(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    days_in_range(start, end)
        .filter(|day| !is_date_excluded(*day, holidays))
        .count() as u32
}

pub fn excluded_count(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> u32 {
    days_in_range(start, end)
        .filter(|day| is_date_excluded(*day, holidays))
        .count() as u32
}

/// Inclusive calendar day count with no exclusions applied.
pub fn total_calendar_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

/// Dates in the range a date picker should render as disabled.
pub fn excluded_dates_in(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> Vec<NaiveDate> {
    days_in_range(start, end)
        .filter(|day| is_date_excluded(*day, holidays))
        .collect()
}

/// The three counts a leave form shows under its date pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: u32,
    pub excluded_days: u32,
    pub working_days: u32,
}

impl DurationSummary {
    pub fn compute(start: NaiveDate, end: NaiveDate, holidays: &HolidaySet) -> Self {
        let working_days = count_working_days(start, end, holidays);
        let excluded_days = excluded_count(start, end, holidays);
        Self {
            start_date: start,
            end_date: end,
            total_days: total_calendar_days(start, end),
            excluded_days,
            working_days,
        }
    }

    pub fn has_working_days(&self) -> bool {
        self.working_days > 0
    }
}

impl fmt::Display for DurationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} days | Excluded: {} days | Working: {} days",
            self.total_days, self.excluded_days, self.working_days
        )
    }
}
