//! Calendar arithmetic for leave requests.
//!
//! All comparisons run on [`chrono::NaiveDate`], a local calendar date. Holiday
//! keys are built from the year/month/day triple, never from a UTC instant, so
//! a request filed late in the evening cannot shift onto the neighbouring day.

pub mod holidays;
pub mod working_days;

pub use holidays::{date_key, parse_date_key, HolidaySet, InvalidDateKey};
pub use working_days::{
    count_working_days, excluded_count, excluded_dates_in, is_date_excluded,
    total_calendar_days, DurationSummary,
};
