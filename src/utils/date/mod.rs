// Date utility functions
// Calendar-date parsing and yearly recurrence math. No time-of-day or
// timezone component is involved anywhere in here.

use chrono::{Datelike, NaiveDate};

use crate::models::occasion::OccasionError;

/// ISO calendar-date format used at every external boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string into a calendar date.
///
/// Only the exact 10-character form is accepted; single-digit months or days,
/// surrounding whitespace and impossible days (e.g. `2023-02-30`) are rejected.
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, OccasionError> {
    let invalid = || OccasionError::InvalidDateFormat(value.to_string());

    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(invalid());
    }

    let year: i32 = value[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = value[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = value[8..10].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse an optional stored date. Blank strings mean "not recorded".
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, OccasionError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse_calendar_date(raw).map(Some),
        _ => Ok(None),
    }
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Place the month/day of `source` into `year`.
///
/// Feb 29 falls back to Feb 28 when `year` is not a leap year.
pub fn materialize(source: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, source.month(), source.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, source.month(), source.day() - 1))
        .unwrap_or(source)
}

/// Next date carrying `source`'s month/day that is on or after `reference`.
pub fn next_occurrence_on_or_after(source: NaiveDate, reference: NaiveDate) -> NaiveDate {
    let this_year = materialize(source, reference.year());
    if this_year >= reference {
        this_year
    } else {
        materialize(source, reference.year() + 1)
    }
}

/// Signed number of days from `a` to `b` (`b - a`).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Every yearly occurrence of `source` inside `[start, end]`, oldest first.
///
/// Returns nothing when `start > end`.
pub fn all_occurrences_in_range(source: NaiveDate, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }

    (start.year()..=end.year())
        .map(|year| materialize(source, year))
        .filter(|candidate| *candidate >= start && *candidate <= end)
        .collect()
}
