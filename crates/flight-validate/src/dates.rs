//! Flight date parsing.
//!
//! Accepts the common date spellings found in airline exports. Only
//! parseability matters to validation; the parsed value is returned for
//! callers that want it.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order.
const DATE_FORMATS: [&str; 15] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%m/%d/%Y",  // US: 01/15/2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%b %d %Y",  // Jan 15 2024
    "%B %d %Y",  // January 15 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y-%b-%d",  // 2024-Jan-15
    "%d-%m-%Y",  // 15-01-2024
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a flight date, ignoring surrounding whitespace.
pub fn parse_flight_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    try_parse_compact(value)
        .or_else(|| try_parse_date(value))
        .or_else(|| try_parse_datetime(value))
}

/// Returns true if the value names a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    parse_flight_date(value).is_some()
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// Compact `YYYYMMDD`.
fn try_parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
