//! Date labels for resource cards

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a backend date: a plain calendar date or an ISO-8601 timestamp.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// `1/5/2024`. Unparseable input is returned as-is.
pub fn short_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `January 5, 2024`. Unparseable input is returned as-is.
pub fn long_date(raw: &str) -> String {
    match parse_calendar_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
