//! Date utilities for series ingestion

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Accepted timestamp layouts, tried in order after RFC 3339
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a date or timestamp string, keeping only the calendar date
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM:SS`
/// and RFC 3339 (the local date as written, offset ignored).
///
/// # Examples
/// ```
/// use step_heatmap::utils::time::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 2, 5);
/// assert_eq!(parse_calendar_date("2024-02-05"), expected);
/// assert_eq!(parse_calendar_date("2024-02-05 23:59:00"), expected);
/// assert_eq!(parse_calendar_date("2024-02-05T08:00:00+02:00"), expected);
/// assert_eq!(parse_calendar_date("05/02/2024"), None);
/// ```
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Format a date as ISO 8601 (YYYY-MM-DD)
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
