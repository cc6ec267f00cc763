//! Local calendar-day helpers.
//!
//! Entries carry either a bare `YYYY-MM-DD` day or a full RFC 3339 timestamp.
//! Both are reduced to a local calendar date; streaks never count UTC days or
//! elapsed 24h windows.

use chrono::{DateTime, Local, NaiveDate, Utc};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local calendar.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date as its `YYYY-MM-DD` day key.
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parses a stored date string into a local calendar day.
///
/// Timestamps are shifted into the local timezone before the date is taken,
/// so an entry written at 23:30 local time stays on that day.
pub fn parse_local_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DAY_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Current instant as an RFC 3339 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Current instant in Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_day() {
        let day = parse_local_day("2025-10-19").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 10, 19).unwrap());
    }

    #[test]
    fn test_parse_timestamp_uses_local_calendar() {
        let ts = "2025-10-19T12:00:00.000Z";
        let expected = DateTime::parse_from_rfc3339(ts)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(parse_local_day(ts), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_local_day("yesterday").is_none());
        assert!(parse_local_day("").is_none());
    }

    #[test]
    fn test_day_key_pads() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(day_key(day), "2025-03-07");
    }
}
