//! Date parsing and trailing-week windows

use anyhow::{Result, anyhow};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// One trailing week: `start` is a Sunday at midnight UTC, `end` is inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Parse a `YYYY-MM-DD` date (midnight UTC) or an RFC 3339 timestamp
pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            anyhow!(
                "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
                value
            )
        })
}

/// Midnight UTC of the Sunday on or before `now`
pub fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let sunday = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    sunday
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

/// The `weeks` most recent week windows, most recent first
///
/// The current week ends at `now`; every earlier week ends one second
/// before the following week starts, so windows never overlap.
pub fn week_windows(now: DateTime<Utc>, weeks: usize) -> Vec<WeekWindow> {
    let current = start_of_week(now);
    let mut windows = Vec::with_capacity(weeks);
    let mut end = now;

    for i in 0..weeks {
        let start = current - Duration::weeks(i as i64);
        windows.push(WeekWindow { start, end });
        end = start - Duration::seconds(1);
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date("2020-01-31").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let date = parse_date("2020-01-31T12:00:00+02:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2020, 1, 31, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = parse_date("31/01/2020").unwrap_err();
        assert!(err.to_string().contains("31/01/2020"));
    }

    #[test]
    fn test_start_of_week_is_sunday_midnight() {
        // Wednesday
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 13, 45, 0).unwrap();
        let start = start_of_week(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap());
        assert_eq!(start.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_start_of_week_on_sunday_is_same_day() {
        let now = Utc.with_ymd_and_hms(2024, 5, 12, 8, 0, 0).unwrap();
        assert_eq!(
            start_of_week(now),
            Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_week_windows_are_contiguous() {
        let now = Utc.with_ymd_and_hms(2024, 5, 15, 13, 45, 0).unwrap();
        let windows = week_windows(now, 3);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].end, now);
        assert_eq!(windows[0].start, Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap());
        assert_eq!(windows[1].start, Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap());
        assert_eq!(windows[1].end, windows[0].start - Duration::seconds(1));
        assert_eq!(windows[2].start, Utc.with_ymd_and_hms(2024, 4, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_zero_weeks() {
        assert!(week_windows(Utc::now(), 0).is_empty());
    }
}
