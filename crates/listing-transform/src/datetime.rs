//! Best-effort date parsing for review dates.
//!
//! Accepts the common date and datetime spellings found in exported listings
//! data and keeps only the calendar date. Month-first is preferred over
//! day-first for ambiguous slash dates (`01/02/2019` is January 2nd).
//! Anything that does not parse yields `None`; callers treat that as the
//! missing marker, never as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a review date, returning `None` for empty or unparseable input.
pub fn parse_review_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    try_parse_datetime(trimmed)
        .map(|dt| dt.date())
        .or_else(|| try_parse_date(trimmed))
}

/// Try to parse full datetime formats.
fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d-%b-%Y %H:%M",
        "%m/%d/%Y %H:%M:%S", // US
        "%m/%d/%Y %H:%M",
        "%d/%m/%Y %H:%M:%S", // European
        "%d/%m/%Y %H:%M",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Try to parse date-only formats.
fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d/%m/%Y",  // European: 15/01/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_review_date("2019-05-21"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("  2019-05-21 "), ymd(2019, 5, 21));
    }

    #[test]
    fn test_datetime_keeps_date() {
        assert_eq!(parse_review_date("2019-05-21T13:45:00"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("2019-05-21 13:45"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("2019-05-21T23:30:00+02:00"), ymd(2019, 5, 21));
    }

    #[test]
    fn test_other_spellings() {
        assert_eq!(parse_review_date("2019/05/21"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("21-May-2019"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("May 21, 2019"), ymd(2019, 5, 21));
        assert_eq!(parse_review_date("21.05.2019"), ymd(2019, 5, 21));
    }

    #[test]
    fn test_slash_dates_prefer_month_first() {
        assert_eq!(parse_review_date("01/02/2019"), ymd(2019, 1, 2));
        assert_eq!(parse_review_date("21/05/2019"), ymd(2019, 5, 21));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_review_date(""), None);
        assert_eq!(parse_review_date("   "), None);
        assert_eq!(parse_review_date("garbage"), None);
        assert_eq!(parse_review_date("not-a-date"), None);
        assert_eq!(parse_review_date("2019-13-45"), None);
    }
}
