//! Timestamp parsing and display.
//!
//! The backend is loose about timestamp formats (RFC 3339 for notices, naive
//! SQL-style strings for some visitor rows), so [`parse_timestamp`] accepts
//! both and treats naive values as UTC. Display helpers take the target time
//! zone explicitly; screens pass [`chrono::Local`].

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::forms::FormError;

/// `Jan 5, 2025`
pub const DATE_FORMAT: &str = "%b %-d, %Y";
/// `Jan 5, 2025 3:07 PM`
pub const DATE_TIME_FORMAT: &str = "%b %-d, %Y %-I:%M %p";
/// `3:07 PM`
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// Value format of `<input type="datetime-local">`.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", INPUT_FORMAT];

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Format `raw` in `tz` with `format`; unparseable input is returned as-is.
pub fn format_in<Tz: TimeZone>(raw: &str, tz: &Tz, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match parse_timestamp(raw) {
        Some(ts) => ts.with_timezone(tz).format(format).to_string(),
        None => raw.to_string(),
    }
}

pub fn display_date(raw: &str) -> String {
    format_in(raw, &chrono::Local, DATE_FORMAT)
}

pub fn display_date_time(raw: &str) -> String {
    format_in(raw, &chrono::Local, DATE_TIME_FORMAT)
}

pub fn display_time(raw: &str) -> String {
    format_in(raw, &chrono::Local, TIME_FORMAT)
}

/// Parse the value of a `datetime-local` input. Empty input is `None`.
pub fn parse_input(value: &str) -> Result<Option<NaiveDateTime>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(Some)
        .ok_or_else(|| FormError::InvalidDateTime(value.to_string()))
}

/// Render a stored timestamp as a `datetime-local` input value in `tz`.
pub fn to_input<Tz: TimeZone>(raw: &str, tz: &Tz) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.with_timezone(tz).naive_local().format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Interpret a wall-clock time entered in `tz` as a UTC instant. Ambiguous
/// times (DST fold) resolve to the earlier instant.
pub fn local_to_utc<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    #[test]
    fn test_parse_rfc3339_and_naive() {
        let a = parse_timestamp("2025-01-05T15:07:00.000Z").unwrap();
        let b = parse_timestamp("2025-01-05 15:07:00").unwrap();
        let c = parse_timestamp("2025-01-05T20:37:00+05:30").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_format_in_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(
            format_in("2025-01-05T09:37:00Z", &ist, DATE_TIME_FORMAT),
            "Jan 5, 2025 3:07 PM"
        );
        assert_eq!(format_in("2025-01-05T09:37:00Z", &Utc, TIME_FORMAT), "9:37 AM");
        assert_eq!(format_in("garbage", &Utc, DATE_FORMAT), "garbage");
    }

    #[test]
    fn test_input_round_trip() {
        let parsed = parse_input("2025-03-01T18:30").unwrap().unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap()
        );
        let utc = local_to_utc(parsed, &Utc).unwrap();
        assert_eq!(to_input(&utc.to_rfc3339(), &Utc), "2025-03-01T18:30");
    }

    #[test]
    fn test_empty_and_bad_input() {
        assert_eq!(parse_input("  "), Ok(None));
        assert_eq!(
            parse_input("tomorrow"),
            Err(FormError::InvalidDateTime("tomorrow".to_string()))
        );
        assert_eq!(to_input("not a date", &Utc), "");
    }
}
