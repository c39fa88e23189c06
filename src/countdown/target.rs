//! Target date-time parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a raw target string into an absolute instant.
///
/// Accepts RFC 3339 (`2026-09-01T12:00:00+08:00`), the offset-less shape
/// produced by `datetime-local` inputs (`2026-09-01T12:00`, optionally with
/// seconds), and bare dates (midnight). Offset-less values are read as UTC;
/// everything downstream compares absolute instants only.
///
/// Returns `None` for anything unparseable. Callers treat that the same as a
/// target that has already passed.
pub fn parse_target(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_datetime_local_shape() {
        let parsed = parse_target("2026-09-01T12:30").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 9, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn parses_with_seconds() {
        let parsed = parse_target("2026-09-01T12:30:45").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 9, 1, 12, 30, 45).unwrap());
    }

    #[test]
    fn parses_rfc3339_and_normalizes_offset() {
        let parsed = parse_target("2026-09-01T12:00:00+08:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 9, 1, 4, 0, 0).unwrap());
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let parsed = parse_target("2026-09-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_target("").is_none());
        assert!(parse_target("  ").is_none());
        assert!(parse_target("not a date").is_none());
        assert!(parse_target("2026-13-40T99:99").is_none());
    }
}
