//! Time utility functions

use chrono::{DateTime, Utc};

use crate::core::constants::TRACE_TIME_DISPLAY_FORMAT;

/// Parse ISO 8601 / RFC 3339 timestamp string to DateTime<Utc>
pub fn parse_iso_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Sort key for span start times: nanoseconds since epoch.
///
/// Unparsable or out-of-range timestamps collapse to 0 so they sort first
/// and compare equal to each other.
pub fn timestamp_sort_key(ts: &str) -> i64 {
    match parse_iso_timestamp(ts) {
        Some(dt) => dt.timestamp_nanos_opt().unwrap_or_else(|| {
            tracing::warn!(ts, "Timestamp out of range, using epoch");
            0
        }),
        None => {
            if !ts.is_empty() {
                tracing::warn!(ts, "Invalid ISO timestamp, using epoch");
            }
            0
        }
    }
}

/// Format a timestamp for tables (`DD/MM/YYYY HH:mm:ss`, UTC); raw input when unparsable
pub fn format_display_time(ts: &str) -> String {
    parse_iso_timestamp(ts)
        .map(|dt| dt.format(TRACE_TIME_DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso_timestamp_valid() {
        let dt = parse_iso_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_iso_timestamp_with_offset() {
        let dt = parse_iso_timestamp("2024-01-15T10:30:00+05:00").unwrap();
        // 10:30 at +05:00 is 05:30 UTC
        assert_eq!(dt.hour(), 5);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_iso_timestamp_invalid() {
        assert!(parse_iso_timestamp("not-a-timestamp").is_none());
    }

    #[test]
    fn test_sort_key_orders_by_instant() {
        let a = timestamp_sort_key("2024-01-15T10:30:00.000000001Z");
        let b = timestamp_sort_key("2024-01-15T10:30:00.000000002Z");
        let c = timestamp_sort_key("2024-01-15T11:30:00+01:00");
        assert!(a < b);
        // Same instant as 10:30Z
        assert_eq!(c, timestamp_sort_key("2024-01-15T10:30:00Z"));
    }

    #[test]
    fn test_sort_key_invalid_is_zero() {
        assert_eq!(timestamp_sort_key(""), 0);
        assert_eq!(timestamp_sort_key("garbage"), 0);
    }

    #[test]
    fn test_format_display_time() {
        assert_eq!(
            format_display_time("2025-03-09T07:05:03Z"),
            "09/03/2025 07:05:03"
        );
        assert_eq!(format_display_time("n/a"), "n/a");
    }
}
