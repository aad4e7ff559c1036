//! 日期时间序列化/反序列化工具
//!
//! The API reports timestamps as `"YYYY-MM-DD HH:MM:SS"` without a zone; they
//! are read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serializer;

/// Wire format of registrar timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a registrar timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

/// Formats a timestamp back into the wire format.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// `serialize_with` helper writing the wire format.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_wire_format() {
        let dt = parse_timestamp("2023-01-01 12:00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2023, 1, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (12, 0, 0));
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_timestamp("invalid-date").is_err());
        assert!(parse_timestamp("2023-01-01T12:00:00Z").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn formats_back_to_wire() {
        let dt = parse_timestamp("2024-02-29 23:59:01").unwrap();
        assert_eq!(format_timestamp(&dt), "2024-02-29 23:59:01");
    }
}
