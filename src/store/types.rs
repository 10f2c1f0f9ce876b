//! Core data types for the loglens record store
//!
//! This module defines `LogRecord`, the structured form of one parsed
//! log line. Every record in the store passed parsing successfully;
//! malformed lines never produce a record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The fixed textual timestamp format used by log lines and query
/// parameters alike: `YYYY-MM-DD HH:MM:SS`, second precision, no
/// timezone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed log line
///
/// Serialized field names match the wire format (`log_id`, ISO-shaped
/// timestamp), so records can be returned from the API as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogRecord {
    /// Unique identifier, `{file_stem}_{index}` where `index` is the
    /// record's 0-indexed position among the file's non-blank lines.
    ///
    /// Uniqueness holds only while no two source files share a stem, and
    /// an index can shift across reloads if blank lines are added or
    /// removed above it. Documented fragility, not enforced.
    pub log_id: String,
    /// Timestamp of the log line, naive/local, second precision
    pub timestamp: NaiveDateTime,
    /// Severity label (e.g. INFO, ERROR) — free-form, not an enum
    pub level: String,
    /// Component/source label — free-form
    pub component: String,
    /// Remaining free-text content of the line
    pub message: String,
}

impl LogRecord {
    /// Build the identifier for a record at `index` within `file_stem`
    pub fn make_id(file_stem: &str, index: usize) -> String {
        format!("{}_{}", file_stem, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_id() {
        assert_eq!(LogRecord::make_id("app_2025_05_07", 0), "app_2025_05_07_0");
        assert_eq!(LogRecord::make_id("a", 12), "a_12");
    }

    #[test]
    fn test_record_serialization() {
        let record = LogRecord {
            log_id: "sample_0".to_string(),
            timestamp: NaiveDateTime::parse_from_str("2025-05-07 10:00:00", TIMESTAMP_FORMAT)
                .unwrap(),
            level: "INFO".to_string(),
            component: "UserAuth".to_string(),
            message: "login ok".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["log_id"], "sample_0");
        // NaiveDateTime serializes in ISO shape, no timezone suffix
        assert_eq!(json["timestamp"], "2025-05-07T10:00:00");

        let restored: LogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(restored, record);
    }
}
