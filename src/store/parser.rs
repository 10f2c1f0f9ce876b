//! Log line parser
//!
//! Converts one raw text line into a `LogRecord` or a typed parse
//! failure. Pure function, no side effects; the caller decides what to
//! do with failures (the loader logs and skips them).

use chrono::NaiveDateTime;

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{LogRecord, TIMESTAMP_FORMAT};

/// Parse a single log line.
///
/// `line` must already be stripped of surrounding whitespace and
/// non-empty (the loader skips blank lines). `file_stem` is the source
/// file's base name without extension; `index` is the line's 0-indexed
/// position among the file's non-blank lines, and becomes part of the
/// record id.
///
/// The line is split on tab into at most 4 fields:
/// `timestamp \t level \t component \t message`. The message is taken
/// as the raw remainder after the third tab and may itself contain
/// tabs. Level and component are trimmed.
pub fn parse_line(line: &str, file_stem: &str, index: usize) -> StoreResult<LogRecord> {
    let mut fields = line.splitn(4, '\t');

    let timestamp_str = fields.next().unwrap_or_default();
    let level = fields.next();
    let component = fields.next();
    let message = fields.next();

    let (level, component, message) = match (level, component, message) {
        (Some(level), Some(component), Some(message)) => (level, component, message),
        _ => {
            return Err(StoreError::MalformedLine {
                found: line.split('\t').count(),
            })
        }
    };

    let timestamp = NaiveDateTime::parse_from_str(timestamp_str, TIMESTAMP_FORMAT).map_err(
        |_| StoreError::InvalidTimestamp {
            value: timestamp_str.to_string(),
        },
    )?;

    Ok(LogRecord {
        log_id: LogRecord::make_id(file_stem, index),
        timestamp,
        level: level.trim().to_string(),
        component: component.trim().to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let record =
            parse_line("2025-05-07 10:00:00\tINFO\tUserAuth\tlogin ok", "sample", 0).unwrap();

        assert_eq!(record.log_id, "sample_0");
        assert_eq!(record.level, "INFO");
        assert_eq!(record.component, "UserAuth");
        assert_eq!(record.message, "login ok");
        assert_eq!(
            record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "2025-05-07 10:00:00"
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let line = "2025-05-07 10:00:00\tINFO\tUserAuth\tlogin ok";
        let a = parse_line(line, "sample", 3).unwrap();
        let b = parse_line(line, "sample", 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_message_keeps_embedded_tabs() {
        let record = parse_line(
            "2025-05-07 10:00:00\tINFO\tX\tkey=a\tvalue=b\tmore",
            "f",
            0,
        )
        .unwrap();
        assert_eq!(record.message, "key=a\tvalue=b\tmore");
    }

    #[test]
    fn test_level_and_component_trimmed() {
        let record = parse_line("2025-05-07 10:00:00\t INFO \t Payment \tdeclined", "f", 1).unwrap();
        assert_eq!(record.level, "INFO");
        assert_eq!(record.component, "Payment");
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_line("2025-05-07 10:00:00\tINFO\tno message", "f", 0).unwrap_err();
        assert!(matches!(err, StoreError::MalformedLine { found: 3 }));

        let err = parse_line("just one field", "f", 0).unwrap_err();
        assert!(matches!(err, StoreError::MalformedLine { found: 1 }));
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = parse_line("not-a-timestamp\tINFO\tX\tbad", "f", 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidTimestamp { .. }));

        // Date without time is not enough
        let err = parse_line("2025-05-07\tINFO\tX\tbad", "f", 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidTimestamp { .. }));
    }
}
