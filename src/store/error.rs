//! Record store error types
//!
//! Defines all errors that can occur while parsing and loading log files.

use thiserror::Error;

/// Errors that can occur in the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Line has fewer than the required tab-separated fields
    #[error("malformed line: expected at least 4 tab-separated fields, got {found}")]
    MalformedLine { found: usize },

    /// First field of a line is not a valid timestamp
    #[error("invalid timestamp '{value}': expected format YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::MalformedLine { found: 2 };
        assert_eq!(
            err.to_string(),
            "malformed line: expected at least 4 tab-separated fields, got 2"
        );

        let err = StoreError::InvalidTimestamp {
            value: "not-a-timestamp".to_string(),
        };
        assert!(err.to_string().contains("not-a-timestamp"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
