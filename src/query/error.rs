//! Query error types
//!
//! Validation failures for query parameters. These are produced at the
//! request boundary, before any filtering runs, and surface to the
//! caller as client errors.

use thiserror::Error;

/// Errors that can occur while validating query parameters
#[derive(Error, Debug)]
pub enum QueryError {
    /// Query parameter is not a valid timestamp
    #[error("invalid timestamp '{0}': expected format YYYY-MM-DD HH:MM:SS (e.g. 2025-05-07 10:00:00)")]
    InvalidTimestamp(String),

    /// start_time is after end_time
    #[error("invalid time range: start_time cannot be after end_time")]
    InvalidTimeRange,
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;
