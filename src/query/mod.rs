//! Loglens Query Engine
//!
//! Filter, aggregate, and paginate operations over a store snapshot:
//!
//! - **filter**: `LogFilter` criteria applied over the full record list
//! - **stats**: grouped counts and time-range aggregation
//! - **page**: fixed-size page slicing with total page count
//! - **error**: query parameter validation errors
//!
//! Plus the boundary-side helpers for turning query-string parameters
//! into typed values (`parse_timestamp`, `validate_time_range`).
//!
//! # Example
//!
//! ```rust,ignore
//! use loglens::query::{compute_stats, paginate, LogFilter};
//!
//! let snapshot = store.snapshot().await;
//! let matches = LogFilter::new().level("ERROR").apply(snapshot.records());
//! let (page, total_pages) = paginate(&matches, 1, 50);
//! let stats = compute_stats(&matches);
//! ```

mod error;
mod filter;
mod page;
mod stats;

pub use error::{QueryError, QueryResult};
pub use filter::LogFilter;
pub use page::{paginate, total_pages};
pub use stats::{compute_stats, LogStats, StatsTimeRange};

use chrono::NaiveDateTime;

use crate::store::TIMESTAMP_FORMAT;

/// Parse a query-parameter timestamp in the fixed `YYYY-MM-DD HH:MM:SS`
/// format. Surrounding whitespace is tolerated.
pub fn parse_timestamp(s: &str) -> QueryResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| QueryError::InvalidTimestamp(s.to_string()))
}

/// Reject a time range whose start is strictly after its end.
///
/// Runs at the boundary, before any filtering. A range with only one
/// bound is always well-formed.
pub fn validate_time_range(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> QueryResult<()> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(QueryError::InvalidTimeRange);
        }
    }
    Ok(())
}
