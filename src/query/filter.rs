//! Record filtering
//!
//! `LogFilter` holds the optional query criteria and applies them as
//! sequential predicates over the store's full record list. Matching is
//! exact and case-sensitive; an absent criterion constrains nothing.

use chrono::NaiveDateTime;

use crate::store::LogRecord;

/// Filter criteria for log queries
///
/// Both time bounds are inclusive. The boundary layer validates that
/// start is not after end before a filter reaches the engine; a filter
/// with only one bound (or an inverted one) still evaluates without
/// error, it just matches accordingly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    /// Match records with exactly this level
    pub level: Option<String>,
    /// Match records with exactly this component
    pub component: Option<String>,
    /// Match records with timestamp >= start (inclusive)
    pub start: Option<NaiveDateTime>,
    /// Match records with timestamp <= end (inclusive)
    pub end: Option<NaiveDateTime>,
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Check if a record matches every present criterion
    pub fn matches(&self, record: &LogRecord) -> bool {
        if let Some(level) = &self.level {
            if &record.level != level {
                return false;
            }
        }

        if let Some(component) = &self.component {
            if &record.component != component {
                return false;
            }
        }

        if let Some(start) = self.start {
            if record.timestamp < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            if record.timestamp > end {
                return false;
            }
        }

        true
    }

    /// Apply this filter over the full record list.
    ///
    /// Relative order of matches equals their order in `records` (load
    /// order when called on a snapshot's record list). An empty result
    /// is not an error.
    pub fn apply<'a>(&self, records: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
