//! Statistics aggregation
//!
//! Computes grouped counts and the observed time range over an
//! already-filtered record set in one pass. Empty input yields zero
//! counts and absent range bounds, never an error.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::store::LogRecord;

/// Aggregated statistics over a record set
///
/// Count maps contain only levels/components that occur at least once;
/// the sums of their values always equal `total_entries`. Map iteration
/// order is not significant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogStats {
    /// Number of records aggregated
    pub total_entries: usize,
    /// Occurrence count per distinct level
    pub level_counts: HashMap<String, usize>,
    /// Occurrence count per distinct component
    pub component_counts: HashMap<String, usize>,
    /// Minimum and maximum timestamp among the records
    pub time_range: StatsTimeRange,
}

/// Observed timestamp range; both bounds absent for an empty input
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsTimeRange {
    pub earliest: Option<NaiveDateTime>,
    pub latest: Option<NaiveDateTime>,
}

/// Aggregate a filtered record set
pub fn compute_stats(records: &[&LogRecord]) -> LogStats {
    let mut level_counts: HashMap<String, usize> = HashMap::new();
    let mut component_counts: HashMap<String, usize> = HashMap::new();
    let mut earliest: Option<NaiveDateTime> = None;
    let mut latest: Option<NaiveDateTime> = None;

    for record in records {
        *level_counts.entry(record.level.clone()).or_default() += 1;
        *component_counts.entry(record.component.clone()).or_default() += 1;

        if earliest.map(|e| record.timestamp < e).unwrap_or(true) {
            earliest = Some(record.timestamp);
        }
        if latest.map(|l| record.timestamp > l).unwrap_or(true) {
            latest = Some(record.timestamp);
        }
    }

    LogStats {
        total_entries: records.len(),
        level_counts,
        component_counts,
        time_range: StatsTimeRange { earliest, latest },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TIMESTAMP_FORMAT;

    fn record(timestamp: &str, level: &str, component: &str) -> LogRecord {
        LogRecord {
            log_id: String::new(),
            timestamp: NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).unwrap(),
            level: level.to_string(),
            component: component.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.level_counts.is_empty());
        assert!(stats.component_counts.is_empty());
        assert_eq!(stats.time_range.earliest, None);
        assert_eq!(stats.time_range.latest, None);
    }

    #[test]
    fn test_counts_and_range() {
        let records = vec![
            record("2025-05-07 10:00:00", "INFO", "UserAuth"),
            record("2025-05-07 10:00:10", "ERROR", "Payment"),
            record("2025-05-07 10:00:05", "INFO", "UserAuth"),
        ];
        let refs: Vec<&LogRecord> = records.iter().collect();
        let stats = compute_stats(&refs);

        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.level_counts.get("INFO"), Some(&2));
        assert_eq!(stats.level_counts.get("ERROR"), Some(&1));
        assert_eq!(stats.level_counts.len(), 2);
        assert_eq!(stats.component_counts.get("UserAuth"), Some(&2));
        assert_eq!(stats.component_counts.get("Payment"), Some(&1));

        let earliest = stats.time_range.earliest.unwrap();
        let latest = stats.time_range.latest.unwrap();
        assert_eq!(earliest.format(TIMESTAMP_FORMAT).to_string(), "2025-05-07 10:00:00");
        assert_eq!(latest.format(TIMESTAMP_FORMAT).to_string(), "2025-05-07 10:00:10");
    }

    #[test]
    fn test_count_sums_equal_total() {
        // Holds with ties and duplicate timestamps
        let records = vec![
            record("2025-05-07 10:00:00", "INFO", "A"),
            record("2025-05-07 10:00:00", "INFO", "B"),
            record("2025-05-07 10:00:00", "WARN", "A"),
            record("2025-05-07 10:00:00", "ERROR", "C"),
        ];
        let refs: Vec<&LogRecord> = records.iter().collect();
        let stats = compute_stats(&refs);

        assert_eq!(stats.level_counts.values().sum::<usize>(), stats.total_entries);
        assert_eq!(
            stats.component_counts.values().sum::<usize>(),
            stats.total_entries
        );
    }

    #[test]
    fn test_single_record() {
        let records = vec![record("2025-05-07 10:00:00", "INFO", "A")];
        let refs: Vec<&LogRecord> = records.iter().collect();
        let stats = compute_stats(&refs);

        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.time_range.earliest, stats.time_range.latest);
    }
}
