//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::query::LogStats;
use crate::store::{LoadReport, LogRecord};

// ============================================
// LOG LISTING DTOs
// ============================================

/// Query parameters for GET /logs
#[derive(Debug, Default, Deserialize)]
pub struct LogsParams {
    /// Filter by log level (e.g. INFO, WARNING, ERROR)
    #[serde(default)]
    pub level: Option<String>,
    /// Filter by component name
    #[serde(default)]
    pub component: Option<String>,
    /// Inclusive lower timestamp bound (YYYY-MM-DD HH:MM:SS)
    #[serde(default)]
    pub start_time: Option<String>,
    /// Inclusive upper timestamp bound (YYYY-MM-DD HH:MM:SS)
    #[serde(default)]
    pub end_time: Option<String>,
    /// Page number, 1-indexed (default: 1)
    #[serde(default)]
    pub page: Option<usize>,
    /// Entries per page (default and cap from config)
    #[serde(default)]
    pub page_size: Option<usize>,
}

/// Response body for GET /logs
#[derive(Debug, Serialize)]
pub struct LogsResponse {
    /// Total number of matching records
    pub total: usize,
    /// Current page number
    pub page: usize,
    /// Number of entries per page
    pub page_size: usize,
    /// Total number of pages
    pub total_pages: usize,
    /// The page's records
    pub logs: Vec<LogRecord>,
}

// ============================================
// STATS DTOs
// ============================================

/// Query parameters for GET /logs/stats
#[derive(Debug, Default, Deserialize)]
pub struct StatsParams {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

// `LogStats` already has the wire shape; re-exported for handlers.
pub type StatsResponse = LogStats;

// ============================================
// RELOAD DTOs
// ============================================

/// Response body for POST /logs/reload
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    /// Status: "ok"
    pub status: String,
    /// Number of log files read
    pub files_scanned: usize,
    /// Number of records loaded
    pub records_loaded: usize,
    /// Non-blank lines skipped due to parse failures
    pub lines_skipped: usize,
    /// Files skipped because they could not be read
    pub files_skipped: usize,
}

impl From<LoadReport> for ReloadResponse {
    fn from(report: LoadReport) -> Self {
        Self {
            status: "ok".to_string(),
            files_scanned: report.files_scanned,
            records_loaded: report.records_loaded,
            lines_skipped: report.lines_skipped,
            files_skipped: report.files_skipped,
        }
    }
}

// ============================================
// HEALTH / INFO DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of records in the current generation
    pub total_logs_loaded: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

/// Service info response for the root endpoint
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Endpoint map: method+path -> short description
    pub endpoints: HashMap<String, String>,
}
