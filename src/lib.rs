//! # Loglens
//!
//! REST API for reading, parsing, and analyzing line-delimited log
//! files. Source files are tab-separated
//! (`timestamp \t level \t component \t message`), loaded once at
//! startup into an in-memory store and queryable with filters,
//! pagination, and aggregated statistics.
//!
//! ## Modules
//!
//! - [`store`]: Line parser, directory loader, and the swappable-generation record store
//! - [`query`]: Filter, statistics, and pagination operations
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loglens::query::{compute_stats, LogFilter};
//! use loglens::store::LogStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load all .log files from a directory
//!     let (store, report) = LogStore::open("./logs")?;
//!     println!("loaded {} records", report.records_loaded);
//!
//!     // Filter and aggregate
//!     let snapshot = store.snapshot().await;
//!     let errors = LogFilter::new().level("ERROR").apply(snapshot.records());
//!     let stats = compute_stats(&errors);
//!     println!("{} errors across {} components", stats.total_entries, stats.component_counts.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use store::{LoadReport, LogRecord, LogStore, Snapshot, StoreError, StoreResult};

pub use query::{compute_stats, paginate, LogFilter, LogStats, QueryError, QueryResult};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError};
