//! Loglens Record Store
//!
//! This module provides the in-memory log ingestion core:
//!
//! - **types**: Core data structures (`LogRecord`)
//! - **parser**: One raw line → `LogRecord` or a typed failure
//! - **loader**: Directory ingestion building a complete snapshot
//! - **engine**: `LogStore`, the swappable-generation record store
//! - **error**: Error types
//!
//! # Architecture
//!
//! ```text
//! Load Path:
//!   directory → sorted *.log files → lines → parse → Snapshot (records + indexes)
//!
//! Read Path:
//!   handler → Arc<Snapshot> clone → filter / paginate / aggregate
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use loglens::store::LogStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (store, report) = LogStore::open("./logs")?;
//!     println!("loaded {} records", report.records_loaded);
//!
//!     let snapshot = store.snapshot().await;
//!     if let Some(record) = snapshot.get("app_0") {
//!         println!("{}: {}", record.level, record.message);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod loader;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use engine::{LogStore, Snapshot, SnapshotBuilder};
pub use error::{StoreError, StoreResult};
pub use loader::{load_directory, LoadReport};
pub use parser::parse_line;
pub use types::{LogRecord, TIMESTAMP_FORMAT};
