//! Log record store
//!
//! `LogStore` owns the current generation of parsed records behind a
//! read/write lock. Reads clone the current `Arc<Snapshot>` and operate
//! on it lock-free; reload builds a complete replacement snapshot
//! outside the lock and swaps it in atomically, so no reader ever sees
//! a record list and indexes built from different source data.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::error::StoreResult;
use crate::store::loader::{load_directory, LoadReport};
use crate::store::types::LogRecord;

/// One immutable generation of the store's data
///
/// Holds the full record list in load order plus the three derived
/// indexes, all built together before the snapshot is published.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<LogRecord>,
    by_id: HashMap<String, usize>,
    by_level: HashMap<String, Vec<usize>>,
    by_component: HashMap<String, Vec<usize>>,
}

impl Snapshot {
    /// All records in load order (across files in filename order, within
    /// a file in line order)
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Number of records in this generation
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lookup by record id
    pub fn get(&self, log_id: &str) -> Option<&LogRecord> {
        self.by_id.get(log_id).map(|&i| &self.records[i])
    }

    /// Records with the given level, in load order
    pub fn by_level(&self, level: &str) -> Vec<&LogRecord> {
        self.index_lookup(&self.by_level, level)
    }

    /// Records with the given component, in load order
    pub fn by_component(&self, component: &str) -> Vec<&LogRecord> {
        self.index_lookup(&self.by_component, component)
    }

    fn index_lookup<'a>(
        &'a self,
        index: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> Vec<&'a LogRecord> {
        index
            .get(key)
            .map(|positions| positions.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }
}

/// Incremental snapshot construction used by the loader
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and index it
    pub fn push(&mut self, record: LogRecord) {
        let position = self.snapshot.records.len();
        self.snapshot
            .by_id
            .insert(record.log_id.clone(), position);
        self.snapshot
            .by_level
            .entry(record.level.clone())
            .or_default()
            .push(position);
        self.snapshot
            .by_component
            .entry(record.component.clone())
            .or_default()
            .push(position);
        self.snapshot.records.push(record);
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// The shared record store
///
/// Intended use: one `LogStore` per process, shared via `Arc` across
/// request handlers. All query operations are read-only against a
/// snapshot; `reload` is the only mutating operation.
#[derive(Debug)]
pub struct LogStore {
    log_dir: PathBuf,
    current: RwLock<Arc<Snapshot>>,
}

impl LogStore {
    /// Create a store over `log_dir` and run the initial load pass
    pub fn open(log_dir: impl Into<PathBuf>) -> StoreResult<(Self, LoadReport)> {
        let log_dir = log_dir.into();
        let (snapshot, report) = load_directory(&log_dir)?;

        let store = Self {
            log_dir,
            current: RwLock::new(Arc::new(snapshot)),
        };
        Ok((store, report))
    }

    /// Directory this store reads from
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Get the current generation. In-flight queries keep using the
    /// snapshot they got even if a reload swaps the store underneath.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.current.read().await)
    }

    /// Rebuild the snapshot from disk and atomically replace the
    /// current generation.
    ///
    /// The new snapshot is built fully before the write lock is taken;
    /// the lock is held only for the pointer swap.
    pub async fn reload(&self) -> StoreResult<LoadReport> {
        let (snapshot, report) = load_directory(&self.log_dir)?;

        let mut current = self.current.write().await;
        *current = Arc::new(snapshot);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_open_and_lookup() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "app.log",
            "2025-05-07 10:00:00\tINFO\tUserAuth\tlogin ok\n2025-05-07 10:00:10\tERROR\tPayment\tdeclined\n",
        );

        let (store, report) = LogStore::open(dir.path()).unwrap();
        assert_eq!(report.records_loaded, 2);

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 2);

        let record = snapshot.get("app_1").unwrap();
        assert_eq!(record.level, "ERROR");
        assert_eq!(record.component, "Payment");

        assert!(snapshot.get("nope_0").is_none());
    }

    #[tokio::test]
    async fn test_level_and_component_indexes_preserve_order() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "app.log",
            "2025-05-07 10:00:00\tINFO\tUserAuth\tfirst\n\
             2025-05-07 10:00:05\tERROR\tPayment\tsecond\n\
             2025-05-07 10:00:10\tINFO\tPayment\tthird\n",
        );

        let (store, _) = LogStore::open(dir.path()).unwrap();
        let snapshot = store.snapshot().await;

        let info: Vec<&str> = snapshot.by_level("INFO").iter().map(|r| r.message.as_str()).collect();
        assert_eq!(info, vec!["first", "third"]);

        let payment: Vec<&str> = snapshot
            .by_component("Payment")
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(payment, vec!["second", "third"]);

        assert!(snapshot.by_level("TRACE").is_empty());
    }

    #[tokio::test]
    async fn test_reload_swaps_generation() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "app.log", "2025-05-07 10:00:00\tINFO\tX\tone\n");

        let (store, _) = LogStore::open(dir.path()).unwrap();
        let old = store.snapshot().await;
        assert_eq!(old.len(), 1);

        write_file(
            dir.path(),
            "app.log",
            "2025-05-07 10:00:00\tINFO\tX\tone\n2025-05-07 10:00:05\tINFO\tX\ttwo\n",
        );
        let report = store.reload().await.unwrap();
        assert_eq!(report.records_loaded, 2);

        // The old generation is untouched, the new one is visible
        assert_eq!(old.len(), 1);
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_reload_is_idempotent_over_unchanged_data() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "app.log",
            "2025-05-07 10:00:00\tINFO\tX\tone\n2025-05-07 10:00:05\tWARN\tY\ttwo\n",
        );

        let (store, _) = LogStore::open(dir.path()).unwrap();
        let before = store.snapshot().await;
        store.reload().await.unwrap();
        let after = store.snapshot().await;

        assert_eq!(before.records(), after.records());
    }
}
