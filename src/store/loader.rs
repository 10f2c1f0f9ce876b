//! Log directory ingestion
//!
//! Walks a directory of `.log` files and builds one complete `Snapshot`
//! from them. Ingestion is tolerant: a malformed line or an unreadable
//! file is logged as a warning and skipped, never aborting the load.
//! Only total inability to access (or create) the directory fails.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::store::engine::{Snapshot, SnapshotBuilder};
use crate::store::error::StoreResult;
use crate::store::parser::parse_line;

/// File extension recognized as a log source
const LOG_FILE_EXTENSION: &str = "log";

/// Outcome counters from one load pass
///
/// Returned alongside the snapshot so callers can log the result and so
/// the reload endpoint can report what happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of log files read
    pub files_scanned: usize,
    /// Number of records successfully parsed
    pub records_loaded: usize,
    /// Number of non-blank lines skipped due to parse failures
    pub lines_skipped: usize,
    /// Number of files skipped because they could not be read
    pub files_skipped: usize,
}

/// Load every `.log` file under `dir` into a fresh snapshot.
///
/// A missing directory is created and yields an empty snapshot. Files
/// are read in lexicographic filename order; within a file, lines are
/// read in order, blank lines skipped. This append order is the store's
/// default enumeration order, which pagination relies on.
pub fn load_directory(dir: &Path) -> StoreResult<(Snapshot, LoadReport)> {
    std::fs::create_dir_all(dir)?;

    let mut builder = SnapshotBuilder::new();
    let mut report = LoadReport::default();

    for path in log_files(dir)? {
        match load_file(&path, &mut builder, &mut report) {
            Ok(()) => report.files_scanned += 1,
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable log file");
                report.files_skipped += 1;
            }
        }
    }

    Ok((builder.build(), report))
}

/// Enumerate `.log` files in `dir`, sorted by filename
fn log_files(dir: &Path) -> StoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_log = path.is_file()
            && path
                .extension()
                .map(|ext| ext == LOG_FILE_EXTENSION)
                .unwrap_or(false);
        if is_log {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read one log file line by line into the builder.
///
/// The record index advances per non-blank line (blank lines do not
/// consume an index), so a line that fails to parse still reserves its
/// position. Warnings carry the 1-indexed raw line number.
fn load_file(
    path: &Path,
    builder: &mut SnapshotBuilder,
    report: &mut LoadReport,
) -> StoreResult<()> {
    let file_stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let reader = BufReader::new(File::open(path)?);

    let mut index = 0usize;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line, &file_stem, index) {
            Ok(record) => {
                builder.push(record);
                report.records_loaded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    file = %file_name,
                    line = line_num + 1,
                    error = %e,
                    "skipping invalid log line"
                );
                report.lines_skipped += 1;
            }
        }
        index += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_empty_snapshot() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");

        let (snapshot, report) = load_directory(&missing).unwrap();
        assert_eq!(snapshot.len(), 0);
        assert_eq!(report, LoadReport::default());
        assert!(missing.is_dir());
    }

    #[test]
    fn test_load_order_is_file_then_line_order() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "b.log",
            "2025-05-07 11:00:00\tINFO\tX\tthird\n",
        );
        write_file(
            dir.path(),
            "a.log",
            "2025-05-07 10:00:00\tINFO\tX\tfirst\n2025-05-07 10:00:05\tINFO\tX\tsecond\n",
        );

        let (snapshot, report) = load_directory(dir.path()).unwrap();
        let messages: Vec<&str> = snapshot.records().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.records_loaded, 3);
    }

    #[test]
    fn test_blank_lines_do_not_advance_index() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "a.log",
            "2025-05-07 10:00:00\tINFO\tUserAuth\tlogin ok\n\n2025-05-07 10:00:10\tERROR\tPayment\tdeclined\n",
        );

        let (snapshot, _) = load_directory(dir.path()).unwrap();
        let ids: Vec<&str> = snapshot.records().iter().map(|r| r.log_id.as_str()).collect();
        assert_eq!(ids, vec!["a_0", "a_1"]);
    }

    #[test]
    fn test_invalid_lines_are_skipped_not_fatal() {
        let dir = tempdir().unwrap();
        write_file(
            dir.path(),
            "a.log",
            "2025-05-07 10:00:00\tINFO\tX\tgood\nnot-a-timestamp\tINFO\tX\tbad\ntoo\tfew\n2025-05-07 10:00:30\tWARN\tX\talso good\n",
        );

        let (snapshot, report) = load_directory(dir.path()).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(report.records_loaded, 2);
        assert_eq!(report.lines_skipped, 2);

        // Failed lines still consumed their index
        let ids: Vec<&str> = snapshot.records().iter().map(|r| r.log_id.as_str()).collect();
        assert_eq!(ids, vec!["a_0", "a_3"]);
    }

    #[test]
    fn test_non_log_files_ignored() {
        let dir = tempdir().unwrap();
        write_file(dir.path(), "a.log", "2025-05-07 10:00:00\tINFO\tX\tok\n");
        write_file(dir.path(), "notes.txt", "2025-05-07 10:00:00\tINFO\tX\tnope\n");

        let (snapshot, report) = load_directory(dir.path()).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(report.files_scanned, 1);
    }
}
