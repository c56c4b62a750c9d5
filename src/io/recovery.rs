use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Write `content` to `path` atomically using a temp file + rename.
/// The temp file lives in the target directory so the rename never
/// crosses a filesystem boundary.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// One line of the JSON-lines recovery log.
///
/// When a history save fails, the serialized snapshot lands here so a
/// disk-full or permission failure never silently discards the session's
/// messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoveryEntry {
    pub timestamp: DateTime<Utc>,
    pub reason: String,
    /// The message-history JSON that failed to reach disk
    pub snapshot: String,
}

impl RecoveryEntry {
    pub fn new(reason: String, snapshot: String) -> Self {
        RecoveryEntry {
            timestamp: Utc::now(),
            reason,
            snapshot,
        }
    }
}

/// Return the path to the recovery log file
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.jsonl")
}

/// Append an entry to the recovery log. When the data directory itself is
/// unwritable (the usual reason a save failed in the first place), the
/// entry falls back to a `lovenote` directory under the system temp dir.
/// Returns the directory that accepted the entry; the log is a best-effort
/// safety net, so its own failures are only warned about, never raised.
pub fn log_recovery(data_dir: &Path, entry: &RecoveryEntry) -> Option<PathBuf> {
    let first = match log_recovery_inner(data_dir, entry) {
        Ok(()) => return Some(data_dir.to_path_buf()),
        Err(e) => e,
    };

    let fallback = std::env::temp_dir().join("lovenote");
    match log_recovery_inner(&fallback, entry) {
        Ok(()) => {
            tracing::warn!(
                "recovery log unwritable at {} ({first}), entry captured in {}",
                data_dir.display(),
                fallback.display()
            );
            Some(fallback)
        }
        Err(second) => {
            tracing::warn!("could not write to recovery log: {first}; fallback failed: {second}");
            None
        }
    }
}

fn log_recovery_inner(data_dir: &Path, entry: &RecoveryEntry) -> io::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let mut line = serde_json::to_string(entry).map_err(io::Error::other)?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(recovery_log_path(data_dir))?;
    file.write_all(line.as_bytes())
}

/// Read recovery entries, oldest first. A missing log is empty;
/// unparseable lines are skipped.
pub fn read_recovery_entries(data_dir: &Path) -> Vec<RecoveryEntry> {
    let content = match std::fs::read_to_string(recovery_log_path(data_dir)) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };
    content
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

/// Delete the recovery log. Returns how many entries it held.
pub fn clear_recovery(data_dir: &Path) -> io::Result<usize> {
    let path = recovery_log_path(data_dir);
    if !path.exists() {
        return Ok(0);
    }
    let count = read_recovery_entries(data_dir).len();
    std::fs::remove_file(&path)?;
    Ok(count)
}
