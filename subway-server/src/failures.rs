//! Record of unsuccessful path searches.
//!
//! Each failure is appended to a pretty-printed JSON array on disk, so gaps
//! in the segment data can be found after the fact. Recording is best
//! effort: IO problems are logged and never reach the query.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::domain::{LineId, StationCode};
use crate::topology::PathSearch;

/// Default file name for the failure log.
pub const DEFAULT_FAILURE_LOG: &str = "bfs_failures.json";

/// One failed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    pub start: String,
    pub end: String,
    pub line: String,
    pub reason: String,
    /// Stations reached before the search gave up.
    pub visited: Vec<String>,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

impl FailureRecord {
    /// Build a record from a failed search. Returns `None` if it succeeded.
    pub fn from_search(
        line: &LineId,
        start: &StationCode,
        end: &StationCode,
        search: &PathSearch,
    ) -> Option<Self> {
        let reason = search.failure_reason()?;
        let visited = match search {
            PathSearch::Unreachable { visited } => {
                visited.iter().map(|s| s.as_str().to_string()).collect()
            }
            _ => Vec::new(),
        };

        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
            line: line.to_string(),
            reason: reason.to_string(),
            visited,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }
}

/// Append-only JSON failure log.
#[derive(Debug)]
pub struct FailureLog {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FailureLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the file.
    pub fn record(&self, record: FailureRecord) {
        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut records = self.read_existing();
        records.push(record);

        match serde_json::to_string_pretty(&records) {
            Ok(json) => match std::fs::write(&self.path, json) {
                Ok(()) => info!(path = %self.path.display(), "path failure recorded"),
                Err(e) => error!(path = %self.path.display(), error = %e, "failed to write failure log"),
            },
            Err(e) => error!(error = %e, "failed to serialize failure log"),
        }
    }

    /// Record a search if it failed. Returns whether anything was written.
    pub fn record_search(
        &self,
        line: &LineId,
        start: &StationCode,
        end: &StationCode,
        search: &PathSearch,
    ) -> bool {
        match FailureRecord::from_search(line, start, end, search) {
            Some(record) => {
                self.record(record);
                true
            }
            None => false,
        }
    }

    /// All records currently on disk.
    pub fn read_existing(&self) -> Vec<FailureRecord> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "failed to read failure log");
                return Vec::new();
            }
        };

        serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "failure log unreadable, starting over");
            Vec::new()
        })
    }
}
