use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::model::{DirectoryEntry, FixOutcome};

/// Outcome of one run over a scan root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixSummary {
    /// Number of candidate files that were examined.
    pub scanned: usize,
    /// Candidate files that were (or, in dry-run mode, would be) rewritten.
    pub changed: Vec<PathBuf>,
    /// Alias references rewritten across all changed files.
    pub occurrences: usize,
    pub dry_run: bool,
}

impl FixSummary {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, ..Self::default() }
    }

    pub fn record(&mut self, entry: &DirectoryEntry, outcome: FixOutcome) {
        self.scanned += 1;
        if outcome.was_modified() {
            self.changed.push(entry.path.clone());
            self.occurrences += outcome.occurrences();
        }
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FixSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let changed = self.changed.len();
        if changed == 0 {
            return write!(f, "No files modified (of {}).", self.scanned);
        }
        let verb = if self.dry_run { "Would fix" } else { "Fixed" };
        let plural = if changed > 1 { "s" } else { "" };
        write!(f, "{verb} {changed} file{plural} (of {}).", self.scanned)
    }
}
