use crate::{config::CandidateFilter, model::DirectoryEntry};

/// Every non-directory entry found below a scan root, in walk order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    entries: Vec<DirectoryEntry>,
}

impl ScanResult {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose path passes `filter`, keeping walk order.
    pub fn candidates(self, filter: &CandidateFilter) -> Vec<DirectoryEntry> {
        self.entries.into_iter().filter(|entry| filter.matches(&entry.path)).collect()
    }
}

impl From<Vec<DirectoryEntry>> for ScanResult {
    fn from(entries: Vec<DirectoryEntry>) -> Self {
        Self::new(entries)
    }
}
