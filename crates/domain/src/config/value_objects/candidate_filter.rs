use std::path::Path;

use fix_paths_shared_kernel::{DomainError, DomainResult};

pub const DEFAULT_EXTENSION: &str = ".js";

/// Selects candidate files by the suffix of their path.
///
/// The comparison is byte-wise and case-sensitive, so `a.js.map` and `a.JS` are not candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFilter {
    suffix: String,
}

impl CandidateFilter {
    pub fn new(suffix: impl Into<String>) -> DomainResult<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "candidate extension must not be empty".to_string(),
            });
        }
        Ok(Self { suffix })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.as_os_str().as_encoded_bytes().ends_with(self.suffix.as_bytes())
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self { suffix: DEFAULT_EXTENSION.to_string() }
    }
}
