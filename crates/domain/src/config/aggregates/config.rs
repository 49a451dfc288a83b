use std::path::PathBuf;

use fix_paths_shared_kernel::DomainResult;

use crate::{
    config::{AliasPattern, CandidateFilter},
    options::{OutputFormat, WriteMode},
};

pub const DEFAULT_ROOT: &str = "dist";

/// Domain representation of resolved configuration options.
#[derive(Debug, Clone)]
pub struct FixConfig {
    pub root: PathBuf,
    pub pattern: AliasPattern,
    pub candidates: CandidateFilter,
    pub write_mode: WriteMode,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl FixConfig {
    /// Configuration matching the plain post-build invocation, rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> DomainResult<Self> {
        Ok(Self {
            root: root.into(),
            pattern: AliasPattern::require_alias()?,
            candidates: CandidateFilter::default(),
            write_mode: WriteMode::default(),
            dry_run: false,
            format: OutputFormat::default(),
        })
    }
}
