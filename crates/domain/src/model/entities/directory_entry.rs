use std::path::PathBuf;

use crate::value_objects::Depth;

/// A discovered file together with its depth below the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub depth: Depth,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<PathBuf>, depth: impl Into<Depth>) -> Self {
        Self { path: path.into(), depth: depth.into() }
    }
}
