// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use fix_paths_shared_kernel::{Depth, Result};
use serde::{Deserialize, Serialize};

/// DTO representing a file discovered by a [`DirectoryWalker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntryDto {
    pub path: PathBuf,
    pub depth: Depth,
}

/// Port for enumerating every non-directory entry below a root.
pub trait DirectoryWalker {
    fn walk(&self, root: &Path) -> Result<Vec<DirectoryEntryDto>>;
}

/// Port for reading and replacing the full text of a file.
pub trait TextStore {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}
