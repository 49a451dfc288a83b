// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use fix_paths_ports::filesystem::{DirectoryEntryDto, DirectoryWalker};
use fix_paths_shared_kernel::{Depth, InfraResult, InfrastructureError, Result};
use log::{debug, trace};

/// Filesystem adapter implementing the `DirectoryWalker` port with a depth-tracking recursive walk.
///
/// Directories are detected with `fs::metadata`, so symlinks to directories are descended into
/// and a dangling symlink fails the walk. Entries of a directory are visited in path order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveWalker;

impl RecursiveWalker {
    pub fn new() -> Self {
        Self
    }

    /// Collect every non-directory entry below `dir`, tagging each with its depth.
    ///
    /// # Errors
    /// Returns [`InfrastructureError::DirectoryRead`] for the first entry that cannot be listed or
    /// stat'ed. Nothing is skipped.
    pub fn crawl(dir: &Path, depth: Depth) -> InfraResult<Vec<DirectoryEntryDto>> {
        trace!("crawling {} at depth {depth}", dir.display());
        let mut entries = Vec::new();
        for path in list_dir(dir)? {
            let metadata = fs::metadata(&path).map_err(|source| directory_read(&path, source))?;
            if metadata.is_dir() {
                let nested = Self::crawl(&path, depth.descend())?;
                entries.extend(nested);
            } else {
                entries.push(DirectoryEntryDto { path, depth });
            }
        }
        Ok(entries)
    }
}

impl DirectoryWalker for RecursiveWalker {
    fn walk(&self, root: &Path) -> Result<Vec<DirectoryEntryDto>> {
        let entries = Self::crawl(root, Depth::root())?;
        debug!("found {} files under {}", entries.len(), root.display());
        Ok(entries)
    }
}

fn list_dir(dir: &Path) -> InfraResult<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)
        .and_then(|read| {
            read.map(|entry| entry.map(|e| e.path())).collect::<std::io::Result<Vec<_>>>()
        })
        .map_err(|source| directory_read(dir, source))?;
    paths.sort();
    Ok(paths)
}

fn directory_read(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::DirectoryRead { path: path.to_path_buf(), source }
}
