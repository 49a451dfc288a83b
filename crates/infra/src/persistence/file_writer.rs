// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::Builder;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Truncate `path` and write `data` in place. A crash mid-write can leave a partial file.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()
    }

    /// Replace the file behind `path` with `data` via a sibling temp file and a rename.
    ///
    /// Symlinks are resolved first so the link survives and its target gets the new
    /// contents. The replaced file's permissions carry over. The temp file is removed on
    /// every error path.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
        let target = resolve_target(path.as_ref())?;
        let parent = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

        // Same directory as the target so the rename stays on one filesystem.
        let mut tmp = Builder::new().prefix(".fix_paths.").suffix(".tmp").tempfile_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions)?;
        }
        let _ = tmp.as_file().sync_all();
        tmp.persist(&target).map_err(|err| err.error)?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

/// Follow symlinks to the real file. A path that does not exist yet is used as given.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(real) => Ok(real),
        Err(err) if err.kind() == ErrorKind::NotFound && fs::symlink_metadata(path).is_err() => {
            Ok(path.to_path_buf())
        }
        Err(err) => Err(err),
    }
}
