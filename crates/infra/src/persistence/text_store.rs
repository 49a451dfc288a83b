// crates/infra/src/persistence/text_store.rs
use std::path::Path;

use fix_paths_ports::filesystem::TextStore;
use fix_paths_shared_kernel::{InfrastructureError, Result};

use super::{FileReader, FileWriter};

/// Filesystem adapter implementing the `TextStore` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextStore {
    atomic: bool,
}

impl FsTextStore {
    /// Overwrite files in place.
    pub fn in_place() -> Self {
        Self { atomic: false }
    }

    /// Replace files through a temp file and rename.
    pub fn atomic() -> Self {
        Self { atomic: true }
    }
}

impl TextStore for FsTextStore {
    fn read_text(&self, path: &Path) -> Result<String> {
        FileReader::read_to_string(path).map_err(|source| {
            InfrastructureError::FileRead { path: path.to_path_buf(), source }.into()
        })
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        let written = if self.atomic {
            FileWriter::atomic_write(path, text.as_bytes())
        } else {
            FileWriter::overwrite(path, text.as_bytes())
        };
        written.map_err(|source| {
            InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into()
        })
    }
}
