use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file as UTF-8 text. Invalid UTF-8 yields `ErrorKind::InvalidData`.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
