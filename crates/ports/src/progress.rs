// crates/ports/src/progress.rs
use std::path::Path;

pub trait ProgressSink {
    fn on_file(&self, path: &Path, occurrences: usize);
    fn on_complete(&self, scanned: usize, changed: usize);
}
