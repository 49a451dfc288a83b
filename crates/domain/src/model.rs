pub mod entities;
pub mod value_objects;

pub use entities::{DirectoryEntry, ScanResult};
pub use value_objects::{FixOutcome, FixSummary};
