pub mod directory_entry;
pub mod scan_result;

pub use directory_entry::DirectoryEntry;
pub use scan_result::ScanResult;
