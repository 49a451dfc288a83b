// crates/domain/src/options.rs
/// Output format for the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How rewritten text reaches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and overwrite the file in place.
    #[default]
    InPlace,
    /// Write a sibling temp file, then rename it over the original.
    Atomic,
}
