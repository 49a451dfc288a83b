/// Result of processing a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// No alias reference was found; the file was left untouched.
    Unchanged,
    /// Every alias reference was rewritten.
    Rewritten { occurrences: usize },
}

impl FixOutcome {
    pub fn was_modified(self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }

    pub fn occurrences(self) -> usize {
        match self {
            Self::Unchanged => 0,
            Self::Rewritten { occurrences } => occurrences,
        }
    }
}
