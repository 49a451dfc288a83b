pub mod fix_outcome;
pub mod summary;

pub use fix_outcome::FixOutcome;
pub use summary::FixSummary;
