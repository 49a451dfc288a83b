pub mod aggregates;
pub mod value_objects;

pub use aggregates::{DEFAULT_ROOT, FixConfig};
pub use value_objects::{AliasMatch, AliasMatches, AliasPattern, CandidateFilter};
