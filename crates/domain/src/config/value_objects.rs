pub mod alias_pattern;
pub mod candidate_filter;

pub use alias_pattern::{
    AliasMatch, AliasMatches, AliasPattern, DEFAULT_ALIAS_MARKER, DEFAULT_CALL_PREFIX,
};
pub use candidate_filter::{CandidateFilter, DEFAULT_EXTENSION};
