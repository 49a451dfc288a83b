//! Pure text transformation applied to each candidate file.

use crate::{config::AliasPattern, value_objects::{Depth, RelativePrefix}};

/// Rewritten text for one file, or nothing when no alias reference exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Unchanged,
    Rewritten { text: String, occurrences: usize },
}

pub fn rewrite_aliases(text: &str, pattern: &AliasPattern, depth: Depth) -> Rewrite {
    let matches = pattern.find(text);
    if matches.is_empty() {
        return Rewrite::Unchanged;
    }
    let prefix = RelativePrefix::for_depth(depth);
    Rewrite::Rewritten { text: pattern.rewrite(text, &prefix), occurrences: matches.len() }
}
