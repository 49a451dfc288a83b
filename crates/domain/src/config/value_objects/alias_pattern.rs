use fix_paths_shared_kernel::{DomainError, DomainResult};
use regex::{NoExpand, Regex};

use crate::value_objects::RelativePrefix;

pub const DEFAULT_CALL_PREFIX: &str = "require(\"";
pub const DEFAULT_ALIAS_MARKER: &str = "~/";

/// Byte span of one alias reference inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMatch {
    pub start: usize,
    pub end: usize,
}

/// All non-overlapping alias references found in a text. Empty when there is nothing to fix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMatches(Vec<AliasMatch>);

impl AliasMatches {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasMatch> {
        self.0.iter()
    }
}

/// Literal `<call prefix><marker>` pattern, e.g. `require("~/`.
#[derive(Debug, Clone)]
pub struct AliasPattern {
    call_prefix: String,
    marker: String,
    matcher: Regex,
}

impl AliasPattern {
    pub fn new(call_prefix: &str, marker: &str) -> DomainResult<Self> {
        if call_prefix.is_empty() {
            return Err(invalid(call_prefix, marker, "call prefix must not be empty"));
        }
        if marker.is_empty() {
            return Err(invalid(call_prefix, marker, "alias marker must not be empty"));
        }
        // Every relative prefix starts with '.', so such a marker would match its own output.
        if marker.starts_with('.') {
            return Err(invalid(call_prefix, marker, "alias marker must not start with '.'"));
        }

        let source = format!("{}{}", regex::escape(call_prefix), regex::escape(marker));
        let matcher = Regex::new(&source).map_err(|err| DomainError::InvalidPattern {
            pattern: format!("{call_prefix}{marker}"),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;

        Ok(Self { call_prefix: call_prefix.to_string(), marker: marker.to_string(), matcher })
    }

    /// The `require("~/` pattern emitted by the TypeScript compiler.
    pub fn require_alias() -> DomainResult<Self> {
        Self::new(DEFAULT_CALL_PREFIX, DEFAULT_ALIAS_MARKER)
    }

    /// Full literal text the pattern matches.
    pub fn literal(&self) -> String {
        format!("{}{}", self.call_prefix, self.marker)
    }

    pub fn find(&self, text: &str) -> AliasMatches {
        AliasMatches(
            self.matcher
                .find_iter(text)
                .map(|m| AliasMatch { start: m.start(), end: m.end() })
                .collect(),
        )
    }

    /// Replace the marker of every occurrence with `prefix`, keeping the call prefix.
    pub fn rewrite(&self, text: &str, prefix: &RelativePrefix) -> String {
        let replacement = format!("{}{}", self.call_prefix, prefix);
        self.matcher.replace_all(text, NoExpand(&replacement)).into_owned()
    }
}

fn invalid(call_prefix: &str, marker: &str, details: &str) -> DomainError {
    DomainError::InvalidPattern {
        pattern: format!("{call_prefix}{marker}"),
        details: details.to_string(),
        source: None,
    }
}
