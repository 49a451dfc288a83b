// crates/shared-kernel/src/value_objects/depth.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of directory levels between the scan root and a file's parent directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Depth(usize);

impl Depth {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn root() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Depth of the entries inside a subdirectory found at this depth.
    #[inline]
    pub const fn descend(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::root()
    }
}

impl From<usize> for Depth {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
