use std::fmt;

use fix_paths_shared_kernel::Depth;

const CURRENT_DIR: &str = "./";
const PARENT_DIR: &str = "../";

/// Dot-segment prefix leading from a file's directory back to the scan root.
///
/// Depth 0 yields `./`, any other depth yields `../` repeated `depth` times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePrefix(String);

impl RelativePrefix {
    pub fn for_depth(depth: Depth) -> Self {
        if depth.is_root() {
            Self(CURRENT_DIR.to_string())
        } else {
            Self(PARENT_DIR.repeat(depth.value()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
