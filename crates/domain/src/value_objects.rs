//! Value objects used while rewriting alias references.

pub mod relative_prefix;

pub use fix_paths_shared_kernel::Depth;
pub use relative_prefix::RelativePrefix;
