// crates/shared-kernel/src/value_objects/mod.rs
pub mod depth;

pub use depth::Depth;
