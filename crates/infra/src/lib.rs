// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;

pub use filesystem::RecursiveWalker;
pub use persistence::FsTextStore;
