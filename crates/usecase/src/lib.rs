//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`fixer`]: Rewrite alias references in one candidate file
//! - [`orchestrator`]: Walk a root, filter candidates, fix each and summarise
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod fixer;
pub mod orchestrator;

pub use fixer::FixFile;
pub use orchestrator::FixAliasPaths;
