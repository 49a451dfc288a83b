// Transitive dependencies pull in more than one version of a few crates.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod logger;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
