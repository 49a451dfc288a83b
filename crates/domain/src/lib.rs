#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;
pub mod options;
pub mod rewrite;
pub mod value_objects;
