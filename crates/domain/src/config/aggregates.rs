pub mod config;

pub use config::{DEFAULT_ROOT, FixConfig};
