//! Logging setup for the binary.
//!
//! Library crates log through the `log` facade; this installs `env_logger`
//! on stderr so stdout only ever carries the summary line.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialise the global logger.
///
/// The level is `warn` unless `RUST_LOG` says otherwise; `verbose` forces
/// `debug` and `quiet` forces `error`. Calling this twice is harmless.
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(LevelFilter::Error);
    }
    builder.format_timestamp(None).format_target(false).target(Target::Stderr);

    let _ = builder.try_init();
}
