use std::path::PathBuf;

use clap::{Parser, ValueHint};
use fix_paths_domain::config::{
    DEFAULT_ROOT,
    value_objects::{DEFAULT_ALIAS_MARKER, DEFAULT_CALL_PREFIX, DEFAULT_EXTENSION},
};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
///
/// Running without arguments rewrites `require("~/` in every `.js` file below `dist`.
#[derive(Parser, Debug)]
#[command(
    name = "fix_paths",
    version = crate::VERSION,
    about = "Rewrite root-alias require() calls in compiled output into relative paths"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Compiled output directory to scan
    #[arg(default_value = DEFAULT_ROOT, value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Alias marker that stands for the output root
    #[arg(long, default_value = DEFAULT_ALIAS_MARKER)]
    pub alias: String,

    /// Call text preceding the alias marker
    #[arg(long = "call", default_value = DEFAULT_CALL_PREFIX)]
    pub call_prefix: String,

    /// Suffix that marks a file as a rewrite candidate
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Replace files through a temp file and rename instead of overwriting in place
    #[arg(long)]
    pub atomic: bool,

    /// Summary format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// Log every file (debug level)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
