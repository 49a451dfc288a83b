// src/app.rs
use anyhow::{Context, Result};
use fix_paths_domain::{config::FixConfig, model::FixSummary, options::WriteMode};
use fix_paths_infra::{FsTextStore, RecursiveWalker};
use fix_paths_shared_kernel::path::logical_absolute;
use fix_paths_usecase::FixAliasPaths;
use log::info;

use crate::{
    cli::{self, Args},
    presentation::{self, ConsoleProgress},
};

/// Build the configuration from `args`, run it and print the summary.
pub fn run_with_args(args: &Args) -> Result<FixSummary> {
    let config = cli::build_config(args).context("invalid arguments")?;
    run_and_report(&config)
}

pub fn run_and_report(config: &FixConfig) -> Result<FixSummary> {
    let summary = run(config)?;
    presentation::print_summary(&summary, config.format)?;
    Ok(summary)
}

/// Rewrite alias references below `config.root` without printing anything to stdout.
pub fn run(config: &FixConfig) -> Result<FixSummary> {
    let walker = RecursiveWalker::new();
    let store = match config.write_mode {
        WriteMode::InPlace => FsTextStore::in_place(),
        WriteMode::Atomic => FsTextStore::atomic(),
    };
    let progress = ConsoleProgress;

    info!(
        "fix_paths v{} · root={} · pattern={} · dry_run={}",
        crate::VERSION,
        logical_absolute(&config.root).display(),
        config.pattern.literal(),
        config.dry_run
    );

    FixAliasPaths::new(&walker, &store)
        .with_progress(&progress)
        .run(config)
        .with_context(|| format!("failed to fix alias paths under '{}'", config.root.display()))
}
