// src/presentation.rs
use std::{
    io::{self, Write},
    path::Path,
};

use fix_paths_domain::{model::FixSummary, options::OutputFormat};
use fix_paths_ports::progress::ProgressSink;
use fix_paths_shared_kernel::{ErrorContext, InfrastructureError, Result};
use log::{debug, info};
use serde::Serialize;

/// Logs per-file progress; nothing reaches stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_file(&self, path: &Path, occurrences: usize) {
        if occurrences > 0 {
            info!("{}: {occurrences} alias reference(s)", path.display());
        } else {
            debug!("{}: nothing to fix", path.display());
        }
    }

    fn on_complete(&self, scanned: usize, changed: usize) {
        debug!("done: {changed} of {scanned} candidate file(s) changed");
    }
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    #[serde(flatten)]
    summary: &'a FixSummary,
    message: String,
}

pub fn render_summary(summary: &FixSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => {
            let view = SummaryJson { summary, message: summary.message() };
            Ok(serde_json::to_string_pretty(&view)?)
        }
    }
}

/// Write the summary as a single block to `out`.
pub fn write_summary(
    out: &mut impl Write,
    summary: &FixSummary,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render_summary(summary, format)?;
    writeln!(out, "{rendered}").map_err(InfrastructureError::SummaryWrite)?;
    Ok(())
}

pub fn print_summary(summary: &FixSummary, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_summary(&mut lock, summary, format).context("failed to print summary")
}
