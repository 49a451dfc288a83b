use fix_paths_domain::{
    config::FixConfig,
    model::{DirectoryEntry, FixSummary, ScanResult},
};
use fix_paths_ports::{
    filesystem::{DirectoryEntryDto, DirectoryWalker, TextStore},
    progress::ProgressSink,
};
use fix_paths_shared_kernel::{ApplicationError, Result};
use log::{debug, info};

use crate::fixer::FixFile;

/// Walks the configured root and rewrites alias references in every candidate file.
///
/// Files are handled one at a time in walk order and the first error aborts the run.
pub struct FixAliasPaths<'a> {
    walker: &'a dyn DirectoryWalker,
    store: &'a dyn TextStore,
    progress: Option<&'a dyn ProgressSink>,
}

impl<'a> FixAliasPaths<'a> {
    pub fn new(walker: &'a dyn DirectoryWalker, store: &'a dyn TextStore) -> Self {
        Self { walker, store, progress: None }
    }

    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&self, config: &FixConfig) -> Result<FixSummary> {
        let scan = self.scan(config)?;
        let total = scan.len();
        let candidates = scan.candidates(&config.candidates);
        info!(
            "{} of {} files under {} end with {}",
            candidates.len(),
            total,
            config.root.display(),
            config.candidates.suffix()
        );

        let fixer = FixFile::new(self.store, &config.pattern).dry_run(config.dry_run);
        let mut summary = FixSummary::new(config.dry_run);
        for entry in &candidates {
            let outcome = fixer.apply(entry).map_err(|source| ApplicationError::FixFailed {
                path: entry.path.clone(),
                source: Box::new(source),
            })?;
            if let Some(progress) = self.progress {
                progress.on_file(&entry.path, outcome.occurrences());
            }
            summary.record(entry, outcome);
        }

        if let Some(progress) = self.progress {
            progress.on_complete(summary.scanned, summary.changed_count());
        }
        debug!("{} reference(s) rewritten", summary.occurrences);
        Ok(summary)
    }

    fn scan(&self, config: &FixConfig) -> Result<ScanResult> {
        let entries = self.walker.walk(&config.root).map_err(|source| {
            ApplicationError::ScanFailed { root: config.root.clone(), source: Box::new(source) }
        })?;
        Ok(entries.into_iter().map(port_to_domain_entry).collect::<Vec<_>>().into())
    }
}

fn port_to_domain_entry(entry: DirectoryEntryDto) -> DirectoryEntry {
    DirectoryEntry { path: entry.path, depth: entry.depth }
}
