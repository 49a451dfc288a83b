use fix_paths_domain::{
    config::AliasPattern,
    model::{DirectoryEntry, FixOutcome},
    rewrite::{Rewrite, rewrite_aliases},
};
use fix_paths_ports::filesystem::TextStore;
use fix_paths_shared_kernel::Result;
use log::debug;

/// Rewrites the alias references of a single file through a [`TextStore`].
pub struct FixFile<'a> {
    store: &'a dyn TextStore,
    pattern: &'a AliasPattern,
    dry_run: bool,
}

impl<'a> FixFile<'a> {
    pub fn new(store: &'a dyn TextStore, pattern: &'a AliasPattern) -> Self {
        Self { store, pattern, dry_run: false }
    }

    /// Compute outcomes without writing anything back.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Read `entry`, rewrite every alias reference and write the result back in full.
    ///
    /// Files without a reference are never written.
    pub fn apply(&self, entry: &DirectoryEntry) -> Result<FixOutcome> {
        let text = self.store.read_text(&entry.path)?;
        match rewrite_aliases(&text, self.pattern, entry.depth) {
            Rewrite::Unchanged => Ok(FixOutcome::Unchanged),
            Rewrite::Rewritten { text, occurrences } => {
                if self.dry_run {
                    debug!("would rewrite {occurrences} reference(s) in {}", entry.path.display());
                } else {
                    self.store.write_text(&entry.path, &text)?;
                    debug!("rewrote {occurrences} reference(s) in {}", entry.path.display());
                }
                Ok(FixOutcome::Rewritten { occurrences })
            }
        }
    }
}
