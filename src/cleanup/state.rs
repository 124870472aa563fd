//! Cleanup run statistics.

use crate::links::LinkOutcome;
use crate::rename::RenameOutcome;

/// Totals for one cleanup run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupStats {
    pub dry_run: bool,

    // Rename pass
    pub entries_scanned: usize,
    pub renamed: usize,
    pub skipped: usize,

    // Link pass
    pub html_scanned: usize,
    pub html_rewritten: usize,
    pub links_rewritten: usize,
}

impl CleanupStats {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Add the rename pass totals.
    pub fn add_rename_outcome(&mut self, scanned: usize, outcome: &RenameOutcome) {
        self.entries_scanned += scanned;
        self.renamed += outcome.renamed;
        self.skipped += outcome.skipped.len();
    }

    /// Add the link pass totals.
    pub fn add_link_outcome(&mut self, outcome: &LinkOutcome) {
        self.html_scanned += outcome.files_scanned;
        self.html_rewritten += outcome.files_rewritten;
        self.links_rewritten += outcome.links_rewritten;
    }

    /// Whether the run changed (or would change) anything.
    pub fn has_changes(&self) -> bool {
        self.renamed > 0 || self.links_rewritten > 0
    }
}
