//! Rename pass.
//!
//! This module provides:
//! - Planning renames from a bottom-up listing
//! - Applying (or simulating) the plan
//! - The name mapping consumed by the link pass

pub mod apply;
pub mod mapping;
pub mod plan;

use std::path::Path;

use indicatif::ProgressBar;

use crate::error::Result;
use crate::fs::list_entries_bottom_up;

pub use apply::{apply_plan, RenameOutcome};
pub use mapping::{NameMapping, RenameRecord};
pub use plan::{RenameOp, RenamePlan, SkipReason, SkippedRename};

/// Strip hash suffixes from every file and folder below `root`.
///
/// Returns the renames actually applied; colliding entries keep their names.
pub fn rename_items(root: &Path, dry_run: bool) -> Result<RenameOutcome> {
    let entries = list_entries_bottom_up(root)?;
    let plan = RenamePlan::build(root, &entries);
    apply_plan(&plan, dry_run, &ProgressBar::hidden())
}
