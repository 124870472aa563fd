//! Applying a rename plan to disk.

use std::fs;
use std::path::Path;

use indicatif::ProgressBar;

use crate::error::{Error, Result};
use crate::rename::mapping::NameMapping;
use crate::rename::plan::{path_occupied, RenamePlan, SkipReason, SkippedRename};

/// Result of applying a rename plan.
#[derive(Debug, Default)]
pub struct RenameOutcome {
    pub mapping: NameMapping,
    pub renamed: usize,
    pub skipped: Vec<SkippedRename>,
}

/// Apply every operation of `plan`, recording each rename in the mapping.
///
/// An existing target is never overwritten: if one appeared since planning,
/// the entry is skipped and left out of the mapping. With `dry_run` nothing
/// on disk changes and the mapping describes the planned renames.
///
/// Errors abort immediately; renames already performed are kept.
pub fn apply_plan(
    plan: &RenamePlan,
    dry_run: bool,
    progress: &ProgressBar,
) -> Result<RenameOutcome> {
    let mut outcome = RenameOutcome {
        skipped: plan.skipped.clone(),
        ..Default::default()
    };

    for op in &plan.operations {
        progress.inc(1);

        let old_path = op.old_path();
        let new_path = op.new_path();

        if !dry_run {
            if path_occupied(&new_path) {
                tracing::debug!("Target appeared since planning: {}", new_path.display());
                outcome.skipped.push(SkippedRename {
                    op: op.clone(),
                    reason: SkipReason::TargetExists,
                });
                continue;
            }

            fs::rename(&old_path, &new_path).map_err(|source| Error::Rename {
                from: old_path.clone(),
                to: new_path.clone(),
                source,
            })?;
        }

        tracing::debug!("Renamed '{}' -> '{}'", op.old_name, op.new_name);

        let relative = old_path
            .strip_prefix(&plan.root)
            .unwrap_or(Path::new(&op.old_name))
            .to_path_buf();
        outcome
            .mapping
            .insert(relative, op.old_name.clone(), op.new_name.clone());
        outcome.renamed += 1;
    }

    Ok(outcome)
}
