//! Rename planning.
//!
//! The full set of renames is computed from a materialized listing before
//! anything on disk changes. Collisions are resolved here, so applying the
//! plan never has to choose between two entries.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs::{has_hash_suffix, remove_hash_suffix, EntryKind, TreeEntry};

/// A single rename within one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub kind: EntryKind,
    pub parent: PathBuf,
    pub old_name: String,
    pub new_name: String,
}

impl RenameOp {
    pub fn old_path(&self) -> PathBuf {
        self.parent.join(&self.old_name)
    }

    pub fn new_path(&self) -> PathBuf {
        self.parent.join(&self.new_name)
    }
}

/// Why a hashed entry keeps its original name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An entry with the cleaned name already exists in the directory.
    TargetExists,
    /// An earlier rename in the plan already claimed the cleaned name.
    DuplicateTarget,
    /// The name is nothing but a hash suffix.
    EmptyName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TargetExists => write!(f, "target already exists"),
            SkipReason::DuplicateTarget => write!(f, "target claimed by another entry"),
            SkipReason::EmptyName => write!(f, "cleaned name would be empty"),
        }
    }
}

/// Whether anything occupies `path`, dangling symlinks included.
pub(crate) fn path_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// A rename that was planned but will not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRename {
    pub op: RenameOp,
    pub reason: SkipReason,
}

/// Ordered, collision-free list of renames for one export tree.
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub root: PathBuf,
    /// Renames to apply, children before parents.
    pub operations: Vec<RenameOp>,
    pub skipped: Vec<SkippedRename>,
    /// Number of entries inspected.
    pub scanned: usize,
}

impl RenamePlan {
    /// Build a plan from a bottom-up listing of `root`.
    ///
    /// When two siblings clean to the same name, the first one in listing
    /// order is renamed and the others are skipped.
    pub fn build(root: &Path, entries: &[TreeEntry]) -> Self {
        let mut plan = RenamePlan {
            root: root.to_path_buf(),
            scanned: entries.len(),
            ..Default::default()
        };
        let mut claimed: HashSet<PathBuf> = HashSet::new();

        for entry in entries {
            let Some(name) = entry.name.to_str() else {
                tracing::debug!("Skipping non UTF-8 name: {}", entry.path().display());
                continue;
            };

            if !has_hash_suffix(name) {
                continue;
            }
            let new_name = remove_hash_suffix(name);

            let op = RenameOp {
                kind: entry.kind,
                parent: entry.parent.clone(),
                old_name: name.to_string(),
                new_name,
            };

            let reason = if op.new_name.is_empty() {
                Some(SkipReason::EmptyName)
            } else if claimed.contains(&op.new_path()) {
                Some(SkipReason::DuplicateTarget)
            } else if path_occupied(&op.new_path()) {
                Some(SkipReason::TargetExists)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    tracing::debug!(
                        "Keeping '{}' ({}): {}",
                        op.old_name,
                        reason,
                        op.parent.display()
                    );
                    plan.skipped.push(SkippedRename { op, reason });
                }
                None => {
                    claimed.insert(op.new_path());
                    plan.operations.push(op);
                }
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
