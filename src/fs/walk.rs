//! Export tree traversal.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// File extension of the exported pages whose links get rewritten.
pub const HTML_EXTENSION: &str = ".html";

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A file or directory discovered below the export root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub kind: EntryKind,
    /// Directory containing the entry, as it was named when listed.
    pub parent: PathBuf,
    /// Base name of the entry.
    pub name: OsString,
}

impl TreeEntry {
    /// Full path of the entry.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }
}

/// List every file and directory below `root`, children before their parent.
///
/// The whole listing is materialized before returning, so renames applied
/// afterwards cannot disturb discovery. The root itself is not included and
/// symlinks are reported as files without being followed.
pub fn list_entries_bottom_up(root: &Path) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let parent = entry
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());

        entries.push(TreeEntry {
            kind,
            parent,
            name: entry.file_name().to_os_string(),
        });
    }

    Ok(entries)
}

/// Find every `.html` file below `root`, in top-down order.
pub fn find_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_html = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(HTML_EXTENSION));

        if is_html {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
