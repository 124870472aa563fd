//! Filesystem module.
//!
//! Provides:
//! - Export hash suffix detection and removal
//! - Bottom-up tree listing and HTML file discovery

pub mod naming;
pub mod walk;

pub use naming::{has_hash_suffix, remove_hash_suffix};
pub use walk::{find_html_files, list_entries_bottom_up, EntryKind, TreeEntry, HTML_EXTENSION};
