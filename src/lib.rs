//! Notion Export Cleaner - tidy up Notion HTML exports
//!
//! Notion appends a 32-character hash to every file and folder name it
//! exports (`My Page 9b30b13b97a74acda7dd1f152937e173.html`). This library
//! strips those hashes from a whole export tree and rewrites the internal
//! links of the exported pages so they still resolve.
//!
//! # Features
//!
//! - Bottom-up rename of files and folders, never overwriting existing names
//! - Rename planning with up-front collision detection and dry-run support
//! - `<a href>` / `<img src>` rewriting with percent-encoding preserved
//! - Link resolution by base name or by path relative to the linking page
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use notion_export_cleaner::{rename::rename_items, links::update_html_links, fs::find_html_files};
//! use notion_export_cleaner::config::LinkResolution;
//! use indicatif::ProgressBar;
//!
//! fn main() -> notion_export_cleaner::Result<()> {
//!     let root = Path::new("/path/to/export");
//!     let renames = rename_items(root, false)?;
//!     let pages = find_html_files(root)?;
//!     update_html_links(
//!         root,
//!         &pages,
//!         &renames.mapping,
//!         LinkResolution::Name,
//!         false,
//!         &ProgressBar::hidden(),
//!     )?;
//!     Ok(())
//! }
//! ```

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod links;
pub mod output;
pub mod rename;

// Re-exports for convenience
pub use cleanup::{run_cleanup, CleanupStats};
pub use config::{Config, LinkResolution};
pub use error::{Error, Result};
pub use fs::remove_hash_suffix;
pub use rename::{rename_items, NameMapping};
