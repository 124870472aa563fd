//! Link pass over the HTML files of an export.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::config::LinkResolution;
use crate::error::{Error, Result};
use crate::links::html::{parse_html, rewrite_link_attributes, serialize_html};
use crate::links::reference::{rewrite_reference, LinkResolver};
use crate::rename::NameMapping;

/// Totals for one link pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub files_scanned: usize,
    pub files_rewritten: usize,
    pub links_rewritten: usize,
}

/// Rewrite the links of one HTML file.
///
/// The file is written back only if at least one attribute changed, and
/// never in dry-run mode. Returns the number of attributes changed.
pub fn update_links_in_file(
    path: &Path,
    resolver: &LinkResolver<'_>,
    dry_run: bool,
) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|source| Error::ReadHtml {
        path: path.to_path_buf(),
        source,
    })?;

    let dom = parse_html(&content);
    let changed = rewrite_link_attributes(&dom, |value| rewrite_reference(value, resolver));

    if changed > 0 && !dry_run {
        let html = serialize_html(&dom)?;
        fs::write(path, html).map_err(|source| Error::WriteHtml {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(changed)
}

/// Directory of `file` relative to `root`, in the original naming.
fn original_base_dir(root: &Path, file: &Path, mapping: &NameMapping) -> PathBuf {
    let relative_dir = file
        .strip_prefix(root)
        .ok()
        .and_then(Path::parent)
        .unwrap_or(Path::new(""));
    mapping.original_path(relative_dir)
}

/// Fix the links of every file in `html_files` using `mapping`.
pub fn update_html_links(
    root: &Path,
    html_files: &[PathBuf],
    mapping: &NameMapping,
    resolution: LinkResolution,
    dry_run: bool,
    progress: &ProgressBar,
) -> Result<LinkOutcome> {
    let mut outcome = LinkOutcome::default();

    for path in html_files {
        progress.inc(1);
        outcome.files_scanned += 1;

        let base_dir = original_base_dir(root, path, mapping);
        let resolver = LinkResolver::new(resolution, mapping, base_dir);
        let changed = update_links_in_file(path, &resolver, dry_run)?;

        if changed > 0 {
            tracing::debug!("{} link(s) updated in {}", changed, path.display());
            outcome.files_rewritten += 1;
            outcome.links_rewritten += changed;
        }
    }

    Ok(outcome)
}
