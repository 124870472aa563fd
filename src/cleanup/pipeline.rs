//! The two-pass cleanup: rename, then fix links.

use crate::config::Config;
use crate::error::Result;
use crate::fs::{find_html_files, list_entries_bottom_up};
use crate::links::update_html_links;
use crate::output::{create_spinner, item_bar, print_info, print_success, print_warning};
use crate::rename::{apply_plan, RenamePlan};

use super::state::CleanupStats;

/// Run both passes against the configured export root.
///
/// The rename pass runs to completion before any HTML file is opened. Any
/// error aborts the run and leaves the tree as far as it got.
pub fn run_cleanup(config: &Config) -> Result<CleanupStats> {
    let root = config.root_directory()?;
    let options = &config.options;
    let mut stats = CleanupStats::new(options.dry_run);

    if options.dry_run {
        print_info(&format!("Dry run: starting cleanup of: {}", root.display()));
    } else {
        print_info(&format!("Starting cleanup of: {}", root.display()));
    }

    let spinner = options
        .show_progress
        .then(|| create_spinner("Scanning export tree..."));
    let entries = list_entries_bottom_up(root)?;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let plan = RenamePlan::build(root, &entries);
    tracing::info!(
        "Planned {} rename(s) out of {} entries",
        plan.operations.len(),
        plan.scanned
    );

    let bar = item_bar(
        options.show_progress,
        plan.operations.len(),
        "Renaming files/folders",
    );
    let renames = apply_plan(&plan, options.dry_run, &bar)?;
    bar.finish_and_clear();

    stats.add_rename_outcome(plan.scanned, &renames);
    if !renames.skipped.is_empty() {
        print_warning(&format!(
            "{} item(s) kept their hashed name because the cleaned name was already taken",
            renames.skipped.len()
        ));
    }

    print_info("Updating HTML internal links...");

    let html_files = find_html_files(root)?;
    let bar = item_bar(
        options.show_progress,
        html_files.len(),
        "Fixing internal links",
    );
    let links = update_html_links(
        root,
        &html_files,
        &renames.mapping,
        options.link_resolution,
        options.dry_run,
        &bar,
    )?;
    bar.finish_and_clear();

    tracing::info!(
        "Updated {} link(s) in {} of {} HTML file(s)",
        links.links_rewritten,
        links.files_rewritten,
        links.files_scanned
    );
    stats.add_link_outcome(&links);

    if options.dry_run {
        print_success("Dry run complete. No files were changed.");
    } else {
        print_success("Done! Filenames cleaned and internal links updated.");
    }

    Ok(stats)
}
