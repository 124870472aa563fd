//! Statistics reporting.

use console::style;

use crate::cleanup::CleanupStats;

/// Print the totals of a cleanup run.
pub fn print_cleanup_stats(stats: &CleanupStats) {
    let (renamed_label, rewritten_label) = if stats.dry_run {
        ("Would rename:   ", "Would rewrite:  ")
    } else {
        ("Renamed:        ", "HTML rewritten: ")
    };

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Cleanup Statistics:").bold());
    println!("  Entries scanned: {}", stats.entries_scanned);
    println!("  {} {}", renamed_label, style(stats.renamed).green());
    if stats.skipped > 0 {
        println!(
            "  Kept hashed:     {} (name collisions)",
            style(stats.skipped).yellow()
        );
    }
    println!("  HTML scanned:    {}", stats.html_scanned);
    println!("  {} {}", rewritten_label, style(stats.html_rewritten).green());
    println!("  Links updated:   {}", stats.links_rewritten);
    println!("{}", style("═".repeat(50)).dim());
}
