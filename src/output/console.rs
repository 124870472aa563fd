//! Console output utilities.

use console::{style, StyledObject};

use crate::config::LinkResolution;

/// Print `message` behind a styled status tag.
fn print_tagged(tag: StyledObject<&str>, message: &str) {
    println!("{:>5} {}", tag, message);
}

pub fn print_info(message: &str) {
    print_tagged(style("INFO").cyan().bold(), message);
}

pub fn print_success(message: &str) {
    print_tagged(style("OK").green().bold(), message);
}

/// Print a warning, e.g. renames kept back because of a collision.
pub fn print_warning(message: &str) {
    print_tagged(style("WARN").yellow().bold(), message);
}

/// Print a fatal error to stderr.
pub fn print_error(message: &str) {
    eprintln!("{:>5} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Notion Export Cleaner                             ║
║     Strip export hashes, keep internal links working  ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(root: &str, resolution: LinkResolution, dry_run: bool) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Export root: {}", root);
    println!("  Link resolution: {}", resolution);
    if dry_run {
        println!("  Mode: {}", style("dry run (no changes written)").yellow());
    }
    println!();
}
