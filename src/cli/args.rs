//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, LinkResolution};

/// Notion export cleanup CLI.
#[derive(Parser, Debug)]
#[command(
    name = "notion-export-cleaner",
    version,
    about = "Strip hash suffixes from a Notion HTML export and fix its internal links",
    long_about = "Renames every file and folder of an unzipped Notion HTML export, removing the \
                  32-character hash Notion appends to each name, then rewrites <a href> and \
                  <img src> references in the exported pages so they keep resolving.\n\n\
                  The tree is modified in place. Use --dry-run to preview."
)]
pub struct Args {
    /// Root directory of the unzipped export.
    #[arg(env = "NOTION_EXPORT_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "notion-cleaner.toml")]
    pub config: PathBuf,

    /// Report what would change without renaming or rewriting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// How link segments are matched to renamed entries.
    #[arg(long, value_enum)]
    pub links: Option<LinkResolutionArg>,

    /// Hide progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI link resolution argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LinkResolutionArg {
    /// Replace any segment equal to a renamed base name.
    Name,
    /// Only replace segments that resolve to a renamed entry from the page's directory.
    Path,
}

impl From<LinkResolutionArg> for LinkResolution {
    fn from(arg: LinkResolutionArg) -> Self {
        match arg {
            LinkResolutionArg::Name => LinkResolution::Name,
            LinkResolutionArg::Path => LinkResolution::Path,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(root) = self.root {
            config.export.root_directory = Some(root);
        }

        if let Some(links) = self.links {
            config.options.link_resolution = links.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
