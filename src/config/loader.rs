//! Configuration structures and loading logic.

use crate::config::modes::LinkResolution;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Location of the unzipped export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Root directory of the export; every file and folder below it is processed.
    #[serde(default)]
    pub root_directory: Option<PathBuf>,
}

/// Cleanup options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// How link segments are matched against renamed entries (name, path).
    #[serde(default)]
    pub link_resolution: LinkResolution,

    /// Report what would change without touching the tree.
    #[serde(default)]
    pub dry_run: bool,

    /// Whether to show progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            link_resolution: LinkResolution::default(),
            dry_run: false,
            show_progress: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the configured export root.
    pub fn root_directory(&self) -> Result<&Path> {
        self.export
            .root_directory
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("root_directory".to_string()))
    }
}
