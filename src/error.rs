//! Error types for the notion-export-cleaner application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Rename pass errors
    #[error("Failed to walk export tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Link pass errors
    #[error("Failed to read HTML file '{}': {source}", path.display())]
    ReadHtml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write HTML file '{}': {source}", path.display())]
    WriteHtml {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const RENAME_ERROR: i32 = 3;
    pub const LINK_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
