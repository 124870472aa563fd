//! Configuration module for the notion-export-cleaner.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Link resolution modes
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, ExportConfig, OptionsConfig};
pub use modes::LinkResolution;
pub use validation::{validate_config, validate_root_directory};
