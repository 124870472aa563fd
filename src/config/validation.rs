//! Configuration validation logic.

use std::path::Path;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_root_directory(config.root_directory()?)?;

    Ok(())
}

/// Validate the export root: it must exist and be a directory.
pub fn validate_root_directory(root: &Path) -> Result<()> {
    if root.as_os_str().is_empty() {
        return Err(Error::MissingConfig("root_directory".to_string()));
    }

    if !root.exists() {
        return Err(Error::ConfigValidation {
            field: "root_directory".to_string(),
            message: format!("Directory does not exist: {}", root.display()),
        });
    }

    if !root.is_dir() {
        return Err(Error::ConfigValidation {
            field: "root_directory".to_string(),
            message: format!("Not a directory: {}", root.display()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_root_directory(dir.path()).is_ok());
    }

    #[test]
    fn test_root_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_root_directory(&dir.path().join("nope"));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_root_directory_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("export.zip");
        std::fs::write(&file, b"PK").unwrap();
        assert!(matches!(
            validate_root_directory(&file),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_root_directory_empty() {
        assert!(matches!(
            validate_root_directory(Path::new("")),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_validate_config_requires_root() {
        assert!(validate_config(&Config::default()).is_err());
    }
}
