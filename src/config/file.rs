//
//  jiratool
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Reading and parsing of the TOML configuration file. A missing file is not
//! an error: it simply contributes no defaults.

use std::path::Path;

use super::{Config, ConfigError};

/// Checks whether a configuration file exists at `path`.
///
/// # Parameters
///
/// * `path` - The path to check
///
/// # Returns
///
/// `true` only for regular files. A directory at `path` counts as missing.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

/// Reads and parses the configuration file at `path`.
///
/// # Parameters
///
/// * `path` - The path to the TOML file
///
/// # Returns
///
/// The parsed [`Config`]. Keys missing from the file stay `None`.
///
/// # Errors
///
/// - [`ConfigError::Read`] if the file exists but cannot be read
/// - [`ConfigError::Parse`] if the file is not valid TOML for [`Config`]
///
/// # Notes
///
/// Unknown keys are rejected, which includes any attempt to store the API
/// key in the file.
pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user = \"me@example.com\"\ncloud = \"example\"\nprojects = \"DB,WEB\"").unwrap();

        let config = read_config_file(file.path()).unwrap();

        assert_eq!(config.user.as_deref(), Some("me@example.com"));
        assert_eq!(config.cloud.as_deref(), Some("example"));
        assert_eq!(config.projects.as_deref(), Some("DB,WEB"));
    }

    #[test]
    fn test_read_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cloud = \"example\"").unwrap();

        let config = read_config_file(file.path()).unwrap();

        assert_eq!(config.user, None);
        assert_eq!(config.cloud.as_deref(), Some("example"));
    }

    #[test]
    fn test_read_malformed_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "user = ").unwrap();

        assert!(matches!(
            read_config_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_api_key_is_not_a_config_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"secret\"").unwrap();

        assert!(matches!(
            read_config_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_config_exists() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!config_exists(&dir.path().join("config.toml")));
        assert!(!config_exists(dir.path()));
    }
}
