//
//  jiratool
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Everything the tool needs to know before the first request: credentials,
//! the Jira Cloud site and the projects to work on.
//!
//! ## Sources
//!
//! Values are layered, first match wins:
//!
//! 1. Command-line flags
//! 2. Environment variables (`JIRA_USER`, `JIRA_API_KEY`, `JIRA_CLOUD`, `JIRA_PROJECTS`)
//! 3. The configuration file
//!
//! The API key is only accepted from the first two sources.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/jiratool/config.toml`
//! - **macOS**: `~/Library/Application Support/jiratool/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\jiratool\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! user = "me@example.com"
//! cloud = "mycompany"
//! projects = "DB,WEB"
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::Credentials;

/// Release dates are accepted in this format only.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration problems detected before any request is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Bitte Jira-Usernamen und API-Key angeben")]
    MissingCredentials,

    #[error("Bitte den Jira Cloud Alias angeben")]
    MissingCloudAlias,

    #[error("Ungültiger Jira Cloud Alias '{0}'")]
    InvalidCloudAlias(String),

    #[error("Bitte mindestens ein Jira-Projekt angeben")]
    MissingProjects,

    #[error("Das Release Datum '{0}' hat nicht das richtige Format (JJJJ-MM-TT)")]
    InvalidReleaseDate(String),

    #[error("Konfigurationsdatei {} kann nicht gelesen werden: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Konfigurationsdatei {} ist ungültig: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults read from the configuration file.
///
/// All keys are optional; unknown keys are rejected so that a misspelled key
/// (or an API key put into the file) does not go unnoticed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Jira username
    pub user: Option<String>,

    /// Jira Cloud alias
    pub cloud: Option<String>,

    /// Comma-separated project keys
    pub projects: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Returns the defaults if there is no configuration file or no
    /// configuration directory on this platform.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the configuration from `path`, or the defaults if it does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if config_exists(path) {
            read_config_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the configuration file for this platform.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", crate::APP_NAME).map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Username and API key for Basic auth.
    pub credentials: Credentials,

    /// Cloud alias, a single DNS label in front of `.atlassian.net`.
    pub cloud: String,

    /// Project keys in command-line order, never empty.
    pub projects: Vec<String>,
}

impl Settings {
    /// Resolves settings from explicit values, falling back to `config`.
    ///
    /// # Parameters
    ///
    /// * `user`, `api_key`, `cloud`, `projects` - Values from flags or the
    ///   environment; `None` falls back to the file
    /// * `config` - Defaults from the configuration file
    ///
    /// # Errors
    ///
    /// Checks happen in a fixed order and the first failure is returned:
    ///
    /// - [`ConfigError::MissingCredentials`]
    /// - [`ConfigError::MissingCloudAlias`] or [`ConfigError::InvalidCloudAlias`]
    /// - [`ConfigError::MissingProjects`]
    ///
    /// # Notes
    ///
    /// `api_key` has no file fallback.
    pub fn resolve(
        user: Option<&str>,
        api_key: Option<&str>,
        cloud: Option<&str>,
        projects: Option<&str>,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        let user = user.or(config.user.as_deref()).unwrap_or_default();
        let credentials = Credentials::new(user, api_key.unwrap_or_default())?;

        let cloud = cloud
            .or(config.cloud.as_deref())
            .filter(|alias| !alias.is_empty())
            .ok_or(ConfigError::MissingCloudAlias)?;
        if crate::api::cloud_url(cloud).is_err() {
            return Err(ConfigError::InvalidCloudAlias(cloud.to_string()));
        }

        let projects = resolve_projects(projects.or(config.projects.as_deref()).unwrap_or_default())?;

        Ok(Self {
            credentials,
            cloud: cloud.to_string(),
            projects,
        })
    }
}

/// Splits a comma-separated list of project keys.
///
/// Keys are taken verbatim, without trimming.
///
/// ```rust
/// use jiratool::config::resolve_projects;
///
/// assert_eq!(resolve_projects("DB,WEB").unwrap(), vec!["DB", "WEB"]);
/// assert!(resolve_projects("").is_err());
/// ```
pub fn resolve_projects(project_keys: &str) -> Result<Vec<String>, ConfigError> {
    if project_keys.is_empty() {
        return Err(ConfigError::MissingProjects);
    }
    Ok(project_keys.split(',').map(str::to_string).collect())
}

/// Validates a release date in `YYYY-MM-DD` format.
///
/// Returns the date unchanged so it can be sent to Jira as given.
pub fn parse_release_date(date: &str) -> Result<String, ConfigError> {
    // chrono accepts unpadded fields, Jira does not.
    if date.len() != 10 || NaiveDate::parse_from_str(date, RELEASE_DATE_FORMAT).is_err() {
        return Err(ConfigError::InvalidReleaseDate(date.to_string()));
    }
    Ok(date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_projects() {
        assert_eq!(resolve_projects("DB").unwrap(), vec!["DB"]);
        assert_eq!(resolve_projects("DB,WEB,OPS").unwrap(), vec!["DB", "WEB", "OPS"]);
        assert_eq!(resolve_projects("DB,,WEB").unwrap(), vec!["DB", "", "WEB"]);
        assert_eq!(resolve_projects("DB, WEB").unwrap(), vec!["DB", " WEB"]);
        assert!(matches!(resolve_projects(""), Err(ConfigError::MissingProjects)));
    }

    #[test]
    fn test_parse_release_date() {
        assert_eq!(parse_release_date("2021-04-01").unwrap(), "2021-04-01");
        assert!(parse_release_date("2021-4-1").is_err());
        assert!(parse_release_date("01.04.2021").is_err());
        assert!(parse_release_date("2021-02-30").is_err());
        assert!(parse_release_date("").is_err());
    }

    #[test]
    fn test_settings_from_flags() {
        let settings = Settings::resolve(
            Some("username"),
            Some("apikey"),
            Some("example"),
            Some("DB,WEB"),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(settings.credentials.username(), "username");
        assert_eq!(settings.cloud, "example");
        assert_eq!(settings.projects, vec!["DB", "WEB"]);
    }

    #[test]
    fn test_settings_fall_back_to_config() {
        let config = Config {
            user: Some("file-user".to_string()),
            cloud: Some("file-cloud".to_string()),
            projects: Some("OPS".to_string()),
        };

        let settings = Settings::resolve(None, Some("apikey"), None, None, &config).unwrap();
        assert_eq!(settings.credentials.username(), "file-user");
        assert_eq!(settings.cloud, "file-cloud");
        assert_eq!(settings.projects, vec!["OPS"]);

        let settings =
            Settings::resolve(Some("flag-user"), Some("apikey"), Some("flag-cloud"), None, &config)
                .unwrap();
        assert_eq!(settings.credentials.username(), "flag-user");
        assert_eq!(settings.cloud, "flag-cloud");
    }

    #[test]
    fn test_settings_errors_in_order() {
        let config = Config::default();

        assert!(matches!(
            Settings::resolve(None, None, None, None, &config),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            Settings::resolve(Some("u"), Some("k"), None, None, &config),
            Err(ConfigError::MissingCloudAlias)
        ));
        assert!(matches!(
            Settings::resolve(Some("u"), Some("k"), Some(""), Some("DB"), &config),
            Err(ConfigError::MissingCloudAlias)
        ));
        assert!(matches!(
            Settings::resolve(Some("u"), Some("k"), Some("bad alias"), Some("DB"), &config),
            Err(ConfigError::InvalidCloudAlias(_))
        ));
        for alias in ["evil.com/", "evil.com#", "evil.com?", "user@evil.com/"] {
            assert!(matches!(
                Settings::resolve(Some("u"), Some("k"), Some(alias), Some("DB"), &config),
                Err(ConfigError::InvalidCloudAlias(_))
            ));
        }
        assert!(matches!(
            Settings::resolve(Some("u"), Some("k"), Some("example"), Some(""), &config),
            Err(ConfigError::MissingProjects)
        ));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
