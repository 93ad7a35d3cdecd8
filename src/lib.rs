//
//  jiratool
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # jiratool Library
//!
//! Core functionality of the `jiratool` CLI, which creates, releases and
//! inspects versions of Jira Cloud projects through the Jira REST API v3.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`api`]: REST transport, transfer types and error classification
//! - [`auth`]: Basic auth credentials
//! - [`config`]: Configuration file and settings resolution
//! - [`versions`]: Version operations on a fetched project
//! - [`runner`]: The per-project loop
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jiratool::api::{JiraClient, RestClient};
//! use jiratool::auth::Credentials;
//! use jiratool::versions;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = JiraClient::cloud("mycompany", Some(Credentials::new("me", "token")?))?;
//! let project = client.get_project("DB").await?;
//! versions::release_version(&project, "2021-02", "2021-04-01", &client).await?;
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Jira REST API client.
///
/// Provides the [`api::RestClient`] trait, the `reqwest`-backed
/// [`api::JiraClient`] and an in-memory implementation.
pub mod api;

/// Authentication credentials.
pub mod auth;

/// Configuration file management and settings resolution.
pub mod config;

/// Creating, finding, releasing and describing versions.
pub mod versions;

/// Applying one action to every configured project.
pub mod runner;

/// Output formatting for different modes.
pub mod output;

pub use cli::Cli;
pub use config::{Config, Settings};

/// Application name constant.
///
/// Used as the binary name in completions and for configuration paths.
pub const APP_NAME: &str = "jiratool";

/// Application version constant.
///
/// ```rust
/// use jiratool::VERSION;
///
/// println!("jiratool version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: every project was processed successfully
/// - `1`: at least one project failed
/// - `2`: invalid usage or configuration, nothing was processed
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// At least one project could not be processed.
    ///
    /// Check stderr for the per-project messages.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or configuration.
    pub const USAGE: i32 = 2;
}
