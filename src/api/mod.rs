//
//  jiratool
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the transport to the Jira Cloud REST API v3.
//!
//! ## Architecture
//!
//! - [`client`]: The [`RestClient`] trait and the `reqwest`-backed [`JiraClient`]
//! - [`memory`]: An in-memory [`RestClient`] for tests
//! - [`types`]: [`Project`] and [`Version`] transfer objects
//! - [`error`]: [`RestError`] and [`ApiError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jiratool::api::{JiraClient, RestClient};
//! use jiratool::auth::Credentials;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = JiraClient::cloud("mycompany", Some(Credentials::new("me", "token")?))?;
//! let project = client.get_project("DB").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses surface as [`ApiError::Status`], whose [`RestError`]
//! carries the numeric code:
//!
//! - `404`: project or version not found
//! - `400` on version writes: [`ApiError::CannotCreateVersion`] /
//!   [`ApiError::CannotUpdateVersion`]
//! - anything else: passed through with its status line

pub mod client;
pub mod error;
pub mod memory;
pub mod types;

pub use client::{cloud_url, JiraClient, RestClient};
pub use error::{ApiError, RestError};
pub use types::{Project, Version};
