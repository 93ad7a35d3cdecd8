//
//  jiratool
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Jira REST API
//!
//! This module provides the [`RestClient`] capability trait and its
//! production implementation [`JiraClient`], backed by `reqwest`.
//!
//! ## Features
//!
//! - Base endpoint and Basic auth credentials fixed at construction
//! - JSON request bodies and JSON response decoding
//! - Non-2xx responses classified as [`RestError`]
//! - 400 responses on version writes translated into version rejections
//! - Custom User-Agent header

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{ApiError, RestError};
use super::types::{Project, Version};
use crate::auth::Credentials;

/// Path prefix of the Jira Cloud REST API v3.
const API_PREFIX: [&str; 3] = ["rest", "api", "3"];

/// The operations the tool needs from a Jira service.
///
/// [`JiraClient`] talks to a real Jira instance; an in-memory implementation
/// lives in [`super::memory`].
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Fetches a project together with its versions.
    async fn get_project(&self, key: &str) -> Result<Project, ApiError>;

    /// Creates a version and returns the service's copy of it.
    ///
    /// A 400 response yields [`ApiError::CannotCreateVersion`].
    async fn create_version(&self, version: &Version) -> Result<Version, ApiError>;

    /// Replaces the version identified by `version.id`.
    ///
    /// A 400 response yields [`ApiError::CannotUpdateVersion`].
    async fn update_version(&self, version: &Version) -> Result<Version, ApiError>;
}

/// HTTP client for a Jira Cloud instance.
///
/// # Example
///
/// ```rust,no_run
/// use jiratool::api::{JiraClient, RestClient};
/// use jiratool::auth::Credentials;
///
/// # async fn example() -> anyhow::Result<()> {
/// let credentials = Credentials::new("me@example.com", "api-token")?;
/// let client = JiraClient::cloud("mycompany", Some(credentials))?;
///
/// let project = client.get_project("DB").await?;
/// println!("{} has {} versions", project.key, project.versions.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The underlying HTTP client
    http: Client,
    /// Scheme and host of the Jira instance
    base_url: Url,
    /// Optional Basic auth credentials
    credentials: Option<Credentials>,
}

impl JiraClient {
    /// Creates a client for the given base endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingEndpoint`] if `endpoint` is `None`, or
    /// [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(endpoint: Option<Url>, credentials: Option<Credentials>) -> Result<Self, ApiError> {
        let base_url = endpoint.ok_or(ApiError::MissingEndpoint)?;
        let http = Client::builder()
            .user_agent(format!("jiratool/{}", crate::VERSION))
            .build()?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Creates a client for a Jira Cloud site, `https://{alias}.atlassian.net`.
    pub fn cloud(alias: &str, credentials: Option<Credentials>) -> Result<Self, ApiError> {
        Self::new(Some(cloud_url(alias)?), credentials)
    }

    /// The base endpoint requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the URL of an API resource from its path segments.
    ///
    /// Segments are percent-encoded individually, so a project key can never
    /// escape its path position.
    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and decodes a successful JSON response.
    ///
    /// The body is always read to the end. For non-2xx responses it is only
    /// logged, never decoded, and the status is returned as a [`RestError`].
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(credentials) = &self.credentials {
            request = credentials.apply_to_request(request);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!(
                status = %status,
                body = %String::from_utf8_lossy(&body),
                "request failed"
            );
            return Err(RestError::from_status(status).into());
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RestClient for JiraClient {
    async fn get_project(&self, key: &str) -> Result<Project, ApiError> {
        let url = self.url(&["project", key])?;
        debug!(%url, "GET project");
        self.send(self.http.get(url)).await
    }

    async fn create_version(&self, version: &Version) -> Result<Version, ApiError> {
        let url = self.url(&["version"])?;
        debug!(%url, name = %version.name, "POST version");
        match self.send(self.http.post(url).json(version)).await {
            Err(ApiError::Status(err)) if err.is_bad_request() => {
                Err(ApiError::CannotCreateVersion(version.name.clone()))
            }
            result => result,
        }
    }

    async fn update_version(&self, version: &Version) -> Result<Version, ApiError> {
        let url = self.url(&["version", &version.id])?;
        debug!(%url, name = %version.name, "PUT version");
        match self.send(self.http.put(url).json(version)).await {
            Err(ApiError::Status(err)) if err.is_bad_request() => {
                Err(ApiError::CannotUpdateVersion(version.name.clone()))
            }
            result => result,
        }
    }
}

/// Resolves a cloud alias to its site URL.
///
/// # Parameters
///
/// * `alias` - The site name in front of `.atlassian.net`
///
/// # Returns
///
/// The site URL, or `ApiError::InvalidUrl` when `alias` is not a single DNS
/// label. Anything else could move the host away from `atlassian.net` and
/// the credentials along with it.
///
/// ```rust
/// use jiratool::api::cloud_url;
///
/// let url = cloud_url("mycompany").unwrap();
/// assert_eq!(url.as_str(), "https://mycompany.atlassian.net/");
/// assert!(cloud_url("evil.com/").is_err());
/// ```
pub fn cloud_url(alias: &str) -> Result<Url, ApiError> {
    if !is_dns_label(alias) {
        return Err(url::ParseError::InvalidDomainCharacter.into());
    }
    Ok(Url::parse(&format!("https://{alias}.atlassian.net"))?)
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}
