//
//  jiratool
//  versions/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Version Operations
//!
//! Business logic on top of a fetched [`Project`]: creating, looking up,
//! releasing and describing versions. Writes go through a [`RestClient`];
//! lookups and descriptions are pure reads over the fetched data.
//!
//! ## Example
//!
//! ```rust
//! use jiratool::api::memory::InMemoryRestClient;
//! use jiratool::api::{Project, RestClient, Version};
//! use jiratool::versions;
//!
//! # tokio_test::block_on(async {
//! let project = Project {
//!     id: "10000".to_string(),
//!     key: "PRJ".to_string(),
//!     versions: vec![Version { id: "10001".to_string(), ..Version::new("2021-02", 10000) }],
//!     ..Default::default()
//! };
//! let client = InMemoryRestClient::new().with_project(project.clone());
//!
//! versions::release_version(&project, "2021-02", "2021-04-01", &client).await?;
//!
//! let refreshed = client.get_project("PRJ").await?;
//! assert_eq!(
//!     versions::describe_version(&refreshed, "2021-02")?,
//!     "Version 2021-02 in Projekt PRJ ist released am 2021-04-01"
//! );
//! # Ok::<(), versions::VersionError>(())
//! # }).unwrap();
//! ```

mod state;

pub use state::VersionState;

use thiserror::Error;
use tracing::debug;

use crate::api::{ApiError, Project, RestClient, Version};

/// Failures of the version operations.
#[derive(Error, Debug)]
pub enum VersionError {
    /// The project's id is not numeric.
    #[error("Projekt-Id {0} ist ungültig")]
    InvalidProjectId(String),

    /// No version with the requested name exists in the project.
    #[error("Version {version} ist in Projekt {project} nicht vorhanden")]
    NotFound { version: String, project: String },

    /// The service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Creates an unreleased version named `name` in `project`.
///
/// Returns the version as stored by the service.
///
/// # Errors
///
/// - [`VersionError::InvalidProjectId`] if the project id is not numeric;
///   no request is made in that case
/// - [`VersionError::Api`] if the service call fails
pub async fn create_version(
    project: &Project,
    name: &str,
    client: &dyn RestClient,
) -> Result<Version, VersionError> {
    let project_id = project
        .id
        .parse::<i64>()
        .map_err(|_| VersionError::InvalidProjectId(project.id.clone()))?;

    let version = Version::new(name, project_id);
    debug!(project = %project.key, version = %name, "creating version");
    Ok(client.create_version(&version).await?)
}

/// Looks up a version by name.
///
/// Names are assumed unique; if the service returns duplicates, the first
/// one in service order wins.
pub fn find_version<'a>(project: &'a Project, name: &str) -> Result<&'a Version, VersionError> {
    project
        .versions
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| VersionError::NotFound {
            version: name.to_string(),
            project: project.key.clone(),
        })
}

/// Releases the version named `name` on `date`.
///
/// The fetched project is left untouched: a copy of the version is marked
/// released, its service-formatted date is cleared so Jira regenerates it,
/// and the copy is sent as an update.
///
/// # Errors
///
/// - [`VersionError::NotFound`] if the version does not exist; no request is
///   made in that case
/// - [`VersionError::Api`] if the update fails
pub async fn release_version(
    project: &Project,
    name: &str,
    date: &str,
    client: &dyn RestClient,
) -> Result<Version, VersionError> {
    let mut version = find_version(project, name)?.clone();
    version.release_date = Some(date.to_string());
    version.released = true;
    version.user_release_date = None;

    debug!(project = %project.key, version = %name, date, "releasing version");
    Ok(client.update_version(&version).await?)
}

/// Describes the state of the version named `name` as a sentence.
///
/// ```text
/// Version 2021-02 in Projekt PRJ ist archiviert (released am 2021-04-01)
/// Version 2021-02 in Projekt PRJ ist archiviert
/// Version 2021-02 in Projekt PRJ ist released am 2021-04-01
/// Version 2021-02 in Projekt PRJ ist nicht released
/// ```
pub fn describe_version(project: &Project, name: &str) -> Result<String, VersionError> {
    let version = find_version(project, name)?;
    Ok(state_sentence(project, version, &VersionState::of(version)))
}

/// Formats the sentence for a version that was already looked up.
pub fn state_sentence(project: &Project, version: &Version, state: &VersionState) -> String {
    format!("Version {} in Projekt {} ist {}", version.name, project.key, state)
}
