//
//  jiratool
//  api/types.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Jira Project and Version Types
//!
//! Transfer objects matching the Jira Cloud REST API v3 schema. Field names on
//! the wire are fixed and case-sensitive (`releaseDate`, `projectId`, ...);
//! any other fields the service sends are ignored.
//!
//! ## API Endpoints
//!
//! ```text
//! GET  /rest/api/3/project/{projectKey}
//! POST /rest/api/3/version
//! PUT  /rest/api/3/version/{id}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A Jira project as returned by `GET /rest/api/3/project/{key}`.
///
/// Projects are fetched read-only; the tool never writes them back.
///
/// # Example
///
/// ```rust
/// use jiratool::api::Project;
///
/// let json = r#"{"id": "10000", "key": "DB", "description": "Example", "versions": []}"#;
/// let project: Project = serde_json::from_str(json).unwrap();
/// assert_eq!(project.key, "DB");
/// assert!(project.versions.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Opaque numeric-string identifier, e.g. `"10000"`.
    pub id: String,

    /// Short human-facing key, e.g. `"DB"`.
    pub key: String,

    /// Free-text description. Empty when the service omits it or sends `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Versions in the order the service returned them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<Version>,
}

/// A named milestone within a project.
///
/// `release_date` is only meaningful once `released` is set; the service
/// derives `user_release_date` (e.g. `6/Jul/2021`) from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Service-assigned identifier. Empty for versions not yet created.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,

    /// Version name, used as the lookup key within a project.
    pub name: String,

    /// Whether the version is archived.
    #[serde(default, deserialize_with = "null_as_default")]
    pub archived: bool,

    /// Whether the version is released.
    #[serde(default, deserialize_with = "null_as_default")]
    pub released: bool,

    /// Release date in `YYYY-MM-DD` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,

    /// Human-formatted release date assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_release_date: Option<String>,

    /// Numeric id of the owning project.
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: i64,
}

impl Version {
    /// Creates an unreleased, unarchived version for the given project.
    pub fn new(name: impl Into<String>, project_id: i64) -> Self {
        Self {
            name: name.into(),
            project_id,
            ..Default::default()
        }
    }
}

/// Reads an explicit `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ignores_unknown_fields() {
        let json = r#"{
            "id": "10000",
            "key": "DB",
            "description": "This project was created as an test for REST.",
            "url": "https://www.example.com",
            "email": "from-jira@example.com",
            "assigneeType": "PROJECT_LEAD",
            "versions": [],
            "name": "Example"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "10000");
        assert_eq!(project.key, "DB");
        assert_eq!(
            project.description,
            "This project was created as an test for REST."
        );
        assert!(project.versions.is_empty());
    }

    #[test]
    fn test_project_without_versions_field() {
        let project: Project = serde_json::from_str(r#"{"id": "1", "key": "A"}"#).unwrap();
        assert!(project.versions.is_empty());
        assert_eq!(project.description, "");
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let json = r#"{"id": "1", "key": "A", "description": null, "versions": null}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.description, "");
        assert!(project.versions.is_empty());

        let json = r#"{
            "id": null,
            "name": "2021-02",
            "archived": null,
            "released": null,
            "releaseDate": null,
            "projectId": null
        }"#;
        let version: Version = serde_json::from_str(json).unwrap();
        assert_eq!(version, Version::new("2021-02", 0));
    }

    #[test]
    fn test_version_wire_names() {
        let json = r#"{
            "id": "10000",
            "description": "An excellent version",
            "name": "Test Version",
            "archived": false,
            "released": true,
            "releaseDate": "2021-07-06",
            "userReleaseDate": "6/Jul/2021",
            "projectId": 10000
        }"#;

        let version: Version = serde_json::from_str(json).unwrap();
        assert_eq!(version.release_date.as_deref(), Some("2021-07-06"));
        assert_eq!(version.user_release_date.as_deref(), Some("6/Jul/2021"));
        assert_eq!(version.project_id, 10000);
        assert!(version.released);
    }

    #[test]
    fn test_new_version_omits_absent_fields() {
        let value = serde_json::to_value(Version::new("2021-05", 10000)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "2021-05",
                "archived": false,
                "released": false,
                "projectId": 10000
            })
        );
    }
}
