//
//  jiratool
//  runner/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Project Runner
//!
//! Applies one [`Action`] to every configured project, one project at a time.
//! A failing project is logged and skipped; the remaining projects are still
//! processed.
//!
//! ## Status Messages
//!
//! | Outcome | Message |
//! |---------|---------|
//! | project missing | `Projekt DB in Jira nicht vorhanden` |
//! | project unreadable | `Projekt DB kann nicht gelesen werden (500 Internal Server Error)` |
//! | version created | `Version 2021-05 in Projekt DB angelegt` |
//! | version released | `Version 2021-05 in Projekt DB released` |
//! | no action | `In Projekt DB nichts geändert` |

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::api::{ApiError, Project, RestClient, Version};
use crate::output::{OutputWriter, TableOutput};
use crate::versions::{self, VersionError, VersionState};

/// The single operation applied to every project of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List the project and its versions.
    Show,
    /// Create a version.
    Create { version: String },
    /// Release a version on a date (`YYYY-MM-DD`).
    Release { version: String, date: String },
    /// Describe the state of a version.
    Inspect { version: String },
}

impl Action {
    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Create { .. } => "create",
            Self::Release { .. } => "release",
            Self::Inspect { .. } => "inspect",
        }
    }
}

/// Why a single project could not be processed.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Projekt {0} in Jira nicht vorhanden")]
    NotFound(String),

    #[error("Projekt {key} kann nicht gelesen werden ({source})")]
    Unreadable { key: String, source: ApiError },

    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Inspection result of a single version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub project: String,
    pub version: String,
    pub state: VersionState,
    pub message: String,
}

impl TableOutput for VersionReport {
    fn render_table(&self, _color: bool) -> String {
        self.message.clone()
    }
}

/// What happened to a successfully processed project.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Unchanged { project: String },
    Listed(Project),
    Created { project: String, version: Version },
    Released { project: String, version: Version },
    Inspected(VersionReport),
}

impl Outcome {
    /// Status message for the log, if this outcome has one.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unchanged { project } => Some(format!("In Projekt {} nichts geändert", project)),
            Self::Created { project, version } => Some(format!(
                "Version {} in Projekt {} angelegt",
                version.name, project
            )),
            Self::Released { project, version } => Some(format!(
                "Version {} in Projekt {} released",
                version.name, project
            )),
            Self::Listed(_) | Self::Inspected(_) => None,
        }
    }
}

/// Result of a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Keys of the projects that were processed successfully.
    pub succeeded: Vec<String>,
    /// Keys of the projects that failed, with the failure.
    pub failed: Vec<(String, ProjectError)>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetches one project and applies `action` to it.
///
/// Without an action the project is only fetched.
pub async fn process_project(
    client: &dyn RestClient,
    key: &str,
    action: Option<&Action>,
) -> Result<Outcome, ProjectError> {
    let project = client.get_project(key).await.map_err(|err| {
        if err.is_not_found() {
            ProjectError::NotFound(key.to_string())
        } else {
            ProjectError::Unreadable {
                key: key.to_string(),
                source: err,
            }
        }
    })?;

    let outcome = match action {
        None => Outcome::Unchanged {
            project: project.key,
        },
        Some(Action::Show) => Outcome::Listed(project),
        Some(Action::Create { version }) => {
            let created = versions::create_version(&project, version, client).await?;
            Outcome::Created {
                project: project.key,
                version: created,
            }
        }
        Some(Action::Release { version, date }) => {
            let released = versions::release_version(&project, version, date, client).await?;
            Outcome::Released {
                project: project.key,
                version: released,
            }
        }
        Some(Action::Inspect { version }) => {
            let found = versions::find_version(&project, version)?;
            let state = VersionState::of(found);
            let message = versions::state_sentence(&project, found, &state);
            Outcome::Inspected(VersionReport {
                project: project.key,
                version: version.clone(),
                state,
                message,
            })
        }
    };
    Ok(outcome)
}

/// Processes every project in order and reports the results.
///
/// # Parameters
///
/// * `client` - Transport used for every request
/// * `projects` - Project keys, processed strictly one after another
/// * `action` - What to do with each project; `None` only checks existence
/// * `writer` - Destination for listings and inspections
///
/// # Returns
///
/// A [`RunSummary`] with every key sorted into `succeeded` or `failed`.
///
/// # Notes
///
/// Status messages are logged, not written. A failure never stops the loop.
pub async fn run(
    client: &dyn RestClient,
    projects: &[String],
    action: Option<&Action>,
    writer: &OutputWriter,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let action_name = action.map_or("none", Action::name);

    for key in projects {
        match process_project(client, key, action).await {
            Ok(outcome) => {
                if let Some(message) = outcome.message() {
                    info!(project = %key, action = action_name, "{}", message);
                }
                let written = match &outcome {
                    Outcome::Listed(project) => writer.write(project),
                    Outcome::Inspected(report) => writer.write(report),
                    _ => Ok(()),
                };
                if let Err(err) = written {
                    error!(project = %key, action = action_name, "Ausgabe fehlgeschlagen: {err:#}");
                }
                summary.succeeded.push(key.clone());
            }
            Err(err) => {
                error!(project = %key, action = action_name, "{}", err);
                summary.failed.push((key.clone(), err));
            }
        }
    }

    summary
}
