//
//  jiratool
//  api/memory.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # In-Memory Jira Service
//!
//! A [`RestClient`] that keeps projects in memory and records every write.
//! It answers like the real service: unknown projects are `404 Not Found`,
//! created versions get fresh ids and show up on the next fetch, and status
//! codes can be injected to exercise failure paths.
//!
//! ```rust
//! use jiratool::api::memory::InMemoryRestClient;
//! use jiratool::api::{Project, RestClient};
//!
//! # tokio_test::block_on(async {
//! let client = InMemoryRestClient::new().with_project(Project {
//!     id: "10000".to_string(),
//!     key: "DB".to_string(),
//!     ..Default::default()
//! });
//!
//! assert!(client.get_project("DB").await.is_ok());
//! assert!(client.get_project("XX").await.unwrap_err().is_not_found());
//! # });
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::client::RestClient;
use super::error::{ApiError, RestError};
use super::types::{Project, Version};

/// First id handed out to created versions.
const FIRST_VERSION_ID: u64 = 20000;

#[derive(Debug, Default)]
struct State {
    projects: HashMap<String, Project>,
    project_status: HashMap<String, u16>,
    write_status: Option<u16>,
    created: Vec<Version>,
    updated: Vec<Version>,
    next_id: u64,
}

/// In-memory stand-in for a Jira instance.
#[derive(Debug, Default)]
pub struct InMemoryRestClient {
    state: Mutex<State>,
}

impl InMemoryRestClient {
    /// Creates an empty service without any projects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project, replacing any project with the same key.
    pub fn with_project(self, project: Project) -> Self {
        self.lock().projects.insert(project.key.clone(), project);
        self
    }

    /// Makes fetches of `key` fail with the given HTTP status.
    pub fn with_project_status(self, key: &str, status: u16) -> Self {
        self.lock().project_status.insert(key.to_string(), status);
        self
    }

    /// Makes every create and update fail with the given HTTP status.
    pub fn with_write_status(self, status: u16) -> Self {
        self.lock().write_status = Some(status);
        self
    }

    /// Versions passed to successful `create_version` calls, in call order.
    pub fn created(&self) -> Vec<Version> {
        self.lock().created.clone()
    }

    /// Versions passed to successful `update_version` calls, in call order.
    pub fn updated(&self) -> Vec<Version> {
        self.lock().updated.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn status_error(code: u16) -> RestError {
    match StatusCode::from_u16(code) {
        Ok(status) => RestError::from_status(status),
        Err(_) => RestError::new(code.to_string(), code),
    }
}

/// Maps an injected write status onto the error the real client returns.
fn write_error(code: u16, rejection: impl FnOnce() -> ApiError) -> ApiError {
    let err = status_error(code);
    if err.is_bad_request() {
        rejection()
    } else {
        err.into()
    }
}

#[async_trait]
impl RestClient for InMemoryRestClient {
    async fn get_project(&self, key: &str) -> Result<Project, ApiError> {
        let state = self.lock();
        if let Some(code) = state.project_status.get(key) {
            return Err(status_error(*code).into());
        }
        state
            .projects
            .get(key)
            .cloned()
            .ok_or_else(|| RestError::from_status(StatusCode::NOT_FOUND).into())
    }

    async fn create_version(&self, version: &Version) -> Result<Version, ApiError> {
        let mut state = self.lock();
        if let Some(code) = state.write_status {
            return Err(write_error(code, || {
                ApiError::CannotCreateVersion(version.name.clone())
            }));
        }

        let mut stored = version.clone();
        stored.id = (FIRST_VERSION_ID + state.next_id).to_string();
        state.next_id += 1;

        let project_id = version.project_id.to_string();
        if let Some(project) = state.projects.values_mut().find(|p| p.id == project_id) {
            project.versions.push(stored.clone());
        }
        state.created.push(version.clone());
        Ok(stored)
    }

    async fn update_version(&self, version: &Version) -> Result<Version, ApiError> {
        let mut state = self.lock();
        if let Some(code) = state.write_status {
            return Err(write_error(code, || {
                ApiError::CannotUpdateVersion(version.name.clone())
            }));
        }

        let existing = state
            .projects
            .values_mut()
            .flat_map(|p| p.versions.iter_mut())
            .find(|v| v.id == version.id)
            .ok_or_else(|| ApiError::from(RestError::from_status(StatusCode::NOT_FOUND)))?;
        *existing = version.clone();

        state.updated.push(version.clone());
        Ok(version.clone())
    }
}
