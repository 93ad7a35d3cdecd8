//
//  jiratool
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Error Types
//!
//! Errors produced by the transport layer. A non-2xx response becomes a
//! [`RestError`] carrying the HTTP status line and numeric code, so callers
//! can branch on "not found" or "bad request" without matching on strings.
//!
//! ```rust
//! use jiratool::api::{ApiError, RestError};
//!
//! let err = ApiError::from(RestError::new("404 Not Found", 404));
//! assert_eq!(err.status(), Some(404));
//! assert!(err.is_not_found());
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// A non-successful HTTP response.
///
/// `Display` renders the status line as reported by the service, e.g.
/// `404 Not Found`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{status_line}")]
pub struct RestError {
    status_line: String,
    code: u16,
}

impl RestError {
    /// Creates a failure from a status line and its numeric code.
    pub fn new(status_line: impl Into<String>, code: u16) -> Self {
        Self {
            status_line: status_line.into(),
            code,
        }
    }

    /// Builds the failure from a response status.
    ///
    /// The status line combines the code with its canonical reason phrase,
    /// falling back to the bare code for non-standard statuses.
    pub fn from_status(status: StatusCode) -> Self {
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        Self::new(status_line, status.as_u16())
    }

    /// The numeric HTTP status code.
    pub fn status(&self) -> u16 {
        self.code
    }

    /// The status line for display.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Whether the service answered `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.code == StatusCode::NOT_FOUND.as_u16()
    }

    /// Whether the service answered `400 Bad Request`.
    pub fn is_bad_request(&self) -> bool {
        self.code == StatusCode::BAD_REQUEST.as_u16()
    }
}

/// Unified error type for all Jira API operations.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Status` | Non-2xx HTTP response |
/// | `CannotCreateVersion` | 400 while creating a version |
/// | `CannotUpdateVersion` | 400 while updating a version |
/// | `Network` | Connection, TLS or body transfer failure |
/// | `Decode` | Response body is not the expected JSON |
/// | `InvalidUrl` | Request URL could not be built |
/// | `MissingEndpoint` | Client constructed without a base endpoint |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The service answered with a status outside 200–299.
    #[error(transparent)]
    Status(#[from] RestError),

    /// The service rejected a new version as a bad request.
    #[error("Version {0} kann nicht angelegt werden")]
    CannotCreateVersion(String),

    /// The service rejected a version update as a bad request.
    #[error("Version {0} kann nicht aktualisiert werden")]
    CannotUpdateVersion(String),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built from the endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No base endpoint was configured.
    #[error("url not specified")]
    MissingEndpoint,
}

impl ApiError {
    /// The HTTP status code behind this error, if there is one.
    ///
    /// Version rejections report `400`; network and decode failures have no
    /// status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(err) => Some(err.status()),
            Self::CannotCreateVersion(_) | Self::CannotUpdateVersion(_) => {
                Some(StatusCode::BAD_REQUEST.as_u16())
            }
            _ => None,
        }
    }

    /// Whether this error is a `404 Not Found` response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(err) if err.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_from_status() {
        let err = RestError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
        assert_eq!(err.status(), 404);
        assert!(err.is_not_found());
        assert!(!err.is_bad_request());
    }

    #[test]
    fn test_nonstandard_status() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = RestError::from_status(status);
        assert_eq!(err.status_line(), "599");
    }

    #[test]
    fn test_api_error_status() {
        let not_found = ApiError::from(RestError::new("404 Not Found", 404));
        let server = ApiError::from(RestError::new("500 Internal Server Error", 500));
        let rejected = ApiError::CannotCreateVersion("2021-01".to_string());

        assert_eq!(not_found.status(), Some(404));
        assert!(not_found.is_not_found());
        assert_eq!(server.status(), Some(500));
        assert!(!server.is_not_found());
        assert_eq!(rejected.status(), Some(400));
        assert_eq!(ApiError::MissingEndpoint.status(), None);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ApiError::CannotCreateVersion("2021-0X".to_string()).to_string(),
            "Version 2021-0X kann nicht angelegt werden"
        );
        assert_eq!(
            ApiError::CannotUpdateVersion("2021-0X".to_string()).to_string(),
            "Version 2021-0X kann nicht aktualisiert werden"
        );
    }
}
