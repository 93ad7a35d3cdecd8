//
//  jiratool
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Jira Cloud accepts HTTP Basic authentication built from the account's
//! username (usually an e-mail address) and an API token. That is the only
//! scheme this tool supports.
//!
//! ## Example
//!
//! ```rust
//! use jiratool::auth::Credentials;
//!
//! let credentials = Credentials::new("me@example.com", "api-token").unwrap();
//! assert_eq!(credentials.username(), "me@example.com");
//!
//! // Both parts are required
//! assert!(Credentials::new("", "api-token").is_err());
//! ```

use std::fmt;

use reqwest::RequestBuilder;

use crate::config::ConfigError;

/// Username and API key for HTTP Basic authentication.
///
/// The `Debug` output redacts the API key so credentials can be traced
/// safely.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    /// Creates credentials from a username and an API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either part is empty.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        let api_key = api_key.into();
        if username.is_empty() || api_key.is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(Self { username, api_key })
    }

    /// The account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Applies the credentials to an HTTP request as a Basic `Authorization`
    /// header.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.api_key))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_parts() {
        assert!(Credentials::new("username", "apikey").is_ok());
        assert!(matches!(
            Credentials::new("", "apikey"),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::new("username", ""),
            Err(ConfigError::MissingCredentials)
        ));
        assert!(Credentials::new("", "").is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = Credentials::new("username", "secret-key").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("username"));
        assert!(!debug.contains("secret-key"));
    }
}
