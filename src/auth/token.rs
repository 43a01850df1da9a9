//
//  ibm-cis
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Static Credential Authenticators
//!
//! Authenticators whose credentials never change during the life of the
//! process: a caller-managed bearer token, username/password basic auth,
//! and a no-op authenticator for tests and proxies that add their own
//! credentials.
//!
//! ## Example
//!
//! ```rust
//! use ibm_cis::auth::{Authenticator, BasicAuthenticator, BearerTokenAuthenticator};
//!
//! let bearer = BearerTokenAuthenticator::new("eyJhbGciOi...")?;
//! assert_eq!(bearer.authentication_type(), "bearertoken");
//!
//! // Values wrapped in braces or quotes are rejected
//! assert!(BasicAuthenticator::new("{user}", "secret").is_err());
//! # Ok::<(), ibm_cis::api::common::CisError>(())
//! ```

use async_trait::async_trait;
use reqwest::RequestBuilder;

use super::{Authenticator, AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_NOAUTH};
use crate::api::common::CisError;

/// Checks a credential value for the mistakes usually made when copying
/// it out of a JSON document or a shell script.
///
/// # Returns
///
/// Returns `false` if the value is empty or starts or ends with a brace or
/// a double quote.
pub fn validate_credential(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    let bad = |c: char| c == '{' || c == '}' || c == '"';
    !trimmed.starts_with(bad) && !trimmed.ends_with(bad)
}

pub(crate) fn require_credential(name: &str, value: &str) -> Result<(), CisError> {
    if value.trim().is_empty() {
        return Err(CisError::Authentication(format!("{} cannot be empty", name)));
    }
    if !validate_credential(value) {
        return Err(CisError::Authentication(format!(
            "{} cannot start or end with a brace or quote",
            name
        )));
    }
    Ok(())
}

/// Sends a caller-supplied bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self, CisError> {
        let token = token.into();
        require_credential("bearer token", &token)?;
        Ok(Self { token })
    }

    /// Replaces the token, e.g. after the caller refreshed it.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }
}

impl std::fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"***")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARER_TOKEN
    }

    fn validate(&self) -> Result<(), CisError> {
        require_credential("bearer token", &self.token)
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, CisError> {
        Ok(request.bearer_auth(&self.token))
    }
}

/// Sends HTTP basic credentials.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, CisError> {
        let auth = Self {
            username: username.into(),
            password: password.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    fn validate(&self) -> Result<(), CisError> {
        require_credential("username", &self.username)?;
        require_credential("password", &self.password)
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, CisError> {
        Ok(request.basic_auth(&self.username, Some(&self.password)))
    }
}

/// Leaves requests unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, CisError> {
        Ok(request)
    }
}
