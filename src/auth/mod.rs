//
//  ibm-cis
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Authenticators attach credentials to outgoing CIS requests. The HTTP
//! executor calls [`Authenticator::authenticate`] on every request right
//! before it is sent.
//!
//! ## Supported Authentication Methods
//!
//! - **IAM** ([`IamAuthenticator`]): exchanges an IBM Cloud API key for an
//!   access token, caches it and refreshes it before it expires.
//! - **Bearer token** ([`BearerTokenAuthenticator`]): a caller-managed token.
//! - **Basic** ([`BasicAuthenticator`]): username and password.
//! - **No auth** ([`NoAuthAuthenticator`]): sends requests unchanged.
//!
//! ## Module Structure
//!
//! - [`iam`]: IAM API key token exchange and caching
//! - [`token`]: Static credential authenticators
//! - [`environment`]: Building an authenticator from external configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::auth::{Authenticator, IamAuthenticator};
//!
//! let auth = IamAuthenticator::new("my-api-key")?;
//! assert_eq!(auth.authentication_type(), "iam");
//! # Ok::<(), ibm_cis::api::common::CisError>(())
//! ```

mod environment;
mod iam;
mod token;

pub use environment::*;
pub use iam::*;
pub use token::*;

use std::fmt;

use async_trait::async_trait;
use reqwest::RequestBuilder;

use crate::api::common::CisError;

/// `AUTH_TYPE` value selecting IAM API key authentication.
pub const AUTHTYPE_IAM: &str = "iam";

/// `AUTH_TYPE` value selecting bearer token authentication.
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearertoken";

/// `AUTH_TYPE` value selecting basic authentication.
pub const AUTHTYPE_BASIC: &str = "basic";

/// `AUTH_TYPE` value selecting no authentication.
pub const AUTHTYPE_NOAUTH: &str = "noauth";

/// Attaches credentials to requests.
///
/// Implementations must be cheap to share: the executor holds them behind
/// an `Arc` and calls them concurrently.
#[async_trait]
pub trait Authenticator: fmt::Debug + Send + Sync {
    /// One of the `AUTHTYPE_*` constants.
    fn authentication_type(&self) -> &'static str;

    /// Checks the configuration without making network calls.
    fn validate(&self) -> Result<(), CisError> {
        Ok(())
    }

    /// Returns the request with credentials applied.
    ///
    /// # Errors
    ///
    /// Returns [`CisError::Authentication`] when credentials cannot be
    /// obtained, e.g. the IAM token exchange failed.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, CisError>;
}

/// Normalizes an `AUTH_TYPE` value (`BearerToken`, `bearer_token`, `IAM`).
pub fn normalize_auth_type(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}
