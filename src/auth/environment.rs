//
//  ibm-cis
//  auth/environment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authenticators from External Configuration
//!
//! Builds an [`Authenticator`] from the `AUTH_TYPE`, `APIKEY`,
//! `BEARER_TOKEN`, `USERNAME` and `PASSWORD` settings of a service. When
//! no auth type is given, an API key selects IAM, a bearer token selects
//! bearer authentication, and a username selects basic authentication.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::auth::get_authenticator_from_environment;
//!
//! // Reads DNS_RECORDS_APIKEY etc.
//! let auth = get_authenticator_from_environment("dns_records")?;
//! println!("Using {} authentication", auth.authentication_type());
//! # Ok::<(), ibm_cis::api::common::CisError>(())
//! ```

use std::sync::Arc;

use super::{
    normalize_auth_type, Authenticator, BasicAuthenticator, BearerTokenAuthenticator,
    IamAuthenticator, NoAuthAuthenticator, AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_IAM,
    AUTHTYPE_NOAUTH,
};
use crate::api::common::CisError;
use crate::config::ExternalConfig;

/// Loads the external configuration for `service_name` and builds its
/// authenticator.
pub fn get_authenticator_from_environment(
    service_name: &str,
) -> Result<Arc<dyn Authenticator>, CisError> {
    let config = ExternalConfig::load(service_name)?;
    authenticator_from_config(&config)
}

/// Builds an authenticator from already merged settings.
///
/// # Errors
///
/// Returns [`CisError::Config`] when no credentials are configured, the
/// auth type is unknown, or the settings for the chosen type are
/// incomplete.
pub fn authenticator_from_config(
    config: &ExternalConfig,
) -> Result<Arc<dyn Authenticator>, CisError> {
    let auth_type = match config.get("AUTH_TYPE") {
        Some(value) => normalize_auth_type(value),
        None if config.get("APIKEY").is_some() => AUTHTYPE_IAM.to_string(),
        None if config.get("BEARER_TOKEN").is_some() => AUTHTYPE_BEARER_TOKEN.to_string(),
        None if config.get("USERNAME").is_some() => AUTHTYPE_BASIC.to_string(),
        None => {
            return Err(CisError::Config(format!(
                "No credentials configured for service '{}'",
                config.service_name()
            )))
        }
    };

    let require = |key: &str| {
        config.get(key).ok_or_else(|| {
            CisError::Config(format!(
                "{} authentication for service '{}' requires {}",
                auth_type,
                config.service_name(),
                key
            ))
        })
    };

    tracing::debug!(service = config.service_name(), auth_type = %auth_type, "resolved authenticator");

    let authenticator: Arc<dyn Authenticator> = match auth_type.as_str() {
        AUTHTYPE_IAM => {
            let mut iam = IamAuthenticator::new(require("APIKEY")?)?;
            if let Some(url) = config.get("AUTH_URL") {
                iam = iam.with_url(url);
            }
            if let (Some(id), Some(secret)) = (config.get("CLIENT_ID"), config.get("CLIENT_SECRET")) {
                iam = iam.with_client_credentials(id, secret);
            }
            Arc::new(iam.with_disable_ssl(config.disable_ssl())?)
        }
        AUTHTYPE_BEARER_TOKEN => Arc::new(BearerTokenAuthenticator::new(require("BEARER_TOKEN")?)?),
        AUTHTYPE_BASIC => Arc::new(BasicAuthenticator::new(
            require("USERNAME")?,
            require("PASSWORD")?,
        )?),
        AUTHTYPE_NOAUTH => Arc::new(NoAuthAuthenticator),
        other => {
            return Err(CisError::Config(format!(
                "Unsupported authentication type '{}' for service '{}'",
                other,
                config.service_name()
            )))
        }
    };

    Ok(authenticator)
}
