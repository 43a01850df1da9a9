//
//  ibm-cis
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the CIS Services
//!
//! This module provides the types shared by every CIS resource service: the
//! unified error type, the response envelope that every CIS endpoint wraps
//! its payload in, and pagination metadata.
//!
//! # Overview
//!
//! - [`CisError`] - Unified error type for construction, request building and transport
//! - [`Envelope`] - The `{success, errors, messages, result}` wrapper
//! - [`ResultInfo`] - Page metadata returned by list endpoints
//! - Pagination helpers (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use ibm_cis::api::common::CisError;
//!
//! fn handle_result<T>(result: Result<T, CisError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(CisError::MissingParameters(names)) => println!("Missing: {}", names.join(", ")),
//!         Err(CisError::Http { status, message, .. }) => println!("HTTP {}: {}", status, message),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Unified error type for all CIS SDK operations.
///
/// # Variants
///
/// | Variant | Raised by | Network call made |
/// |---------|-----------|-------------------|
/// | `MissingParameters` | service construction, request building | No |
/// | `UnknownOperation` | facade dispatch | No |
/// | `InvalidParameter` | request building | No |
/// | `InvalidHeader` | header composition | No |
/// | `InvalidUrl` | URL assembly | No |
/// | `Authentication` | authenticators | Only to the token service |
/// | `Config` | construction, external configuration | No |
/// | `Http` | transport, non-2xx status | Yes |
/// | `Network` | transport | Attempted |
/// | `Json` | (de)serialization | Maybe |
///
/// # Notes
///
/// - A `success: false` envelope on a 2xx response is *not* an error; it is
///   returned to the caller as a normal response.
/// - Nothing in this crate retries on any of these errors.
#[derive(Error, Debug)]
pub enum CisError {
    /// One or more required parameters were absent, null or empty.
    ///
    /// The names are listed in the order the operation schema declares them.
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    /// The service has no operation with the given name.
    #[error("Unknown operation '{operation}' for service '{service}'")]
    UnknownOperation {
        /// Service name, e.g. `alerts`
        service: String,
        /// Operation name as requested
        operation: String,
    },

    /// A parameter was present but could not be used as given.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The camelCase parameter name
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The base URL or the assembled request URL was malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The authenticator could not produce credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Service or external configuration is incomplete or contradictory.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success HTTP status.
    ///
    /// `message` is the most specific human readable message found in the
    /// response body; `body` keeps the parsed body when it was JSON.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body
        message: String,
        /// The JSON error body, if any
        body: Option<Value>,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A JSON payload could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CisError {
    /// Builds a [`CisError::MissingParameters`] from any list of names.
    pub fn missing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingParameters(names.into_iter().map(Into::into).collect())
    }

    /// Returns the HTTP status for transport errors, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingParameters(_)
                | Self::UnknownOperation { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidHeader(_)
                | Self::InvalidUrl(_)
                | Self::Config(_)
        )
    }
}

/// The response envelope shared by every CIS endpoint.
///
/// `errors` and `messages` are kept as raw JSON values: depending on the
/// resource they are objects (`{"code": 1000, "message": "..."}`) or
/// `[code, message]` pairs.
///
/// # Example
///
/// ```rust
/// use ibm_cis::api::common::Envelope;
/// use serde_json::Value;
///
/// let json = r#"{
///     "success": true,
///     "errors": [],
///     "messages": [],
///     "result": [{"id": "f1aba936b94213e5b8dca0c0dbf1f9cc"}],
///     "result_info": {"page": 1, "per_page": 20, "count": 1, "total_count": 1}
/// }"#;
///
/// let envelope: Envelope<Vec<Value>> = serde_json::from_str(json).unwrap();
/// assert!(envelope.success);
/// assert_eq!(envelope.result.len(), 1);
/// assert!(!envelope.result_info.unwrap().has_next());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<R> {
    /// Operation success flag as reported by the API.
    pub success: bool,

    /// Error entries; empty on success.
    #[serde(default)]
    pub errors: Vec<Value>,

    /// Informational messages.
    #[serde(default)]
    pub messages: Vec<Value>,

    /// The resource payload.
    pub result: R,

    /// Page metadata, present on list endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_info: Option<ResultInfo>,
}

impl<R> Envelope<R> {
    /// Returns the first error message in the envelope, whichever shape the
    /// resource uses.
    pub fn first_error(&self) -> Option<String> {
        self.errors.first().and_then(message_of)
    }
}

/// Extracts a message from one envelope error entry.
///
/// Accepts `{"message": "..."}`, `[code, "message"]` and plain strings.
pub(crate) fn message_of(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from),
        Value::Array(items) => items
            .iter()
            .rev()
            .find_map(|item| item.as_str())
            .map(String::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_parameters_message() {
        let err = CisError::missing(["policyId", "name"]);
        assert_eq!(err.to_string(), "Missing required parameters: policyId, name");
        assert!(err.is_local());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_error_status() {
        let err = CisError::Http {
            status: 404,
            message: "Not found".to_string(),
            body: None,
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_local());
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_failure_envelope_first_error() {
        let envelope: Envelope<Value> = serde_json::from_value(json!({
            "success": false,
            "errors": [{"code": 1003, "message": "Invalid zone"}],
            "messages": [],
            "result": null
        }))
        .unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.first_error().as_deref(), Some("Invalid zone"));
    }

    #[test]
    fn test_message_of_pair() {
        assert_eq!(
            message_of(&json!([7003, "Could not route"])).as_deref(),
            Some("Could not route")
        );
        assert_eq!(message_of(&json!(42)), None);
    }
}
