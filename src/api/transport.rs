//
//  ibm-cis
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Execution
//!
//! The [`RequestExecutor`] trait is the seam between the resource facades
//! and the network. Facades hand it a fully built
//! [`RequestDescriptor`] and await exactly one [`DetailedResponse`].
//!
//! [`HttpExecutor`] is the production implementation: it authenticates the
//! request with the configured [`Authenticator`], sends it with `reqwest`
//! and maps non-success statuses to [`CisError::Http`]. Tests substitute
//! their own executor to observe the descriptors a facade produces.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ibm_cis::api::transport::HttpExecutor;
//! use ibm_cis::auth::BearerTokenAuthenticator;
//!
//! let auth = BearerTokenAuthenticator::new("my-token")?;
//! let executor = HttpExecutor::new(Arc::new(auth))?;
//! # Ok::<(), ibm_cis::api::common::CisError>(())
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::common::{message_of, CisError, Envelope, ResultInfo};
use super::request::{RequestBody, RequestDescriptor};
use crate::auth::Authenticator;

/// Parses a CIS or IAM error body and extracts the most specific message.
///
/// CIS resources answer failures with an envelope:
/// ```json
/// {"success": false, "errors": [{"code": 1003, "message": "Invalid zone"}]}
/// ```
///
/// Some resources report errors as `[code, message]` pairs, and the IAM
/// token service uses `{"errorMessage": "..."}`. When nothing usable is
/// found, the status reason phrase is used.
///
/// # Parameters
///
/// * `status` - The HTTP status code
/// * `body` - The raw response body
///
/// # Returns
///
/// A [`CisError::Http`] carrying the status, the message and the parsed
/// JSON body when there was one.
pub fn format_api_error(status: StatusCode, body: &str) -> CisError {
    let json = serde_json::from_str::<Value>(body).ok();

    let message = json
        .as_ref()
        .and_then(extract_message)
        .or_else(|| {
            let trimmed = body.trim();
            (json.is_none() && !trimmed.is_empty()).then(|| crate::util::truncate(trimmed, 200))
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    CisError::Http {
        status: status.as_u16(),
        message,
        body: json,
    }
}

fn extract_message(json: &Value) -> Option<String> {
    if let Some(message) = json
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|arr| arr.first())
        .and_then(message_of)
    {
        return Some(message);
    }

    if let Some(error) = json.get("error") {
        if let Some(message) = error.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_string());
        }
        if let Some(message) = error.as_str() {
            return Some(message.to_string());
        }
    }

    ["message", "errorMessage"]
        .iter()
        .find_map(|key| json.get(*key).and_then(|m| m.as_str()))
        .map(String::from)
}

/// A response as returned by an executor.
#[derive(Debug, Clone)]
pub struct DetailedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body; text bodies become a JSON string, empty bodies null
    pub result: Value,
}

impl DetailedResponse {
    /// Creates a response with no headers.
    pub fn new(status: u16, result: Value) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            result,
        }
    }

    /// Interprets the body as a CIS envelope with a typed result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ibm_cis::api::transport::DetailedResponse;
    /// use serde_json::{json, Value};
    ///
    /// let response = DetailedResponse::new(200, json!({
    ///     "success": true, "errors": [], "messages": [], "result": {"id": "abc"}
    /// }));
    /// let envelope = response.envelope::<Value>().unwrap();
    /// assert_eq!(envelope.result["id"], "abc");
    /// ```
    pub fn envelope<R: DeserializeOwned>(&self) -> Result<Envelope<R>, CisError> {
        Ok(serde_json::from_value(self.result.clone())?)
    }

    /// The envelope's `success` flag, or `true` when the body has none.
    pub fn api_success(&self) -> bool {
        self.result
            .get("success")
            .and_then(|s| s.as_bool())
            .unwrap_or(true)
    }

    /// Page metadata from the envelope, if present.
    pub fn result_info(&self) -> Option<ResultInfo> {
        self.result
            .get("result_info")
            .and_then(|info| serde_json::from_value(info.clone()).ok())
    }
}

/// Executes built requests.
///
/// Implementations must send each descriptor at most once and must not
/// retry.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<DetailedResponse, CisError>;
}

/// Production executor backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    http: Client,
    authenticator: Arc<dyn Authenticator>,
}

impl HttpExecutor {
    /// Creates an executor with default client settings.
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Result<Self, CisError> {
        Self::with_options(authenticator, None, false)
    }

    /// Creates an executor with an optional request timeout and, when
    /// `disable_ssl` is set, without certificate verification.
    pub fn with_options(
        authenticator: Arc<dyn Authenticator>,
        timeout: Option<Duration>,
        disable_ssl: bool,
    ) -> Result<Self, CisError> {
        authenticator.validate()?;

        let mut builder = Client::builder().user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if disable_ssl {
            tracing::warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            http: builder.build()?,
            authenticator,
        })
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<DetailedResponse, CisError> {
        let url = request.url()?;
        tracing::debug!("{} {}", request.method, url);

        let headers = outgoing_headers(request.headers, request.body.as_ref());
        let mut builder = self
            .http
            .request(request.method.to_reqwest(), url)
            .headers(headers);

        builder = match request.body {
            None => builder,
            Some(RequestBody::Json(value)) => builder.body(serde_json::to_vec(&value)?),
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Multipart {
                name,
                file_name,
                content_type,
                content,
            }) => {
                let part = Part::bytes(content)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                builder.multipart(Form::new().part(name, part))
            }
        };

        builder = self.authenticator.authenticate(builder).await?;

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        tracing::debug!(
            operation = request.operation,
            status = status.as_u16(),
            bytes = text.len(),
            "received response"
        );

        if !status.is_success() {
            return Err(format_api_error(status, &text));
        }

        Ok(DetailedResponse {
            status: status.as_u16(),
            headers,
            result: parse_body(&text),
        })
    }
}

/// Multipart bodies carry their own boundary `Content-Type`, so any
/// caller-supplied one is dropped.
fn outgoing_headers(mut headers: HeaderMap, body: Option<&RequestBody>) -> HeaderMap {
    if matches!(body, Some(RequestBody::Multipart { .. })) {
        headers.remove(CONTENT_TYPE);
    }
    headers
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_api_error_envelope() {
        let err = format_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"success": false, "errors": [{"code": 1003, "message": "Invalid zone"}], "messages": [], "result": null}"#,
        );
        match err {
            CisError::Http { status, message, body } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid zone");
                assert!(body.is_some());
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_format_api_error_pair_and_iam_shapes() {
        let err = format_api_error(StatusCode::NOT_FOUND, r#"{"errors": [[7003, "No route"]]}"#);
        assert_eq!(err.to_string(), "HTTP 404: No route");

        let err = format_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"errorCode": "BXNIM0415E", "errorMessage": "Provided API key could not be found"}"#,
        );
        assert_eq!(err.to_string(), "HTTP 400: Provided API key could not be found");
    }

    #[test]
    fn test_format_api_error_fallbacks() {
        let err = format_api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");

        let err = format_api_error(StatusCode::BAD_GATEWAY, "upstream timed out");
        assert_eq!(err.to_string(), "HTTP 502: upstream timed out");

        let err = format_api_error(StatusCode::FORBIDDEN, r#"{"unexpected": true}"#);
        assert_eq!(err.to_string(), "HTTP 403: Forbidden");
    }

    #[test]
    fn test_outgoing_headers_drop_content_type_for_multipart() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "text/plain".parse().unwrap());
        headers.insert("x-correlation-id", "abc".parse().unwrap());

        let multipart = RequestBody::Multipart {
            name: "file".to_string(),
            file_name: "file".to_string(),
            content_type: "text/plain".to_string(),
            content: b"www 300 IN A 192.0.2.1".to_vec(),
        };
        let sent = outgoing_headers(headers.clone(), Some(&multipart));
        assert!(sent.get(CONTENT_TYPE).is_none());
        assert_eq!(sent.get("x-correlation-id").unwrap(), "abc");

        let sent = outgoing_headers(headers, Some(&RequestBody::Text("x".to_string())));
        assert_eq!(sent.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"a\": 1}"), json!({"a": 1}));
        assert_eq!(parse_body("www 300 IN A 1.2.3.4"), json!("www 300 IN A 1.2.3.4"));
    }

    #[test]
    fn test_detailed_response_helpers() {
        let response = DetailedResponse::new(
            200,
            json!({
                "success": false,
                "errors": [{"message": "nope"}],
                "messages": [],
                "result": null,
                "result_info": {"page": 1, "per_page": 20, "count": 0, "total_count": 0}
            }),
        );
        assert!(!response.api_success());
        assert_eq!(response.result_info().unwrap().per_page, 20);
        let envelope = response.envelope::<Value>().unwrap();
        assert_eq!(envelope.first_error().as_deref(), Some("nope"));

        assert!(DetailedResponse::new(204, Value::Null).api_success());
    }
}
