//
//  ibm-cis
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Building
//!
//! The single generic request builder shared by every CIS resource. Given an
//! [`OperationSpec`], the identity a service was constructed with and the
//! caller's [`Params`], [`build_request`] validates required parameters and
//! produces a [`RequestDescriptor`]: method, service URL, resolved path
//! parameters, query pairs, body and the composed headers.
//!
//! Nothing here performs I/O. The descriptor is handed to a
//! [`RequestExecutor`](super::transport::RequestExecutor) afterwards.
//!
//! ## Header precedence
//!
//! Later layers replace earlier ones, comparing names case-insensitively:
//!
//! 1. SDK headers (`User-Agent`, `X-IBMCloud-SDK-Analytics`)
//! 2. Operation `Accept` / `Content-Type`
//! 3. Header fields mapped from parameters (e.g. `X-Correlation-ID`)
//! 4. Service default headers
//! 5. Headers passed with the call
//!
//! ## Example
//!
//! ```rust
//! use ibm_cis::api::request::Params;
//!
//! let params = Params::new()
//!     .set("policyId", "abc")
//!     .set("perPage", 20)
//!     .header("Accept", "text/plain");
//!
//! assert!(params.is_present("policyId"));
//! assert!(!params.is_present("name"));
//! ```

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use super::common::CisError;
use super::schema::{BodySpec, Field, HttpMethod, OperationSpec, ServiceSpec};

/// Header carrying SDK analytics (service, version, operation).
pub const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Parameters for one operation call.
///
/// Values are keyed by their camelCase parameter names and hold JSON
/// values, so nested payloads (`origins`, `configuration`, `actions`) are
/// passed as-is. Headers given here take precedence over every default.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: BTreeMap<String, Value>,
    headers: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning `self` for chaining.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets a parameter from any serializable value.
    pub fn set_json<T: Serialize>(self, name: impl Into<String>, value: &T) -> Result<Self, CisError> {
        let value = serde_json::to_value(value)?;
        Ok(self.set(name, value))
    }

    /// Adds a caller header, returning `self` for chaining.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Adds a caller header in place.
    pub fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Builds parameters from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, CisError> {
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
                headers: Vec::new(),
            }),
            Value::Null => Ok(Self::default()),
            other => Err(CisError::InvalidParameter {
                name: "params".to_string(),
                reason: format!("expected a JSON object, got {}", other),
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether a parameter is present, non-null and not an empty string.
    pub fn is_present(&self, name: &str) -> bool {
        match self.values.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn caller_headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// The body of a built request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// JSON payload
    Json(Value),
    /// Text payload; the content type is in the descriptor headers
    Text(String),
    /// A single multipart form part
    Multipart {
        /// Part name
        name: String,
        /// File name reported for the part
        file_name: String,
        /// Part content type
        content_type: String,
        /// Raw content
        content: Vec<u8>,
    },
}

/// A fully built request, ready for an executor.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Operation id, for logging and analytics
    pub operation: &'static str,
    /// HTTP method
    pub method: HttpMethod,
    /// Service base URL
    pub service_url: String,
    /// Path template, e.g. `/v1/{crn}/alerting/policies/{policy_id}`
    pub path_template: &'static str,
    /// Placeholder → value
    pub path_params: BTreeMap<String, String>,
    /// Query pairs in declaration order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: Option<RequestBody>,
    /// Composed headers
    pub headers: HeaderMap,
}

impl RequestDescriptor {
    /// The path with every placeholder substituted (not percent-encoded).
    pub fn path(&self) -> String {
        substitute(self.path_template, &self.path_params)
    }

    /// The absolute request URL, with path segments and query percent-encoded.
    pub fn url(&self) -> Result<Url, CisError> {
        let mut url = Url::parse(&self.service_url)
            .map_err(|e| CisError::InvalidUrl(format!("{}: {}", self.service_url, e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CisError::InvalidUrl(format!("{} cannot be a base URL", self.service_url)))?;
            segments.pop_if_empty();
            for segment in self.path_template.split('/').filter(|s| !s.is_empty()) {
                segments.push(&substitute(segment, &self.path_params));
            }
        }

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }
}

/// Per-service inputs to the builder.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    /// Service base URL
    pub service_url: &'a str,
    /// Identity placeholder → value, e.g. `crn` → `crn:v1:...`
    pub identity: &'a BTreeMap<String, String>,
    /// Service default headers
    pub default_headers: &'a HeaderMap,
}

/// Builds the request for one operation call.
///
/// # Errors
///
/// - [`CisError::MissingParameters`] when a required parameter (path
///   fields included) is absent, null or empty; nothing is sent.
/// - [`CisError::InvalidHeader`] when a header name or value is not valid.
/// - [`CisError::InvalidParameter`] when a raw or multipart body value is
///   not text.
pub fn build_request(
    spec: &ServiceSpec,
    op: &OperationSpec,
    ctx: BuildContext<'_>,
    params: &Params,
) -> Result<RequestDescriptor, CisError> {
    let missing: Vec<&str> = op
        .required_params()
        .into_iter()
        .filter(|name| !params.is_present(name))
        .collect();
    if !missing.is_empty() {
        return Err(CisError::missing(missing));
    }

    let known = op.known_params();
    for name in params.names() {
        if !known.contains(&name) {
            tracing::trace!(operation = op.name, param = name, "ignoring unknown parameter");
        }
    }

    let path_params = resolve_path(op, ctx.identity, params)?;
    let query = build_query(op, params);
    let body = build_body(op, params)?;
    let headers = compose_headers(spec, op, ctx.default_headers, params)?;

    let descriptor = RequestDescriptor {
        operation: op.name,
        method: op.method,
        service_url: ctx.service_url.to_string(),
        path_template: op.path,
        path_params,
        query,
        body,
        headers,
    };

    tracing::debug!(
        service = spec.name,
        operation = op.name,
        method = %descriptor.method,
        path = %descriptor.path(),
        "built request"
    );

    Ok(descriptor)
}

fn resolve_path(
    op: &OperationSpec,
    identity: &BTreeMap<String, String>,
    params: &Params,
) -> Result<BTreeMap<String, String>, CisError> {
    let mut resolved = BTreeMap::new();
    let fields: Vec<Field> = op.path_params.iter().map(|d| Field::parse(*d)).collect();
    let mut unresolved = Vec::new();

    for placeholder in op.placeholders() {
        if let Some(field) = fields.iter().find(|f| f.wire == placeholder) {
            match params.get(field.param).filter(|_| params.is_present(field.param)) {
                Some(value) => {
                    resolved.insert(placeholder.to_string(), scalar_to_string(value));
                }
                None => unresolved.push(field.param.to_string()),
            }
        } else if let Some(value) = identity.get(placeholder).filter(|v| !v.is_empty()) {
            resolved.insert(placeholder.to_string(), value.clone());
        } else {
            unresolved.push(placeholder.to_string());
        }
    }

    if unresolved.is_empty() {
        Ok(resolved)
    } else {
        Err(CisError::MissingParameters(unresolved))
    }
}

fn build_query(op: &OperationSpec, params: &Params) -> Vec<(String, String)> {
    op.query
        .iter()
        .map(|decl| Field::parse(*decl))
        .filter_map(|field| {
            let value = params.get(field.param)?;
            query_value(value).map(|v| (field.wire.into_owned(), v))
        })
        .collect()
}

fn build_body(op: &OperationSpec, params: &Params) -> Result<Option<RequestBody>, CisError> {
    let body = match op.body {
        BodySpec::None => None,
        BodySpec::Json(fields) => {
            let mut object = Map::new();
            for field in fields.iter().map(|decl| Field::parse(*decl)) {
                if let Some(value) = params.get(field.param).filter(|v| !v.is_null()) {
                    object.insert(field.wire.into_owned(), value.clone());
                }
            }
            Some(RequestBody::Json(Value::Object(object)))
        }
        BodySpec::Whole(param) => params
            .get(param)
            .filter(|v| !v.is_null())
            .map(|v| RequestBody::Json(v.clone())),
        BodySpec::Raw { param, .. } => match params.get(param) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(RequestBody::Text(text.clone())),
            Some(_) => {
                return Err(CisError::InvalidParameter {
                    name: param.to_string(),
                    reason: "expected text content".to_string(),
                })
            }
        },
        BodySpec::Multipart(param) => match params.get(param) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => {
                let field = Field::parse(param);
                let content_type = params
                    .get(&format!("{}ContentType", field.param))
                    .and_then(|v| v.as_str())
                    .unwrap_or("application/octet-stream")
                    .to_string();
                Some(RequestBody::Multipart {
                    name: field.wire.to_string(),
                    file_name: field.wire.to_string(),
                    content_type,
                    content: text.as_bytes().to_vec(),
                })
            }
            Some(_) => {
                return Err(CisError::InvalidParameter {
                    name: param.to_string(),
                    reason: "expected file content as text".to_string(),
                })
            }
        },
    };
    Ok(body)
}

fn compose_headers(
    spec: &ServiceSpec,
    op: &OperationSpec,
    defaults: &HeaderMap,
    params: &Params,
) -> Result<HeaderMap, CisError> {
    let mut headers = HeaderMap::new();

    headers.insert(
        USER_AGENT,
        header_value(&format!("{}/{}", crate::APP_NAME, crate::VERSION))?,
    );
    headers.insert(
        HeaderName::from_static("x-ibmcloud-sdk-analytics"),
        header_value(&format!(
            "service_name={};service_version={};operation_id={}",
            spec.name,
            spec.version.to_uppercase(),
            op.name
        ))?,
    );

    headers.insert(ACCEPT, header_value(op.accept)?);
    if let Some(content_type) = op.content_type() {
        headers.insert(CONTENT_TYPE, header_value(content_type)?);
    }

    for field in op.headers.iter().map(|decl| Field::parse(*decl)) {
        if let Some(value) = params.get(field.param).and_then(query_value) {
            headers.insert(header_name(&field.wire)?, header_value(&value)?);
        }
    }

    for (name, value) in defaults {
        headers.insert(name.clone(), value.clone());
    }

    for (name, value) in params.caller_headers() {
        headers.insert(header_name(name)?, header_value(value)?);
    }

    Ok(headers)
}

/// Parses a header name, mapping failures to [`CisError::InvalidHeader`].
pub fn header_name(name: &str) -> Result<HeaderName, CisError> {
    HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|_| CisError::InvalidHeader(format!("invalid header name '{}'", name)))
}

/// Parses a header value, mapping failures to [`CisError::InvalidHeader`].
pub fn header_value(value: &str) -> Result<HeaderValue, CisError> {
    HeaderValue::from_str(value.trim())
        .map_err(|_| CisError::InvalidHeader(format!("invalid header value '{}'", value)))
}

fn substitute(template: &str, values: &BTreeMap<String, String>) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(
            items
                .iter()
                .filter(|v| !v.is_null())
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(scalar_to_string(other)),
    }
}
