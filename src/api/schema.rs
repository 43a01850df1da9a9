//
//  ibm-cis
//  api/schema.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operation Schema
//!
//! Declarative description of every CIS resource and its REST operations.
//! A resource is a [`ServiceSpec`]; each of its operations is an
//! [`OperationSpec`] holding the HTTP method, the path template and the
//! parameter fields that feed the path, the query string, the headers and
//! the body.
//!
//! ## Field declarations
//!
//! Fields are declared by their camelCase parameter name. The wire name is
//! the snake_case form of that name unless an explicit wire name follows an
//! `=` sign:
//!
//! | Declaration | Parameter | Wire name |
//! |-------------|-----------|-----------|
//! | `"alertType"` | `alertType` | `alert_type` |
//! | `"perPage"` | `perPage` | `per_page` |
//! | `"configurationTarget=configuration.target"` | `configurationTarget` | `configuration.target` |
//! | `"xCorrelationId=X-Correlation-ID"` | `xCorrelationId` | `X-Correlation-ID` |
//!
//! ## Example
//!
//! ```rust
//! use ibm_cis::api::schema::{Identity, OperationSpec, ServiceSpec};
//!
//! static EXAMPLE: ServiceSpec = ServiceSpec {
//!     name: "example",
//!     title: "ExampleV1",
//!     version: "v1",
//!     summary: "Example resource",
//!     identity: &[Identity::Crn],
//!     operations: &[
//!         OperationSpec::get("getThing", "/v1/{crn}/things/{thing_id}").params(&["thingId"]),
//!     ],
//! };
//!
//! let op = EXAMPLE.operation("getThing").unwrap();
//! assert_eq!(op.placeholders(), vec!["crn", "thing_id"]);
//! ```

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util::to_snake_case;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
});

/// Default `Accept` header for JSON operations.
pub const JSON: &str = "application/json";

/// HTTP methods used by CIS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Converts to the `reqwest` method type.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields a service instance is bound to at construction.
///
/// Identity values fill the matching path placeholders of every operation
/// of the service, so callers never pass them per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Cloud Resource Name of the CIS instance, `{crn}`.
    Crn,
    /// Zone id under the `{zone_identifier}` placeholder.
    ZoneIdentifier,
    /// Zone id under the `{zone_id}` placeholder.
    ZoneId,
}

impl Identity {
    /// camelCase option/parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Crn => "crn",
            Self::ZoneIdentifier => "zoneIdentifier",
            Self::ZoneId => "zoneId",
        }
    }

    /// Path placeholder name.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Crn => "crn",
            Self::ZoneIdentifier => "zone_identifier",
            Self::ZoneId => "zone_id",
        }
    }

    /// Suffix used for environment variables and credential files.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::Crn => "CRN",
            Self::ZoneIdentifier => "ZONE_IDENTIFIER",
            Self::ZoneId => "ZONE_ID",
        }
    }
}

/// A parsed field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// camelCase parameter name
    pub param: &'static str,
    /// Name on the wire (JSON key, query key, header name or placeholder)
    pub wire: Cow<'static, str>,
}

impl Field {
    /// Parses a `"param"` or `"param=wire"` declaration.
    pub fn parse(decl: &'static str) -> Self {
        match decl.split_once('=') {
            Some((param, wire)) => Self {
                param,
                wire: Cow::Borrowed(wire),
            },
            None => Self {
                param: decl,
                wire: Cow::Owned(to_snake_case(decl)),
            },
        }
    }
}

/// How an operation's request body is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySpec {
    /// No body.
    None,
    /// JSON object assembled from the listed fields.
    Json(&'static [&'static str]),
    /// The named parameter's value is the whole JSON body.
    Whole(&'static str),
    /// The named parameter is sent as text with the given content type.
    Raw {
        param: &'static str,
        content_type: &'static str,
    },
    /// The named parameter is sent as a single multipart form part.
    Multipart(&'static str),
}

/// One REST operation of a CIS resource.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    /// Operation id, e.g. `getAlertPolicy`
    pub name: &'static str,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template relative to the service URL
    pub path: &'static str,
    /// Fields filling non-identity path placeholders
    pub path_params: &'static [&'static str],
    /// Query string fields
    pub query: &'static [&'static str],
    /// Header fields
    pub headers: &'static [&'static str],
    /// Body layout
    pub body: BodySpec,
    /// Required parameters besides the path fields
    pub required: &'static [&'static str],
    /// `Accept` header value
    pub accept: &'static str,
}

impl OperationSpec {
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            name,
            method,
            path,
            path_params: &[],
            query: &[],
            headers: &[],
            body: BodySpec::None,
            required: &[],
            accept: JSON,
        }
    }

    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, path)
    }

    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, path)
    }

    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Put, path)
    }

    pub const fn patch(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Patch, path)
    }

    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Delete, path)
    }

    /// Path fields; every one of them is implicitly required.
    pub const fn params(mut self, fields: &'static [&'static str]) -> Self {
        self.path_params = fields;
        self
    }

    pub const fn query(mut self, fields: &'static [&'static str]) -> Self {
        self.query = fields;
        self
    }

    pub const fn headers(mut self, fields: &'static [&'static str]) -> Self {
        self.headers = fields;
        self
    }

    pub const fn json(mut self, fields: &'static [&'static str]) -> Self {
        self.body = BodySpec::Json(fields);
        self
    }

    pub const fn whole(mut self, param: &'static str) -> Self {
        self.body = BodySpec::Whole(param);
        self
    }

    pub const fn raw(mut self, param: &'static str, content_type: &'static str) -> Self {
        self.body = BodySpec::Raw {
            param,
            content_type,
        };
        self
    }

    pub const fn multipart(mut self, param: &'static str) -> Self {
        self.body = BodySpec::Multipart(param);
        self
    }

    pub const fn required(mut self, params: &'static [&'static str]) -> Self {
        self.required = params;
        self
    }

    pub const fn accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    /// `Content-Type` sent with this operation's body, if it has one.
    pub fn content_type(&self) -> Option<&'static str> {
        match self.body {
            BodySpec::None => None,
            BodySpec::Json(_) | BodySpec::Whole(_) => Some(JSON),
            BodySpec::Raw { content_type, .. } => Some(content_type),
            // reqwest sets the boundary-bearing multipart type itself
            BodySpec::Multipart(_) => None,
        }
    }

    /// Placeholder names in the path template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        PLACEHOLDER
            .captures_iter(self.path)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect()
    }

    /// All parameters that must be present, path fields first, in
    /// declaration order and without duplicates.
    pub fn required_params(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .path_params
            .iter()
            .map(|decl| Field::parse(*decl).param)
            .collect();
        for name in self.required {
            if !names.contains(name) {
                names.push(name);
            }
        }
        names
    }

    /// Every parameter name the operation understands.
    pub fn known_params(&self) -> Vec<&'static str> {
        let mut names = self.required_params();
        let body_fields: Vec<&'static str> = match self.body {
            BodySpec::Json(fields) => fields.to_vec(),
            BodySpec::Whole(param) | BodySpec::Raw { param, .. } | BodySpec::Multipart(param) => {
                vec![param]
            }
            BodySpec::None => Vec::new(),
        };
        for decl in self.query.iter().chain(self.headers).chain(body_fields.iter()) {
            let param = Field::parse(*decl).param;
            if !names.contains(&param) {
                names.push(param);
            }
        }
        names
    }
}

/// A CIS resource: its identity fields and its operation table.
#[derive(Debug)]
pub struct ServiceSpec {
    /// Default service name, used for external configuration lookup
    pub name: &'static str,
    /// Facade type name, e.g. `AlertsV1`
    pub title: &'static str,
    /// API version tag reported in SDK analytics headers
    pub version: &'static str,
    /// One-line description
    pub summary: &'static str,
    /// Identity fields bound at construction
    pub identity: &'static [Identity],
    /// Operation table
    pub operations: &'static [OperationSpec],
}

impl ServiceSpec {
    /// Looks up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&'static OperationSpec> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Whether the service binds the given identity field.
    pub fn binds(&self, identity: Identity) -> bool {
        self.identity.contains(&identity)
    }

    /// Human readable identity list, e.g. `crn, zoneIdentifier`.
    pub fn identity_label(&self) -> String {
        if self.identity.is_empty() {
            return "-".to_string();
        }
        self.identity
            .iter()
            .map(|i| i.param())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
