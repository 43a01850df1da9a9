//
//  ibm-cis
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! The request pipeline shared by every CIS resource.
//!
//! ## Architecture
//!
//! - [`schema`]: Declarative operation tables (method, path, fields)
//! - [`request`]: The generic request builder and [`RequestDescriptor`]
//! - [`transport`]: The [`RequestExecutor`] seam and the `reqwest` executor
//! - [`client`]: [`CisService`], the facade resources are built on
//! - [`common`]: Errors, the response envelope and pagination metadata
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ibm_cis::api::{CisService, ServiceOptions};
//! use ibm_cis::auth::BearerTokenAuthenticator;
//! use ibm_cis::services::zones;
//!
//! let service = CisService::new(
//!     &zones::SPEC,
//!     ServiceOptions::new()
//!         .crn("crn:v1:bluemix:public:internet-svcs:global:a/123:456::")
//!         .authenticator(Arc::new(BearerTokenAuthenticator::new("token")?)),
//! )?;
//! # Ok::<(), ibm_cis::api::CisError>(())
//! ```
//!
//! ## Error Handling
//!
//! Every fallible call returns [`CisError`]. Validation errors are raised
//! before anything is sent; non-success HTTP statuses become
//! [`CisError::Http`] with the message extracted from the error body.

/// Generic service facade and construction options.
pub mod client;

/// Shared types: errors, envelope, pagination.
pub mod common;

/// Request building from operation schemas.
pub mod request;

/// Operation and service schema types.
pub mod schema;

/// Request execution.
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CisService, ServiceOptions, DEFAULT_SERVICE_URL};
pub use common::{CisError, Envelope, ResultInfo};
pub use request::{Params, RequestBody, RequestDescriptor};
pub use transport::{DetailedResponse, HttpExecutor, RequestExecutor};
