//
//  ibm-cis
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # IBM Cloud Internet Services Library
//!
//! A client SDK for the IBM Cloud Internet Services (CIS) REST APIs, and
//! the library behind the `cis` command-line tool.
//!
//! ## Overview
//!
//! Every CIS resource (DNS records, firewall rules, load balancers, zone
//! settings, ...) is described by a static operation table. One generic
//! request builder turns a table entry plus caller parameters into a
//! request, and a pluggable executor sends it. Typed facades such as
//! [`DnsRecordsV1`](services::dns_records::DnsRecordsV1) expose one async
//! method per operation.
//!
//! ## Module Structure
//!
//! - [`api`]: Request building, the service core, executors and errors
//! - [`auth`]: IAM, bearer token, basic and no-auth authenticators
//! - [`config`]: Config file, credentials file and environment settings
//! - [`services`]: Operation tables and facades for all CIS resources
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Table and JSON output for the CLI
//! - [`util`]: Utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ibm_cis::api::{Params, ServiceOptions};
//! use ibm_cis::auth::IamAuthenticator;
//! use ibm_cis::services::alerts::AlertsV1;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), ibm_cis::api::CisError> {
//! let alerts = AlertsV1::new(
//!     ServiceOptions::new()
//!         .crn("crn:v1:bluemix:public:internet-svcs:global:a/abc:def::")
//!         .authenticator(Arc::new(IamAuthenticator::new("my-api-key")?)),
//! )?;
//!
//! let response = alerts.get_alert_policies(Params::new()).await?;
//! println!("{}", response.result);
//! # Ok(())
//! # }
//! ```

/// Request building, the generic service core and transport.
///
/// A [`ServiceSpec`](api::schema::ServiceSpec) table drives
/// [`build_request`](api::request::build_request); a
/// [`RequestExecutor`](api::RequestExecutor) sends the result.
pub mod api;

/// Authenticators that decorate outgoing requests.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration sources.
///
/// The CLI's TOML file is stored in platform-specific locations:
/// - Linux: `~/.config/cis/config.toml`
/// - macOS: `~/Library/Application Support/cis/config.toml`
/// - Windows: `%APPDATA%\cis\config.toml`
pub mod config;

/// Output formatting for the CLI.
pub mod output;

/// Operation tables and typed facades, one module per CIS resource.
pub mod services;

/// Utility functions and helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use ibm_cis::Cli;
///
/// let cli = Cli::parse();
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

pub use api::{CisError, CisService, Params, ServiceOptions};

/// Application name constant.
///
/// The name of the CLI binary, used in the `User-Agent` header and for
/// configuration paths.
pub const APP_NAME: &str = "cis";

/// Application version constant.
///
/// ```rust
/// use ibm_cis::VERSION;
///
/// println!("cis version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes following Unix conventions, allowing scripts
/// to programmatically detect the outcome of CLI operations.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or missing parameters.
    pub const USAGE: i32 = 2;

    /// Missing or rejected credentials (HTTP 401/403 or a failed IAM
    /// token exchange).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// The API rate limit has been exceeded (HTTP 429).
    pub const RATE_LIMIT: i32 = 32;
}
