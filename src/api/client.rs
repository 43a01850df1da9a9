//
//  ibm-cis
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Generic CIS Service
//!
//! [`CisService`] is the facade every CIS resource is built on. It holds
//! the identity a service instance is bound to (the instance CRN and, for
//! zone-scoped resources, the zone id), the base URL, default headers and
//! the [`RequestExecutor`] that performs the calls.
//!
//! ## Features
//!
//! - Synchronous validation of identity fields at construction
//! - One generic request builder for every operation
//! - Envelope parsing and page walking for list operations
//! - Construction from environment, credentials file and config file
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ibm_cis::api::client::{CisService, ServiceOptions};
//! use ibm_cis::api::request::Params;
//! use ibm_cis::auth::IamAuthenticator;
//! use ibm_cis::services::alerts;
//!
//! # async fn example() -> Result<(), ibm_cis::api::common::CisError> {
//! let service = CisService::new(
//!     &alerts::SPEC,
//!     ServiceOptions::new()
//!         .crn("crn:v1:bluemix:public:internet-svcs:global:a/123:456::")
//!         .authenticator(Arc::new(IamAuthenticator::new("my-api-key")?)),
//! )?;
//!
//! let response = service
//!     .call("getAlertPolicy", Params::new().set("policyId", "abc"))
//!     .await?;
//! println!("{}", response.result);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::common::{CisError, Envelope, DEFAULT_PER_PAGE, MAX_PAGES};
use super::request::{build_request, BuildContext, Params, RequestDescriptor};
use super::schema::{Identity, OperationSpec, ServiceSpec};
use super::transport::{DetailedResponse, HttpExecutor, RequestExecutor};
use crate::auth::{authenticator_from_config, Authenticator};
use crate::config::ExternalConfig;

/// Base URL used when none is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://api.cis.cloud.ibm.com";

/// Options for constructing a service.
///
/// Either an authenticator or an executor must be given. An executor takes
/// precedence; the authenticator, timeout and `disable_ssl` only configure
/// the default [`HttpExecutor`].
#[derive(Clone, Default)]
pub struct ServiceOptions {
    pub service_name: Option<String>,
    pub service_url: Option<String>,
    pub crn: Option<String>,
    pub zone_identifier: Option<String>,
    pub zone_id: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub executor: Option<Arc<dyn RequestExecutor>>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
    pub disable_ssl: bool,
}

impl ServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used for external configuration lookup.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn crn(mut self, crn: impl Into<String>) -> Self {
        self.crn = Some(crn.into());
        self
    }

    pub fn zone_identifier(mut self, zone: impl Into<String>) -> Self {
        self.zone_identifier = Some(zone.into());
        self
    }

    pub fn zone_id(mut self, zone: impl Into<String>) -> Self {
        self.zone_id = Some(zone.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Default headers sent with every request of the service.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn disable_ssl(mut self, disable_ssl: bool) -> Self {
        self.disable_ssl = disable_ssl;
        self
    }

    fn identity(&self, identity: Identity) -> Option<&str> {
        let value = match identity {
            Identity::Crn => &self.crn,
            Identity::ZoneIdentifier => &self.zone_identifier,
            Identity::ZoneId => &self.zone_id,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Fills every unset option from external configuration.
    ///
    /// An authenticator is only resolved when neither an executor nor an
    /// authenticator was given.
    pub fn complete_from(mut self, external: &ExternalConfig) -> Result<Self, CisError> {
        let fill = |slot: &mut Option<String>, key: &str| {
            if slot.as_deref().map_or(true, str::is_empty) {
                if let Some(value) = external.get(key) {
                    *slot = Some(value.to_string());
                }
            }
        };
        fill(&mut self.service_url, "URL");
        for identity in [Identity::Crn, Identity::ZoneIdentifier, Identity::ZoneId] {
            let slot = match identity {
                Identity::Crn => &mut self.crn,
                Identity::ZoneIdentifier => &mut self.zone_identifier,
                Identity::ZoneId => &mut self.zone_id,
            };
            fill(slot, identity.config_key());
        }

        if !self.disable_ssl {
            self.disable_ssl = external.disable_ssl();
        }

        if self.executor.is_none() && self.authenticator.is_none() {
            self.authenticator = Some(authenticator_from_config(external)?);
        }

        Ok(self)
    }
}

impl fmt::Debug for ServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceOptions")
            .field("service_name", &self.service_name)
            .field("service_url", &self.service_url)
            .field("crn", &self.crn)
            .field("zone_identifier", &self.zone_identifier)
            .field("zone_id", &self.zone_id)
            .field("authenticator", &self.authenticator)
            .field("executor", &self.executor.as_ref().map(|_| "custom"))
            .field("timeout", &self.timeout)
            .field("disable_ssl", &self.disable_ssl)
            .finish()
    }
}

/// A service instance bound to one CIS resource.
///
/// Cloning is cheap; clones share the executor.
#[derive(Clone)]
pub struct CisService {
    spec: &'static ServiceSpec,
    service_name: String,
    service_url: String,
    identity: BTreeMap<String, String>,
    default_headers: HeaderMap,
    executor: Arc<dyn RequestExecutor>,
}

impl CisService {
    /// Creates a service from explicit options.
    ///
    /// # Errors
    ///
    /// - [`CisError::MissingParameters`] if an identity field the resource
    ///   needs (`crn`, `zoneIdentifier` or `zoneId`) is missing or empty
    /// - [`CisError::Config`] if neither an executor nor an authenticator
    ///   was given
    /// - [`CisError::InvalidUrl`] if the service URL cannot be parsed
    pub fn new(spec: &'static ServiceSpec, options: ServiceOptions) -> Result<Self, CisError> {
        let mut identity = BTreeMap::new();
        let mut missing = Vec::new();
        for id in spec.identity {
            match options.identity(*id) {
                Some(value) => {
                    identity.insert(id.placeholder().to_string(), value.to_string());
                }
                None => missing.push(id.param()),
            }
        }
        if !missing.is_empty() {
            return Err(CisError::missing(missing));
        }

        let service_url = normalize_url(options.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL))?;

        let executor: Arc<dyn RequestExecutor> = match (options.executor, options.authenticator) {
            (Some(executor), _) => executor,
            (None, Some(authenticator)) => Arc::new(HttpExecutor::with_options(
                authenticator,
                options.timeout,
                options.disable_ssl,
            )?),
            (None, None) => {
                return Err(CisError::Config(
                    "An authenticator or request executor is required".to_string(),
                ))
            }
        };

        let service_name = options.service_name.unwrap_or_else(|| spec.name.to_string());
        tracing::debug!(service = %service_name, url = %service_url, "created service");

        Ok(Self {
            spec,
            service_name,
            service_url,
            identity,
            default_headers: options.headers,
            executor,
        })
    }

    /// Creates a service, filling unset options from the environment, the
    /// credentials file and the config file for the service name.
    pub fn new_instance(spec: &'static ServiceSpec, options: ServiceOptions) -> Result<Self, CisError> {
        let name = options
            .service_name
            .clone()
            .unwrap_or_else(|| spec.name.to_string());
        let external = ExternalConfig::load(&name)?;
        let options = options.service_name(name).complete_from(&external)?;
        Self::new(spec, options)
    }

    pub fn spec(&self) -> &'static ServiceSpec {
        self.spec
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Replaces the base URL; one trailing `/` is dropped.
    pub fn set_service_url(&mut self, url: &str) -> Result<(), CisError> {
        self.service_url = normalize_url(url)?;
        Ok(())
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    pub fn crn(&self) -> Option<&str> {
        self.identity_value(Identity::Crn)
    }

    pub fn zone_identifier(&self) -> Option<&str> {
        self.identity_value(Identity::ZoneIdentifier)
    }

    pub fn zone_id(&self) -> Option<&str> {
        self.identity_value(Identity::ZoneId)
    }

    fn identity_value(&self, identity: Identity) -> Option<&str> {
        self.identity.get(identity.placeholder()).map(String::as_str)
    }

    /// Looks up an operation of this service.
    pub fn operation(&self, name: &str) -> Result<&'static OperationSpec, CisError> {
        self.spec
            .operation(name)
            .ok_or_else(|| CisError::UnknownOperation {
                service: self.service_name.clone(),
                operation: name.to_string(),
            })
    }

    /// Builds the request for an operation without sending it.
    pub fn build(&self, operation: &str, params: &Params) -> Result<RequestDescriptor, CisError> {
        let op = self.operation(operation)?;
        let ctx = BuildContext {
            service_url: &self.service_url,
            identity: &self.identity,
            default_headers: &self.default_headers,
        };
        build_request(self.spec, op, ctx, params)
    }

    /// Builds and executes an operation.
    ///
    /// Validation failures are returned before the executor is invoked;
    /// otherwise the executor is awaited exactly once.
    pub async fn call(&self, operation: &str, params: Params) -> Result<DetailedResponse, CisError> {
        let request = self.build(operation, &params)?;
        self.executor.execute(request).await
    }

    /// Executes an operation and parses the body as an envelope.
    pub async fn call_envelope<R: DeserializeOwned>(
        &self,
        operation: &str,
        params: Params,
    ) -> Result<Envelope<R>, CisError> {
        self.call(operation, params).await?.envelope()
    }

    /// Calls a paginated list operation until the last page and returns
    /// every item.
    ///
    /// Starts at the `page` parameter (default 1) with the `perPage`
    /// parameter (default 50). Stops when `result_info` reports no further
    /// page, a page comes back empty, or after 100 pages.
    pub async fn collect_pages(&self, operation: &str, params: Params) -> Result<Vec<Value>, CisError> {
        let op = self.operation(operation)?;
        if !op.query.contains(&"page") {
            return Err(CisError::InvalidParameter {
                name: "page".to_string(),
                reason: format!("operation '{}' is not paginated", operation),
            });
        }

        let per_page = params
            .get("perPage")
            .and_then(Value::as_u64)
            .unwrap_or(u64::from(DEFAULT_PER_PAGE));
        let mut page = params.get("page").and_then(Value::as_u64).unwrap_or(1);
        let mut items = Vec::new();

        for _ in 0..MAX_PAGES {
            let mut page_params = params.clone();
            page_params.insert("page", page);
            page_params.insert("perPage", per_page);

            let response = self.call(operation, page_params).await?;
            let info = response.result_info();

            match response.result.get("result") {
                Some(Value::Array(values)) if values.is_empty() => break,
                Some(Value::Array(values)) => items.extend(values.iter().cloned()),
                Some(Value::Null) | None => break,
                Some(other) => {
                    items.push(other.clone());
                    break;
                }
            }

            match info.and_then(|i| i.next_page()) {
                Some(next) => page = u64::from(next),
                None => break,
            }
        }

        Ok(items)
    }
}

impl fmt::Debug for CisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CisService")
            .field("service_name", &self.service_name)
            .field("service_url", &self.service_url)
            .field("identity", &self.identity)
            .finish()
    }
}

fn normalize_url(url: &str) -> Result<String, CisError> {
    let url = url.trim();
    let url = url.strip_suffix('/').unwrap_or(url);
    Url::parse(url).map_err(|e| CisError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::HttpMethod;
    use crate::api::testing::RecordingExecutor;
    use crate::services::{alerts, dns_records};
    use serde_json::json;

    const CRN: &str = "crn:v1:bluemix:public:internet-svcs:global:a/abc:def::";

    fn alerts_service(executor: Arc<RecordingExecutor>) -> CisService {
        CisService::new(&alerts::SPEC, ServiceOptions::new().crn(CRN).executor(executor)).unwrap()
    }

    #[test]
    fn test_missing_crn_fails_synchronously() {
        let executor = RecordingExecutor::new();
        let err = CisService::new(&alerts::SPEC, ServiceOptions::new().executor(executor.clone()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: crn");

        let err = CisService::new(
            &dns_records::SPEC,
            ServiceOptions::new().crn("").executor(executor.clone()),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: crn, zoneIdentifier");
        assert_eq!(executor.count(), 0);
    }

    #[test]
    fn test_requires_executor_or_authenticator() {
        let err = CisService::new(&alerts::SPEC, ServiceOptions::new().crn(CRN)).unwrap_err();
        assert!(matches!(err, CisError::Config(_)));
    }

    #[test]
    fn test_default_and_explicit_url() {
        let service = alerts_service(RecordingExecutor::new());
        assert_eq!(service.service_url(), DEFAULT_SERVICE_URL);
        assert_eq!(service.crn(), Some(CRN));
        assert_eq!(service.zone_identifier(), None);

        let mut service = CisService::new(
            &alerts::SPEC,
            ServiceOptions::new()
                .crn(CRN)
                .service_url("https://cis.example.com/api/")
                .executor(RecordingExecutor::new()),
        )
        .unwrap();
        assert_eq!(service.service_url(), "https://cis.example.com/api");

        service.set_service_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(service.service_url(), "http://127.0.0.1:8080");
        assert!(matches!(service.set_service_url("not a url"), Err(CisError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_get_alert_policy() {
        let executor = RecordingExecutor::new();
        let service = alerts_service(executor.clone());

        service
            .call("getAlertPolicy", Params::new().set("policyId", "abc"))
            .await
            .unwrap();

        assert_eq!(executor.count(), 1);
        let request = executor.last();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path_template, "/v1/{crn}/alerting/policies/{policy_id}");
        assert_eq!(request.path_params["policy_id"], "abc");
        assert_eq!(request.path_params["crn"], CRN);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_missing_parameter_never_executes() {
        let executor = RecordingExecutor::new();
        let service = alerts_service(executor.clone());

        let err = service.call("getAlertPolicy", Params::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: policyId");
        assert_eq!(executor.count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_operation() {
        let executor = RecordingExecutor::new();
        let service = alerts_service(executor.clone());
        let err = service.call("getEverything", Params::new()).await.unwrap_err();
        assert!(matches!(err, CisError::UnknownOperation { .. }));
        assert_eq!(executor.count(), 0);
    }

    #[tokio::test]
    async fn test_default_headers_below_caller_headers() {
        let executor = RecordingExecutor::new();
        let mut service = alerts_service(executor.clone());
        let mut headers = HeaderMap::new();
        headers.insert("x-team", "edge".parse().unwrap());
        headers.insert("accept", "application/vnd.cis+json".parse().unwrap());
        service.set_default_headers(headers);

        service.call("getAlertPolicies", Params::new()).await.unwrap();
        assert_eq!(executor.last().header("x-team"), Some("edge"));
        assert_eq!(executor.last().header("accept"), Some("application/vnd.cis+json"));

        service
            .call("getAlertPolicies", Params::new().header("Accept", "text/plain"))
            .await
            .unwrap();
        assert_eq!(executor.last().header("accept"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_call_envelope() {
        let executor = RecordingExecutor::with_responses(vec![json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": [{"id": "p1"}, {"id": "p2"}]
        })]);
        let service = alerts_service(executor);
        let envelope: Envelope<Vec<Value>> = service
            .call_envelope("getAlertPolicies", Params::new())
            .await
            .unwrap();
        assert_eq!(envelope.result.len(), 2);
    }

    #[tokio::test]
    async fn test_collect_pages() {
        let page = |n: u32, ids: &[&str]| {
            json!({
                "success": true, "errors": [], "messages": [],
                "result": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
                "result_info": {"page": n, "per_page": 2, "count": ids.len(), "total_count": 5}
            })
        };
        let executor = RecordingExecutor::with_responses(vec![
            page(1, &["a", "b"]),
            page(2, &["c", "d"]),
            page(3, &["e"]),
        ]);
        let service = CisService::new(
            &dns_records::SPEC,
            ServiceOptions::new()
                .crn(CRN)
                .zone_identifier("zone-1")
                .executor(executor.clone()),
        )
        .unwrap();

        let items = service
            .collect_pages("listAllDnsRecords", Params::new().set("perPage", 2).set("type", "A"))
            .await
            .unwrap();

        assert_eq!(items.len(), 5);
        let requests = executor.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[2].query_value("page"), Some("3"));
        assert_eq!(requests[2].query_value("per_page"), Some("2"));
        assert_eq!(requests[2].query_value("type"), Some("A"));
    }

    #[tokio::test]
    async fn test_collect_pages_rejects_unpaginated() {
        let service = alerts_service(RecordingExecutor::new());
        let err = service
            .collect_pages("getAlertPolicy", Params::new().set("policyId", "x"))
            .await
            .unwrap_err();
        assert!(matches!(err, CisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_complete_from_external() {
        let env = vec![
            ("ALERTS_CRN".to_string(), "crn:from:env".to_string()),
            ("ALERTS_URL".to_string(), "https://env.example.com".to_string()),
            ("ALERTS_AUTH_TYPE".to_string(), "noauth".to_string()),
        ];
        let external = ExternalConfig::from_sources("alerts", env, &BTreeMap::new(), None);
        let options = ServiceOptions::new()
            .crn("crn:explicit")
            .complete_from(&external)
            .unwrap();
        assert_eq!(options.crn.as_deref(), Some("crn:explicit"));
        assert_eq!(options.service_url.as_deref(), Some("https://env.example.com"));
        assert_eq!(
            options.authenticator.unwrap().authentication_type(),
            crate::auth::AUTHTYPE_NOAUTH
        );
    }
}
