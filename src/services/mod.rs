//
//  ibm-cis
//  services/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # CIS Resource Services
//!
//! One module per CIS resource. Each module holds the resource's
//! [`ServiceSpec`] table and a typed facade struct exposing one async
//! method per operation.
//!
//! ## Services
//!
//! | Module | Facade | Identity |
//! |--------|--------|----------|
//! | [`alerts`] | [`AlertsV1`](alerts::AlertsV1) | crn |
//! | [`webhooks`] | [`WebhooksV1`](webhooks::WebhooksV1) | crn |
//! | [`zones`] | [`ZonesV1`](zones::ZonesV1) | crn |
//! | [`zones_settings`] | [`ZonesSettingsV1`](zones_settings::ZonesSettingsV1) | crn, zoneIdentifier |
//! | [`dns_records`] | [`DnsRecordsV1`](dns_records::DnsRecordsV1) | crn, zoneIdentifier |
//! | [`dns_record_bulk`] | [`DnsRecordBulkV1`](dns_record_bulk::DnsRecordBulkV1) | crn, zoneIdentifier |
//! | [`firewall_access_rules`] | [`FirewallAccessRulesV1`](firewall_access_rules::FirewallAccessRulesV1) | crn |
//! | [`zone_firewall_access_rules`] | [`ZoneFirewallAccessRulesV1`](zone_firewall_access_rules::ZoneFirewallAccessRulesV1) | crn, zoneIdentifier |
//! | [`firewall_api`] | [`FirewallApiV1`](firewall_api::FirewallApiV1) | crn, zoneIdentifier |
//! | [`firewall_rules`] | [`FirewallRulesV1`](firewall_rules::FirewallRulesV1) | - |
//! | [`filters`] | [`FiltersV1`](filters::FiltersV1) | - |
//! | [`global_load_balancer`] | [`GlobalLoadBalancerV1`](global_load_balancer::GlobalLoadBalancerV1) | crn, zoneIdentifier |
//! | [`global_load_balancer_pools`] | [`GlobalLoadBalancerPoolsV0`](global_load_balancer_pools::GlobalLoadBalancerPoolsV0) | crn |
//! | [`global_load_balancer_monitor`] | [`GlobalLoadBalancerMonitorV1`](global_load_balancer_monitor::GlobalLoadBalancerMonitorV1) | crn |
//! | [`global_load_balancer_events`] | [`GlobalLoadBalancerEventsV1`](global_load_balancer_events::GlobalLoadBalancerEventsV1) | crn |
//! | [`page_rule`] | [`PageRuleApiV1`](page_rule::PageRuleApiV1) | crn, zoneId |
//! | [`edge_functions`] | [`EdgeFunctionsApiV1`](edge_functions::EdgeFunctionsApiV1) | crn, zoneIdentifier |
//! | [`range_applications`] | [`RangeApplicationsV1`](range_applications::RangeApplicationsV1) | crn, zoneIdentifier |
//! | [`routing`] | [`RoutingV1`](routing::RoutingV1) | crn, zoneIdentifier |
//! | [`security_events`] | [`SecurityEventsApiV1`](security_events::SecurityEventsApiV1) | crn, zoneId |
//! | [`ssl_certificate`] | [`SslCertificateApiV1`](ssl_certificate::SslCertificateApiV1) | crn, zoneIdentifier |
//! | [`user_agent_blocking_rules`] | [`UserAgentBlockingRulesV1`](user_agent_blocking_rules::UserAgentBlockingRulesV1) | crn, zoneIdentifier |
//! | [`waf_rule_packages`] | [`WafRulePackagesApiV1`](waf_rule_packages::WafRulePackagesApiV1) | crn, zoneId |
//! | [`waf_rule_groups`] | [`WafRuleGroupsApiV1`](waf_rule_groups::WafRuleGroupsApiV1) | crn, zoneId |
//! | [`waf_rules`] | [`WafRulesApiV1`](waf_rules::WafRulesApiV1) | crn, zoneId |
//! | [`zone_lockdown`] | [`ZoneLockdownV1`](zone_lockdown::ZoneLockdownV1) | crn, zoneIdentifier |
//! | [`zone_rate_limits`] | [`ZoneRateLimitsV1`](zone_rate_limits::ZoneRateLimitsV1) | crn, zoneIdentifier |
//! | [`caching_api`] | [`CachingApiV1`](caching_api::CachingApiV1) | crn, zoneId |
//! | [`custom_pages`] | [`CustomPagesV1`](custom_pages::CustomPagesV1) | crn, zoneIdentifier |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::api::{Params, ServiceOptions};
//! use ibm_cis::services::dns_records::DnsRecordsV1;
//!
//! # async fn example() -> Result<(), ibm_cis::api::CisError> {
//! // Credentials from DNS_RECORDS_APIKEY, identity from DNS_RECORDS_CRN
//! // and DNS_RECORDS_ZONE_IDENTIFIER
//! let dns = DnsRecordsV1::new_instance(ServiceOptions::new())?;
//!
//! let response = dns
//!     .create_dns_record(
//!         Params::new()
//!             .set("type", "A")
//!             .set("name", "www.example.com")
//!             .set("content", "192.0.2.10")
//!             .set("proxied", true),
//!     )
//!     .await?;
//! println!("{}", response.result["result"]["id"]);
//! # Ok(())
//! # }
//! ```

use crate::api::schema::ServiceSpec;

/// Generates a typed facade for a service table.
///
/// Each `method => "operationName"` pair becomes an async method that
/// forwards to [`CisService::call`](crate::api::CisService::call).
macro_rules! cis_service {
    (
        $(#[$meta:meta])*
        pub struct $name:ident for $spec:path {
            $( $method:ident => $op:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            service: $crate::api::CisService,
        }

        impl $name {
            /// Operation names in declaration order.
            pub const OPERATIONS: &'static [&'static str] = &[$($op),*];

            /// Creates the service from explicit options.
            ///
            /// Fails synchronously if an identity field is missing.
            pub fn new(options: $crate::api::ServiceOptions) -> Result<Self, $crate::api::CisError> {
                Ok(Self {
                    service: $crate::api::CisService::new(&$spec, options)?,
                })
            }

            /// Creates the service, completing the options from external
            /// configuration.
            pub fn new_instance(
                options: $crate::api::ServiceOptions,
            ) -> Result<Self, $crate::api::CisError> {
                Ok(Self {
                    service: $crate::api::CisService::new_instance(&$spec, options)?,
                })
            }

            /// The underlying generic service.
            pub fn service(&self) -> &$crate::api::CisService {
                &self.service
            }

            pub fn service_mut(&mut self) -> &mut $crate::api::CisService {
                &mut self.service
            }

            $(
                #[doc = concat!("Executes `", $op, "`.")]
                pub async fn $method(
                    &self,
                    params: $crate::api::Params,
                ) -> Result<$crate::api::DetailedResponse, $crate::api::CisError> {
                    self.service.call($op, params).await
                }
            )*
        }
    };
}

pub mod alerts;
pub mod caching_api;
pub mod custom_pages;
pub mod dns_record_bulk;
pub mod dns_records;
pub mod edge_functions;
pub mod filters;
pub mod firewall_access_rules;
pub mod firewall_api;
pub mod firewall_rules;
pub mod global_load_balancer;
pub mod global_load_balancer_events;
pub mod global_load_balancer_monitor;
pub mod global_load_balancer_pools;
pub mod page_rule;
pub mod range_applications;
pub mod routing;
pub mod security_events;
pub mod ssl_certificate;
pub mod user_agent_blocking_rules;
pub mod waf_rule_groups;
pub mod waf_rule_packages;
pub mod waf_rules;
pub mod webhooks;
pub mod zone_firewall_access_rules;
pub mod zone_lockdown;
pub mod zone_rate_limits;
pub mod zones;
pub mod zones_settings;

static CATALOG: [&ServiceSpec; 29] = [
    &alerts::SPEC,
    &webhooks::SPEC,
    &zones::SPEC,
    &zones_settings::SPEC,
    &dns_records::SPEC,
    &dns_record_bulk::SPEC,
    &firewall_access_rules::SPEC,
    &zone_firewall_access_rules::SPEC,
    &firewall_api::SPEC,
    &firewall_rules::SPEC,
    &filters::SPEC,
    &global_load_balancer::SPEC,
    &global_load_balancer_pools::SPEC,
    &global_load_balancer_monitor::SPEC,
    &global_load_balancer_events::SPEC,
    &page_rule::SPEC,
    &edge_functions::SPEC,
    &range_applications::SPEC,
    &routing::SPEC,
    &security_events::SPEC,
    &ssl_certificate::SPEC,
    &user_agent_blocking_rules::SPEC,
    &waf_rule_packages::SPEC,
    &waf_rule_groups::SPEC,
    &waf_rules::SPEC,
    &zone_lockdown::SPEC,
    &zone_rate_limits::SPEC,
    &caching_api::SPEC,
    &custom_pages::SPEC,
];

/// Every service table.
pub fn catalog() -> &'static [&'static ServiceSpec] {
    &CATALOG
}

/// Finds a service by name (`dns_records`, `dns-records`) or facade title
/// (`DnsRecordsV1`), ignoring case.
pub fn find(name: &str) -> Option<&'static ServiceSpec> {
    let wanted = name.trim().replace('-', "_");
    CATALOG
        .iter()
        .copied()
        .find(|spec| spec.name.eq_ignore_ascii_case(&wanted) || spec.title.eq_ignore_ascii_case(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};

    use reqwest::header::HeaderMap;

    use crate::api::request::{build_request, BuildContext, Params};
    use crate::api::schema::{BodySpec, Field};

    fn facades() -> Vec<(&'static ServiceSpec, &'static [&'static str])> {
        vec![
            (&alerts::SPEC, alerts::AlertsV1::OPERATIONS),
            (&webhooks::SPEC, webhooks::WebhooksV1::OPERATIONS),
            (&zones::SPEC, zones::ZonesV1::OPERATIONS),
            (&zones_settings::SPEC, zones_settings::ZonesSettingsV1::OPERATIONS),
            (&dns_records::SPEC, dns_records::DnsRecordsV1::OPERATIONS),
            (&dns_record_bulk::SPEC, dns_record_bulk::DnsRecordBulkV1::OPERATIONS),
            (&firewall_access_rules::SPEC, firewall_access_rules::FirewallAccessRulesV1::OPERATIONS),
            (&zone_firewall_access_rules::SPEC, zone_firewall_access_rules::ZoneFirewallAccessRulesV1::OPERATIONS),
            (&firewall_api::SPEC, firewall_api::FirewallApiV1::OPERATIONS),
            (&firewall_rules::SPEC, firewall_rules::FirewallRulesV1::OPERATIONS),
            (&filters::SPEC, filters::FiltersV1::OPERATIONS),
            (&global_load_balancer::SPEC, global_load_balancer::GlobalLoadBalancerV1::OPERATIONS),
            (&global_load_balancer_pools::SPEC, global_load_balancer_pools::GlobalLoadBalancerPoolsV0::OPERATIONS),
            (&global_load_balancer_monitor::SPEC, global_load_balancer_monitor::GlobalLoadBalancerMonitorV1::OPERATIONS),
            (&global_load_balancer_events::SPEC, global_load_balancer_events::GlobalLoadBalancerEventsV1::OPERATIONS),
            (&page_rule::SPEC, page_rule::PageRuleApiV1::OPERATIONS),
            (&edge_functions::SPEC, edge_functions::EdgeFunctionsApiV1::OPERATIONS),
            (&range_applications::SPEC, range_applications::RangeApplicationsV1::OPERATIONS),
            (&routing::SPEC, routing::RoutingV1::OPERATIONS),
            (&security_events::SPEC, security_events::SecurityEventsApiV1::OPERATIONS),
            (&ssl_certificate::SPEC, ssl_certificate::SslCertificateApiV1::OPERATIONS),
            (&user_agent_blocking_rules::SPEC, user_agent_blocking_rules::UserAgentBlockingRulesV1::OPERATIONS),
            (&waf_rule_packages::SPEC, waf_rule_packages::WafRulePackagesApiV1::OPERATIONS),
            (&waf_rule_groups::SPEC, waf_rule_groups::WafRuleGroupsApiV1::OPERATIONS),
            (&waf_rules::SPEC, waf_rules::WafRulesApiV1::OPERATIONS),
            (&zone_lockdown::SPEC, zone_lockdown::ZoneLockdownV1::OPERATIONS),
            (&zone_rate_limits::SPEC, zone_rate_limits::ZoneRateLimitsV1::OPERATIONS),
            (&caching_api::SPEC, caching_api::CachingApiV1::OPERATIONS),
            (&custom_pages::SPEC, custom_pages::CustomPagesV1::OPERATIONS),
        ]
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: BTreeSet<_> = catalog().iter().map(|s| s.name).collect();
        let titles: BTreeSet<_> = catalog().iter().map(|s| s.title).collect();
        assert_eq!(names.len(), catalog().len());
        assert_eq!(titles.len(), catalog().len());
    }

    #[test]
    fn test_facades_match_tables() {
        let facades = facades();
        assert_eq!(facades.len(), catalog().len());
        for (spec, operations) in facades {
            let table: Vec<&str> = spec.operations.iter().map(|op| op.name).collect();
            assert_eq!(table, operations, "facade for {} is out of date", spec.name);
            let unique: BTreeSet<_> = table.iter().collect();
            assert_eq!(unique.len(), table.len(), "duplicate operation in {}", spec.name);
        }
    }

    #[test]
    fn test_every_operation_builds_with_required_params() {
        let mut identity = BTreeMap::new();
        identity.insert("crn".to_string(), "crn:v1:test".to_string());
        identity.insert("zone_identifier".to_string(), "zone-a".to_string());
        identity.insert("zone_id".to_string(), "zone-b".to_string());
        let defaults = HeaderMap::new();

        for spec in catalog() {
            let bound: BTreeMap<String, String> = identity
                .iter()
                .filter(|(k, _)| spec.identity.iter().any(|i| i.placeholder() == k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let ctx = BuildContext {
                service_url: "https://api.cis.cloud.ibm.com",
                identity: &bound,
                default_headers: &defaults,
            };

            for op in spec.operations {
                assert!(op.path.starts_with("/v1/"), "{}.{}", spec.name, op.name);

                let mut params = Params::new();
                for name in op.required_params() {
                    params.insert(name, "x");
                }
                if let BodySpec::Raw { param, .. } | BodySpec::Multipart(param) = op.body {
                    params.insert(param, "content");
                }

                let request = build_request(spec, op, ctx, &params)
                    .unwrap_or_else(|e| panic!("{}.{}: {}", spec.name, op.name, e));
                assert!(!request.path().contains('{'), "{}.{}", spec.name, op.name);
                request.url().unwrap();

                if !op.required_params().is_empty() {
                    let err = build_request(spec, op, ctx, &Params::new()).unwrap_err();
                    assert!(
                        err.to_string().starts_with("Missing required parameters"),
                        "{}.{}",
                        spec.name,
                        op.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_path_fields_match_placeholders() {
        for spec in catalog() {
            for op in spec.operations {
                for decl in op.path_params {
                    let field = Field::parse(*decl);
                    assert!(
                        op.placeholders().iter().any(|p| field.wire == *p),
                        "{}.{}: {} has no placeholder",
                        spec.name,
                        op.name,
                        field.param
                    );
                }
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("dns_records").map(|s| s.title), Some("DnsRecordsV1"));
        assert_eq!(find("DNS-Records").map(|s| s.name), Some("dns_records"));
        assert_eq!(find("globalloadbalancerpoolsv0").map(|s| s.name), Some("global_load_balancer_pools"));
        assert!(find("nope").is_none());
    }
}
