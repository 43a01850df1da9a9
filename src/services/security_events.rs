//
//  ibm-cis
//  services/security_events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Security Events
//!
//! Firewall events of a zone. Results are cursor-paginated: pass the
//! `cursor` returned in `result_info` to fetch the next batch.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "security_events",
    title: "SecurityEventsApiV1",
    version: "v1",
    summary: "Firewall security events",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[OperationSpec::get("securityEvents", "/v1/{crn}/zones/{zone_id}/security/events").query(&[
        "ipClass", "method", "scheme", "ip", "host", "proto", "uri", "ua", "colo", "rayId", "kind", "action",
        "cursor", "country", "since", "source", "limit", "ruleId", "until",
    ])],
};

cis_service! {
    pub struct SecurityEventsApiV1 for SPEC {
        security_events => "securityEvents",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};

    #[tokio::test]
    async fn test_query_names() {
        let executor = RecordingExecutor::new();
        let events = SecurityEventsApiV1::new(
            ServiceOptions::new()
                .crn("crn:v1:test")
                .zone_id("zone-1")
                .executor(executor.clone()),
        )
        .unwrap();

        events
            .security_events(
                Params::new()
                    .set("ipClass", "clean")
                    .set("rayId", "4c2d")
                    .set("limit", 10)
                    .set("since", "2026-01-01T00:00:00Z"),
            )
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.path(), "/v1/crn:v1:test/zones/zone-1/security/events");
        assert_eq!(request.query_value("ip_class"), Some("clean"));
        assert_eq!(request.query_value("ray_id"), Some("4c2d"));
        assert_eq!(request.query_value("limit"), Some("10"));
        assert_eq!(request.query_value("since"), Some("2026-01-01T00:00:00Z"));
    }
}
