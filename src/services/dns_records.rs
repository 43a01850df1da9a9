//
//  ibm-cis
//  services/dns_records.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # DNS Records
//!
//! CRUD for the DNS records of a zone. `listAllDnsRecords` is paginated
//! and can be drained with
//! [`CisService::collect_pages`](crate::api::CisService::collect_pages).

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const RECORD_FIELDS: &[&str] = &["name", "type", "ttl", "content", "priority", "data", "proxied"];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "dns_records",
    title: "DnsRecordsV1",
    version: "v1",
    summary: "DNS records of a zone",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listAllDnsRecords", "/v1/{crn}/zones/{zone_identifier}/dns_records").query(&[
            "type",
            "name",
            "content",
            "page",
            "perPage",
            "order",
            "direction",
            "match",
        ]),
        OperationSpec::post("createDnsRecord", "/v1/{crn}/zones/{zone_identifier}/dns_records")
            .json(RECORD_FIELDS),
        OperationSpec::delete(
            "deleteDnsRecord",
            "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
        )
        .params(&["dnsrecordIdentifier"]),
        OperationSpec::get(
            "getDnsRecord",
            "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
        )
        .params(&["dnsrecordIdentifier"]),
        OperationSpec::put(
            "updateDnsRecord",
            "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
        )
        .params(&["dnsrecordIdentifier"])
        .json(RECORD_FIELDS),
    ],
};

cis_service! {
    /// DNS records of one zone.
    pub struct DnsRecordsV1 for SPEC {
        list_all_dns_records => "listAllDnsRecords",
        create_dns_record => "createDnsRecord",
        delete_dns_record => "deleteDnsRecord",
        get_dns_record => "getDnsRecord",
        update_dns_record => "updateDnsRecord",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};
    use serde_json::json;

    fn dns(executor: std::sync::Arc<RecordingExecutor>) -> DnsRecordsV1 {
        DnsRecordsV1::new(
            ServiceOptions::new()
                .crn("crn:v1:test")
                .zone_identifier("zone-1")
                .executor(executor),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_dns_record() {
        let executor = RecordingExecutor::new();
        dns(executor.clone())
            .create_dns_record(
                Params::new()
                    .set("type", "A")
                    .set("name", "www.example.com")
                    .set("content", "192.0.2.10")
                    .set("ttl", 120),
            )
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.path(), "/v1/crn:v1:test/zones/zone-1/dns_records");
        assert_eq!(
            request.json_body(),
            Some(&json!({"type": "A", "name": "www.example.com", "content": "192.0.2.10", "ttl": 120}))
        );
    }

    #[tokio::test]
    async fn test_list_filters_by_type() {
        let executor = RecordingExecutor::new();
        dns(executor.clone())
            .list_all_dns_records(Params::new().set("type", "AAAA").set("match", "all"))
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.query_value("type"), Some("AAAA"));
        assert_eq!(request.query_value("match"), Some("all"));
        assert!(request.json_body().is_none());
    }

    #[tokio::test]
    async fn test_record_id_is_percent_encoded() {
        let executor = RecordingExecutor::new();
        dns(executor.clone())
            .get_dns_record(Params::new().set("dnsrecordIdentifier", "a b/c"))
            .await
            .unwrap();
        let url = executor.last().url().unwrap();
        assert!(url.path().ends_with("/dns_records/a%20b%2Fc"), "{}", url);
    }
}
