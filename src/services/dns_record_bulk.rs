//
//  ibm-cis
//  services/dns_record_bulk.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # DNS Record Bulk Import/Export
//!
//! Exports a zone as a BIND zone file and imports one as a multipart
//! upload. The file part is named `file`; its content type is taken from
//! the `fileContentType` parameter and defaults to
//! `application/octet-stream`.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "dns_record_bulk",
    title: "DnsRecordBulkV1",
    version: "v1",
    summary: "Zone file import and export",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("getDnsRecordsBulk", "/v1/{crn}/zones/{zone_identifier}/dns_records_bulk")
            .accept("text/plain; charset=utf-8"),
        OperationSpec::post("postDnsRecordsBulk", "/v1/{crn}/zones/{zone_identifier}/dns_records_bulk")
            .multipart("file")
            .required(&["file"]),
    ],
};

cis_service! {
    /// Bulk import and export of a zone's DNS records.
    pub struct DnsRecordBulkV1 for SPEC {
        get_dns_records_bulk => "getDnsRecordsBulk",
        post_dns_records_bulk => "postDnsRecordsBulk",
    }
}
