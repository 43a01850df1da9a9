//
//  ibm-cis
//  services/custom_pages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom error and challenge pages, at instance and at zone level.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const PAGE_FIELDS: &[&str] = &["url", "state"];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "custom_pages",
    title: "CustomPagesV1",
    version: "v1",
    summary: "Custom pages",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listInstanceCustomPages", "/v1/{crn}/custom_pages"),
        OperationSpec::get("getInstanceCustomPage", "/v1/{crn}/custom_pages/{page_identifier}")
            .params(&["pageIdentifier"]),
        OperationSpec::put("updateInstanceCustomPage", "/v1/{crn}/custom_pages/{page_identifier}")
            .params(&["pageIdentifier"])
            .json(PAGE_FIELDS),
        OperationSpec::get("listZoneCustomPages", "/v1/{crn}/zones/{zone_identifier}/custom_pages"),
        OperationSpec::get(
            "getZoneCustomPage",
            "/v1/{crn}/zones/{zone_identifier}/custom_pages/{page_identifier}",
        )
        .params(&["pageIdentifier"]),
        OperationSpec::put(
            "updateZoneCustomPage",
            "/v1/{crn}/zones/{zone_identifier}/custom_pages/{page_identifier}",
        )
        .params(&["pageIdentifier"])
        .json(PAGE_FIELDS),
    ],
};

cis_service! {
    pub struct CustomPagesV1 for SPEC {
        list_instance_custom_pages => "listInstanceCustomPages",
        get_instance_custom_page => "getInstanceCustomPage",
        update_instance_custom_page => "updateInstanceCustomPage",
        list_zone_custom_pages => "listZoneCustomPages",
        get_zone_custom_page => "getZoneCustomPage",
        update_zone_custom_page => "updateZoneCustomPage",
    }
}
