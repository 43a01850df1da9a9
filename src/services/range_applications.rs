//
//  ibm-cis
//  services/range_applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Range applications: TCP/UDP proxying for arbitrary ports.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const APP_FIELDS: &[&str] = &[
    "protocol",
    "dns",
    "originDirect",
    "originDns",
    "originPort",
    "ipFirewall",
    "proxyProtocol",
    "edgeIps",
    "trafficType",
    "tls",
];
const APP_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/range/apps/{app_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "range_applications",
    title: "RangeApplicationsV1",
    version: "v1",
    summary: "Range applications of a zone",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listRangeApps", "/v1/{crn}/zones/{zone_identifier}/range/apps")
            .query(&["page", "perPage", "order", "direction"]),
        OperationSpec::post("createRangeApp", "/v1/{crn}/zones/{zone_identifier}/range/apps")
            .json(APP_FIELDS)
            .required(&["protocol", "dns"]),
        OperationSpec::get("getRangeApp", APP_PATH).params(&["appIdentifier"]),
        OperationSpec::put("updateRangeApp", APP_PATH)
            .params(&["appIdentifier"])
            .json(APP_FIELDS)
            .required(&["protocol", "dns"]),
        OperationSpec::delete("deleteRangeApp", APP_PATH).params(&["appIdentifier"]),
    ],
};

cis_service! {
    pub struct RangeApplicationsV1 for SPEC {
        list_range_apps => "listRangeApps",
        create_range_app => "createRangeApp",
        get_range_app => "getRangeApp",
        update_range_app => "updateRangeApp",
        delete_range_app => "deleteRangeApp",
    }
}
