//
//  ibm-cis
//  services/zone_rate_limits.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Rate limiting rules of a zone.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const RATE_LIMIT_FIELDS: &[&str] = &[
    "disabled",
    "description",
    "bypass",
    "threshold",
    "period",
    "action",
    "correlate",
    "match",
];
const RATE_LIMIT_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/rate_limits/{rate_limit_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "zone_rate_limits",
    title: "ZoneRateLimitsV1",
    version: "v1",
    summary: "Zone rate limits",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listAllZoneRateLimits", "/v1/{crn}/zones/{zone_identifier}/rate_limits")
            .query(&["page", "perPage"]),
        OperationSpec::post("createZoneRateLimits", "/v1/{crn}/zones/{zone_identifier}/rate_limits")
            .json(RATE_LIMIT_FIELDS),
        OperationSpec::delete("deleteZoneRateLimit", RATE_LIMIT_PATH).params(&["rateLimitIdentifier"]),
        OperationSpec::get("getRateLimit", RATE_LIMIT_PATH).params(&["rateLimitIdentifier"]),
        OperationSpec::put("updateRateLimit", RATE_LIMIT_PATH)
            .params(&["rateLimitIdentifier"])
            .json(RATE_LIMIT_FIELDS),
    ],
};

cis_service! {
    pub struct ZoneRateLimitsV1 for SPEC {
        list_all_zone_rate_limits => "listAllZoneRateLimits",
        create_zone_rate_limits => "createZoneRateLimits",
        delete_zone_rate_limit => "deleteZoneRateLimit",
        get_rate_limit => "getRateLimit",
        update_rate_limit => "updateRateLimit",
    }
}
