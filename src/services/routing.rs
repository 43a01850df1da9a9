//
//  ibm-cis
//  services/routing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Smart routing toggle of a zone.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "routing",
    title: "RoutingV1",
    version: "v1",
    summary: "Smart routing",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("getSmartRouting", "/v1/{crn}/zones/{zone_identifier}/routing/smart_routing"),
        OperationSpec::patch("updateSmartRouting", "/v1/{crn}/zones/{zone_identifier}/routing/smart_routing")
            .json(&["value"]),
    ],
};

cis_service! {
    pub struct RoutingV1 for SPEC {
        get_smart_routing => "getSmartRouting",
        update_smart_routing => "updateSmartRouting",
    }
}
