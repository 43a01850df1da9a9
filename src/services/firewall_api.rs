//
//  ibm-cis
//  services/firewall_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zone security level.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "firewall_api",
    title: "FirewallApiV1",
    version: "v1",
    summary: "Zone security level",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get(
            "getSecurityLevelSetting",
            "/v1/{crn}/zones/{zone_identifier}/settings/security_level",
        ),
        OperationSpec::patch(
            "setSecurityLevelSetting",
            "/v1/{crn}/zones/{zone_identifier}/settings/security_level",
        )
        .json(&["value"]),
    ],
};

cis_service! {
    pub struct FirewallApiV1 for SPEC {
        get_security_level_setting => "getSecurityLevelSetting",
        set_security_level_setting => "setSecurityLevelSetting",
    }
}
