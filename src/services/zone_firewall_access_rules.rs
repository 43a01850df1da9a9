//
//  ibm-cis
//  services/zone_firewall_access_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zone-level IP firewall access rules.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "zone_firewall_access_rules",
    title: "ZoneFirewallAccessRulesV1",
    version: "v1",
    summary: "Zone firewall access rules",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get(
            "listAllZoneAccessRules",
            "/v1/{crn}/zones/{zone_identifier}/firewall/access_rules/rules",
        )
        .query(&[
            "notes",
            "mode",
            "configurationTarget=configuration.target",
            "configurationValue=configuration.value",
            "page",
            "perPage",
            "order",
            "direction",
            "match",
        ]),
        OperationSpec::post(
            "createZoneAccessRule",
            "/v1/{crn}/zones/{zone_identifier}/firewall/access_rules/rules",
        )
        .json(&["mode", "notes", "configuration"]),
        OperationSpec::delete(
            "deleteZoneAccessRule",
            "/v1/{crn}/zones/{zone_identifier}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"]),
        OperationSpec::get(
            "getZoneAccessRule",
            "/v1/{crn}/zones/{zone_identifier}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"]),
        OperationSpec::patch(
            "updateZoneAccessRule",
            "/v1/{crn}/zones/{zone_identifier}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"])
        .json(&["mode", "notes"]),
    ],
};

cis_service! {
    /// Firewall access rules of one zone.
    pub struct ZoneFirewallAccessRulesV1 for SPEC {
        list_all_zone_access_rules => "listAllZoneAccessRules",
        create_zone_access_rule => "createZoneAccessRule",
        delete_zone_access_rule => "deleteZoneAccessRule",
        get_zone_access_rule => "getZoneAccessRule",
        update_zone_access_rule => "updateZoneAccessRule",
    }
}
