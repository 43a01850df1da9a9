//
//  ibm-cis
//  services/zone_lockdown.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Zone lockdown rules: restrict URLs to listed IPs or ranges.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const LOCKDOWN_FIELDS: &[&str] = &["id", "paused", "description", "urls", "configurations", "priority"];
const LOCKDOWN_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/firewall/lockdowns/{lockdown_rule_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "zone_lockdown",
    title: "ZoneLockdownV1",
    version: "v1",
    summary: "Zone lockdown rules",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listAllZoneLockownRules", "/v1/{crn}/zones/{zone_identifier}/firewall/lockdowns")
            .query(&["page", "perPage"]),
        OperationSpec::post("createZoneLockdownRule", "/v1/{crn}/zones/{zone_identifier}/firewall/lockdowns")
            .json(LOCKDOWN_FIELDS),
        OperationSpec::delete("deleteZoneLockdownRule", LOCKDOWN_PATH).params(&["lockdownRuleIdentifier"]),
        OperationSpec::get("getLockdown", LOCKDOWN_PATH).params(&["lockdownRuleIdentifier"]),
        OperationSpec::put("updateLockdownRule", LOCKDOWN_PATH)
            .params(&["lockdownRuleIdentifier"])
            .json(LOCKDOWN_FIELDS),
    ],
};

cis_service! {
    pub struct ZoneLockdownV1 for SPEC {
        list_all_zone_lockown_rules => "listAllZoneLockownRules",
        create_zone_lockdown_rule => "createZoneLockdownRule",
        delete_zone_lockdown_rule => "deleteZoneLockdownRule",
        get_lockdown => "getLockdown",
        update_lockdown_rule => "updateLockdownRule",
    }
}
