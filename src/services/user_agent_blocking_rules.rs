//
//  ibm-cis
//  services/user_agent_blocking_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User agent blocking rules of a zone.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const RULE_FIELDS: &[&str] = &["paused", "description", "mode", "configuration"];
const RULE_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/firewall/ua_rules/{useragent_rule_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "user_agent_blocking_rules",
    title: "UserAgentBlockingRulesV1",
    version: "v1",
    summary: "User agent blocking rules",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listAllZoneUserAgentRules", "/v1/{crn}/zones/{zone_identifier}/firewall/ua_rules")
            .query(&["page", "perPage"]),
        OperationSpec::post("createZoneUserAgentRule", "/v1/{crn}/zones/{zone_identifier}/firewall/ua_rules")
            .json(RULE_FIELDS),
        OperationSpec::delete("deleteZoneUserAgentRule", RULE_PATH).params(&["useragentRuleIdentifier"]),
        OperationSpec::get("getUserAgentRule", RULE_PATH).params(&["useragentRuleIdentifier"]),
        OperationSpec::put("updateUserAgentRule", RULE_PATH)
            .params(&["useragentRuleIdentifier"])
            .json(RULE_FIELDS),
    ],
};

cis_service! {
    pub struct UserAgentBlockingRulesV1 for SPEC {
        list_all_zone_user_agent_rules => "listAllZoneUserAgentRules",
        create_zone_user_agent_rule => "createZoneUserAgentRule",
        delete_zone_user_agent_rule => "deleteZoneUserAgentRule",
        get_user_agent_rule => "getUserAgentRule",
        update_user_agent_rule => "updateUserAgentRule",
    }
}
