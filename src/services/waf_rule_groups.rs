//
//  ibm-cis
//  services/waf_rule_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Rule groups inside a WAF package.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const GROUP_PATH: &str = "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{pkg_id}/groups/{group_id}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "waf_rule_groups",
    title: "WafRuleGroupsApiV1",
    version: "v1",
    summary: "WAF rule groups",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[
        OperationSpec::get("listWafRuleGroups", "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{pkg_id}/groups")
            .params(&["pkgId"])
            .query(&["name", "mode", "rulesCount", "page", "perPage", "order", "direction", "match"]),
        OperationSpec::get("getWafRuleGroup", GROUP_PATH).params(&["pkgId", "groupId"]),
        OperationSpec::patch("updateWafRuleGroup", GROUP_PATH)
            .params(&["pkgId", "groupId"])
            .json(&["mode"]),
    ],
};

cis_service! {
    pub struct WafRuleGroupsApiV1 for SPEC {
        list_waf_rule_groups => "listWafRuleGroups",
        get_waf_rule_group => "getWafRuleGroup",
        update_waf_rule_group => "updateWafRuleGroup",
    }
}
