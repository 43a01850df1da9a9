//
//  ibm-cis
//  services/waf_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Individual WAF rules of a package. Updates take either a `cis` or an
//! `owasp` mode object depending on the package.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const RULE_PATH: &str = "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{package_id}/rules/{identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "waf_rules",
    title: "WafRulesApiV1",
    version: "v1",
    summary: "WAF rules",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[
        OperationSpec::get("listWafRules", "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{package_id}/rules")
            .params(&["packageId"])
            .query(&[
                "mode",
                "priority",
                "match",
                "order",
                "groupId",
                "description",
                "direction",
                "page",
                "perPage",
            ]),
        OperationSpec::get("getWafRule", RULE_PATH).params(&["packageId", "identifier"]),
        OperationSpec::patch("updateWafRule", RULE_PATH)
            .params(&["packageId", "identifier"])
            .json(&["cis", "owasp"]),
    ],
};

cis_service! {
    pub struct WafRulesApiV1 for SPEC {
        list_waf_rules => "listWafRules",
        get_waf_rule => "getWafRule",
        update_waf_rule => "updateWafRule",
    }
}
