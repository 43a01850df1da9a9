//
//  ibm-cis
//  services/waf_rule_packages.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! WAF rule packages (OWASP and CIS managed rule sets).

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const PACKAGE_PATH: &str = "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{package_id}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "waf_rule_packages",
    title: "WafRulePackagesApiV1",
    version: "v1",
    summary: "WAF rule packages",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[
        OperationSpec::get("listWafPackages", "/v1/{crn}/zones/{zone_id}/firewall/waf/packages")
            .query(&["name", "page", "perPage", "order", "direction", "match"]),
        OperationSpec::get("getWafPackage", PACKAGE_PATH).params(&["packageId"]),
        OperationSpec::patch("updateWafPackage", PACKAGE_PATH)
            .params(&["packageId"])
            .json(&["sensitivity", "actionMode"]),
    ],
};

cis_service! {
    pub struct WafRulePackagesApiV1 for SPEC {
        list_waf_packages => "listWafPackages",
        get_waf_package => "getWafPackage",
        update_waf_package => "updateWafPackage",
    }
}
