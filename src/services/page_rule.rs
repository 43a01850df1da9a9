//
//  ibm-cis
//  services/page_rule.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Page Rules
//!
//! URL-pattern triggered overrides of zone settings. Bound to the zone
//! under the `{zone_id}` placeholder, so the zone option is `zone_id`.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const RULE_FIELDS: &[&str] = &["targets", "actions", "priority", "status"];
const RULE_PATH: &str = "/v1/{crn}/zones/{zone_id}/pagerules/{rule_id}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "page_rule",
    title: "PageRuleApiV1",
    version: "v1",
    summary: "Page rules of a zone",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[
        OperationSpec::get("getPageRule", RULE_PATH).params(&["ruleId"]),
        OperationSpec::patch("changePageRule", RULE_PATH)
            .params(&["ruleId"])
            .json(RULE_FIELDS),
        OperationSpec::put("updatePageRule", RULE_PATH)
            .params(&["ruleId"])
            .json(RULE_FIELDS),
        OperationSpec::delete("deletePageRule", RULE_PATH).params(&["ruleId"]),
        OperationSpec::get("listPageRules", "/v1/{crn}/zones/{zone_id}/pagerules")
            .query(&["status", "order", "direction", "match"]),
        OperationSpec::post("createPageRule", "/v1/{crn}/zones/{zone_id}/pagerules").json(RULE_FIELDS),
    ],
};

cis_service! {
    /// Page rules of one zone.
    pub struct PageRuleApiV1 for SPEC {
        get_page_rule => "getPageRule",
        change_page_rule => "changePageRule",
        update_page_rule => "updatePageRule",
        delete_page_rule => "deletePageRule",
        list_page_rules => "listPageRules",
        create_page_rule => "createPageRule",
    }
}
