//
//  ibm-cis
//  services/firewall_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Firewall Rules
//!
//! Firewall rules pair a filter expression with an action. This service is
//! not bound to an instance: `crn` and `zoneIdentifier` are passed with
//! every call, together with the user's IAM token in the
//! `X-Auth-User-Token` header (`xAuthUserToken`).
//!
//! Bulk create and bulk update take the whole JSON array as their body
//! parameter.

use crate::api::schema::{OperationSpec, ServiceSpec};

const SCOPE: &[&str] = &["crn", "zoneIdentifier"];
const RULE_SCOPE: &[&str] = &["crn", "zoneIdentifier", "firewallRuleIdentifier"];
const USER_TOKEN: &[&str] = &["xAuthUserToken=X-Auth-User-Token"];
const RULES_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/firewall/rules";
const RULE_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/firewall/rules/{firewall_rule_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "firewall_rules",
    title: "FirewallRulesV1",
    version: "v1",
    summary: "Firewall rules",
    identity: &[],
    operations: &[
        OperationSpec::get("listAllFirewallRules", RULES_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::post("createFirewallRules", RULES_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .whole("firewallRuleInputWithFilterId")
            .required(&["xAuthUserToken"]),
        OperationSpec::put("updateFirewllRules", RULES_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .whole("firewallRulesUpdateInputItem")
            .required(&["xAuthUserToken"]),
        OperationSpec::delete("deleteFirewallRules", RULES_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .query(&["id"])
            .required(&["xAuthUserToken", "id"]),
        OperationSpec::delete("deleteFirewallRule", RULE_PATH)
            .params(RULE_SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::get("getFirewallRule", RULE_PATH)
            .params(RULE_SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::put("updateFirewallRule", RULE_PATH)
            .params(RULE_SCOPE)
            .headers(USER_TOKEN)
            .json(&["paused", "description", "action", "priority", "filter"])
            .required(&["xAuthUserToken"]),
    ],
};

cis_service! {
    /// Firewall rules of any zone the user token can reach.
    pub struct FirewallRulesV1 for SPEC {
        list_all_firewall_rules => "listAllFirewallRules",
        create_firewall_rules => "createFirewallRules",
        update_firewll_rules => "updateFirewllRules",
        delete_firewall_rules => "deleteFirewallRules",
        delete_firewall_rule => "deleteFirewallRule",
        get_firewall_rule => "getFirewallRule",
        update_firewall_rule => "updateFirewallRule",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};
    use serde_json::json;

    fn rules(executor: std::sync::Arc<RecordingExecutor>) -> FirewallRulesV1 {
        FirewallRulesV1::new(ServiceOptions::new().executor(executor)).unwrap()
    }

    fn scope() -> Params {
        Params::new()
            .set("crn", "crn:v1:test")
            .set("zoneIdentifier", "zone-1")
            .set("xAuthUserToken", "user-token")
    }

    #[test]
    fn test_needs_no_identity() {
        let service = rules(RecordingExecutor::new());
        assert!(service.service().crn().is_none());
    }

    #[tokio::test]
    async fn test_create_sends_array_body_and_user_token() {
        let executor = RecordingExecutor::new();
        let input = json!([{"action": "block", "filter": {"id": "f1"}}]);
        rules(executor.clone())
            .create_firewall_rules(scope().set("firewallRuleInputWithFilterId", input.clone()))
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.path(), "/v1/crn:v1:test/zones/zone-1/firewall/rules");
        assert_eq!(request.header("x-auth-user-token"), Some("user-token"));
        assert_eq!(request.json_body(), Some(&input));
    }

    #[tokio::test]
    async fn test_bulk_delete_joins_ids() {
        let executor = RecordingExecutor::new();
        rules(executor.clone())
            .delete_firewall_rules(scope().set("id", json!(["a", "b"])))
            .await
            .unwrap();
        assert_eq!(executor.last().query_value("id"), Some("a,b"));
    }

    #[tokio::test]
    async fn test_missing_scope_is_reported() {
        let executor = RecordingExecutor::new();
        let err = rules(executor.clone())
            .get_firewall_rule(Params::new().set("xAuthUserToken", "t"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required parameters: crn, zoneIdentifier, firewallRuleIdentifier"
        );
        assert_eq!(executor.count(), 0);
    }
}
