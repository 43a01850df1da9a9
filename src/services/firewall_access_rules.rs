//
//  ibm-cis
//  services/firewall_access_rules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Instance-level IP firewall access rules.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "firewall_access_rules",
    title: "FirewallAccessRulesV1",
    version: "v1",
    summary: "Instance firewall access rules",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("listAllAccountAccessRules", "/v1/{crn}/firewall/access_rules/rules").query(&[
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
        OperationSpec::post("createAccountAccessRule", "/v1/{crn}/firewall/access_rules/rules")
            .json(&["mode", "notes", "configuration"]),
        OperationSpec::delete(
            "deleteAccountAccessRule",
            "/v1/{crn}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"]),
        OperationSpec::get(
            "getAccountAccessRule",
            "/v1/{crn}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"]),
        OperationSpec::patch(
            "updateAccountAccessRule",
            "/v1/{crn}/firewall/access_rules/rules/{accessrule_identifier}",
        )
        .params(&["accessruleIdentifier"])
        .json(&["mode", "notes"]),
    ],
};

cis_service! {
    /// Firewall access rules applying to every zone of an instance.
    pub struct FirewallAccessRulesV1 for SPEC {
        list_all_account_access_rules => "listAllAccountAccessRules",
        create_account_access_rule => "createAccountAccessRule",
        delete_account_access_rule => "deleteAccountAccessRule",
        get_account_access_rule => "getAccountAccessRule",
        update_account_access_rule => "updateAccountAccessRule",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};

    #[tokio::test]
    async fn test_dotted_query_names() {
        let executor = RecordingExecutor::new();
        let rules = FirewallAccessRulesV1::new(
            ServiceOptions::new().crn("crn:v1:test").executor(executor.clone()),
        )
        .unwrap();

        rules
            .list_all_account_access_rules(
                Params::new()
                    .set("configurationTarget", "ip")
                    .set("configurationValue", "198.51.100.4"),
            )
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.query_value("configuration.target"), Some("ip"));
        assert_eq!(request.query_value("configuration.value"), Some("198.51.100.4"));
    }
}
