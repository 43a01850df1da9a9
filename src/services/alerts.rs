//
//  ibm-cis
//  services/alerts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Alert Policies
//!
//! Alert policies notify webhooks and email destinations about events on a
//! CIS instance (DDoS attacks, load balancer pool health, certificate
//! expiry).
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::api::{Params, ServiceOptions};
//! use ibm_cis::services::alerts::AlertsV1;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), ibm_cis::api::CisError> {
//! let alerts = AlertsV1::new_instance(ServiceOptions::new())?;
//! alerts
//!     .create_alert_policy(
//!         Params::new()
//!             .set("name", "My Alert Policy")
//!             .set("enabled", true)
//!             .set("alertType", "dos_attack_l7")
//!             .set("mechanisms", json!({"email": [{"id": "mynotifications@email.com"}]})),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const POLICY_FIELDS: &[&str] = &[
    "name",
    "enabled",
    "alertType",
    "mechanisms",
    "description",
    "conditions",
    "filters",
];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "alerts",
    title: "AlertsV1",
    version: "v1",
    summary: "Alert policies",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("getAlertPolicies", "/v1/{crn}/alerting/policies"),
        OperationSpec::post("createAlertPolicy", "/v1/{crn}/alerting/policies").json(POLICY_FIELDS),
        OperationSpec::get("getAlertPolicy", "/v1/{crn}/alerting/policies/{policy_id}")
            .params(&["policyId"]),
        OperationSpec::put("updateAlertPolicy", "/v1/{crn}/alerting/policies/{policy_id}")
            .params(&["policyId"])
            .json(POLICY_FIELDS),
        OperationSpec::delete("deleteAlertPolicy", "/v1/{crn}/alerting/policies/{policy_id}")
            .params(&["policyId"]),
    ],
};

cis_service! {
    /// Alert policies of a CIS instance.
    pub struct AlertsV1 for SPEC {
        get_alert_policies => "getAlertPolicies",
        create_alert_policy => "createAlertPolicy",
        get_alert_policy => "getAlertPolicy",
        update_alert_policy => "updateAlertPolicy",
        delete_alert_policy => "deleteAlertPolicy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schema::HttpMethod;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};
    use serde_json::json;

    fn alerts(executor: std::sync::Arc<RecordingExecutor>) -> AlertsV1 {
        AlertsV1::new(ServiceOptions::new().crn("crn:v1:test").executor(executor)).unwrap()
    }

    #[tokio::test]
    async fn test_get_alert_policies() {
        let executor = RecordingExecutor::new();
        alerts(executor.clone())
            .get_alert_policies(Params::new())
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path(), "/v1/crn:v1:test/alerting/policies");
        assert_eq!(request.header("accept"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_create_alert_policy_body() {
        let executor = RecordingExecutor::new();
        alerts(executor.clone())
            .create_alert_policy(
                Params::new()
                    .set("name", "My Alert Policy")
                    .set("enabled", true)
                    .set("alertType", "dos_attack_l7")
                    .set("mechanisms", json!({"email": [{"id": "a@b.c"}]}))
                    .set("conditions", json!({})),
            )
            .await
            .unwrap();

        assert_eq!(
            executor.last().json_body(),
            Some(&json!({
                "name": "My Alert Policy",
                "enabled": true,
                "alert_type": "dos_attack_l7",
                "mechanisms": {"email": [{"id": "a@b.c"}]},
                "conditions": {}
            }))
        );
    }

    #[tokio::test]
    async fn test_update_alert_policy_requires_id() {
        let executor = RecordingExecutor::new();
        let err = alerts(executor.clone())
            .update_alert_policy(Params::new().set("name", "x"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: policyId");
        assert_eq!(executor.count(), 0);
    }

    #[tokio::test]
    async fn test_delete_alert_policy() {
        let executor = RecordingExecutor::new();
        alerts(executor.clone())
            .delete_alert_policy(Params::new().set("policyId", "p1"))
            .await
            .unwrap();
        let request = executor.last();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path(), "/v1/crn:v1:test/alerting/policies/p1");
    }
}
