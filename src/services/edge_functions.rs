//
//  ibm-cis
//  services/edge_functions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Edge Functions
//!
//! Edge function scripts (instance level) and the route triggers that bind
//! them to URL patterns of a zone. Script bodies are JavaScript sources
//! sent as raw text. Every call accepts an optional `xCorrelationId` that
//! is sent as `X-Correlation-ID`.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const JAVASCRIPT: &str = "application/javascript";
const CORRELATION: &[&str] = &["xCorrelationId=X-Correlation-ID"];
const SCRIPT_PATH: &str = "/v1/{crn}/workers/scripts/{script_name}";
const TRIGGERS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/workers/routes";
const TRIGGER_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/workers/routes/{route_id}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "edge_functions",
    title: "EdgeFunctionsApiV1",
    version: "v1",
    summary: "Edge function scripts and triggers",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listEdgeFunctionsActions", "/v1/{crn}/workers/scripts").headers(CORRELATION),
        OperationSpec::put("updateEdgeFunctionsAction", SCRIPT_PATH)
            .params(&["scriptName"])
            .headers(CORRELATION)
            .raw("edgeFunctionsAction", JAVASCRIPT),
        OperationSpec::get("getEdgeFunctionsAction", SCRIPT_PATH)
            .params(&["scriptName"])
            .headers(CORRELATION)
            .accept(JAVASCRIPT),
        OperationSpec::delete("deleteEdgeFunctionsAction", SCRIPT_PATH)
            .params(&["scriptName"])
            .headers(CORRELATION),
        OperationSpec::post("createEdgeFunctionsTrigger", TRIGGERS_PATH)
            .headers(CORRELATION)
            .json(&["pattern", "script"]),
        OperationSpec::get("listEdgeFunctionsTriggers", TRIGGERS_PATH).headers(CORRELATION),
        OperationSpec::get("getEdgeFunctionsTrigger", TRIGGER_PATH)
            .params(&["routeId"])
            .headers(CORRELATION),
        OperationSpec::put("updateEdgeFunctionsTrigger", TRIGGER_PATH)
            .params(&["routeId"])
            .headers(CORRELATION)
            .json(&["pattern", "script"]),
        OperationSpec::delete("deleteEdgeFunctionsTrigger", TRIGGER_PATH)
            .params(&["routeId"])
            .headers(CORRELATION),
    ],
};

cis_service! {
    /// Edge function scripts and their triggers.
    pub struct EdgeFunctionsApiV1 for SPEC {
        list_edge_functions_actions => "listEdgeFunctionsActions",
        update_edge_functions_action => "updateEdgeFunctionsAction",
        get_edge_functions_action => "getEdgeFunctionsAction",
        delete_edge_functions_action => "deleteEdgeFunctionsAction",
        create_edge_functions_trigger => "createEdgeFunctionsTrigger",
        list_edge_functions_triggers => "listEdgeFunctionsTriggers",
        get_edge_functions_trigger => "getEdgeFunctionsTrigger",
        update_edge_functions_trigger => "updateEdgeFunctionsTrigger",
        delete_edge_functions_trigger => "deleteEdgeFunctionsTrigger",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::RequestBody;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{CisError, Params, ServiceOptions};
    use serde_json::json;

    fn edge(executor: std::sync::Arc<RecordingExecutor>) -> EdgeFunctionsApiV1 {
        EdgeFunctionsApiV1::new(
            ServiceOptions::new()
                .crn("crn:v1:test")
                .zone_identifier("zone-1")
                .executor(executor),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_upload_script_as_text() {
        let executor = RecordingExecutor::new();
        let script = "addEventListener('fetch', e => e.respondWith(fetch(e.request)))";
        edge(executor.clone())
            .update_edge_functions_action(
                Params::new()
                    .set("scriptName", "example")
                    .set("edgeFunctionsAction", script)
                    .set("xCorrelationId", "corr-1"),
            )
            .await
            .unwrap();

        let request = executor.last();
        assert_eq!(request.path(), "/v1/crn:v1:test/workers/scripts/example");
        assert_eq!(request.header("content-type"), Some("application/javascript"));
        assert_eq!(request.header("x-correlation-id"), Some("corr-1"));
        assert_eq!(request.body, Some(RequestBody::Text(script.to_string())));
    }

    #[tokio::test]
    async fn test_script_must_be_text() {
        let executor = RecordingExecutor::new();
        let err = edge(executor.clone())
            .update_edge_functions_action(
                Params::new()
                    .set("scriptName", "example")
                    .set("edgeFunctionsAction", json!({"not": "text"})),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CisError::InvalidParameter { ref name, .. } if name == "edgeFunctionsAction"));
        assert_eq!(executor.count(), 0);
    }

    #[tokio::test]
    async fn test_triggers_are_zone_scoped() {
        let executor = RecordingExecutor::new();
        edge(executor.clone())
            .create_edge_functions_trigger(Params::new().set("pattern", "example.com/*").set("script", "example"))
            .await
            .unwrap();
        assert_eq!(
            executor.last().path(),
            "/v1/crn:v1:test/zones/zone-1/workers/routes"
        );
    }
}
