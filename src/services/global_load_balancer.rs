//
//  ibm-cis
//  services/global_load_balancer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Global load balancers of a zone. Pools and monitors live at the
//! instance level, see [`global_load_balancer_pools`](super::global_load_balancer_pools)
//! and [`global_load_balancer_monitor`](super::global_load_balancer_monitor).

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const LOAD_BALANCER_FIELDS: &[&str] = &[
    "name",
    "fallbackPool",
    "defaultPools",
    "description",
    "ttl",
    "regionPools",
    "popPools",
    "proxied",
    "enabled",
    "sessionAffinity",
    "steeringPolicy",
];
const LOAD_BALANCER_PATH: &str =
    "/v1/{crn}/zones/{zone_identifier}/load_balancers/{load_balancer_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "global_load_balancer",
    title: "GlobalLoadBalancerV1",
    version: "v1",
    summary: "Global load balancers of a zone",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: &[
        OperationSpec::get("listAllLoadBalancers", "/v1/{crn}/zones/{zone_identifier}/load_balancers"),
        OperationSpec::post("createLoadBalancer", "/v1/{crn}/zones/{zone_identifier}/load_balancers")
            .json(LOAD_BALANCER_FIELDS),
        OperationSpec::delete("deleteLoadBalancer", LOAD_BALANCER_PATH)
            .params(&["loadBalancerIdentifier"]),
        OperationSpec::get("getLoadBalancerSettings", LOAD_BALANCER_PATH)
            .params(&["loadBalancerIdentifier"]),
        OperationSpec::put("editLoadBalancer", LOAD_BALANCER_PATH)
            .params(&["loadBalancerIdentifier"])
            .json(LOAD_BALANCER_FIELDS),
    ],
};

cis_service! {
    pub struct GlobalLoadBalancerV1 for SPEC {
        list_all_load_balancers => "listAllLoadBalancers",
        create_load_balancer => "createLoadBalancer",
        delete_load_balancer => "deleteLoadBalancer",
        get_load_balancer_settings => "getLoadBalancerSettings",
        edit_load_balancer => "editLoadBalancer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_uses_snake_case_keys() {
        let executor = RecordingExecutor::new();
        let glb = GlobalLoadBalancerV1::new(
            ServiceOptions::new()
                .crn("crn:v1:test")
                .zone_identifier("zone-1")
                .executor(executor.clone()),
        )
        .unwrap();

        glb.create_load_balancer(
            Params::new()
                .set("name", "lb.example.com")
                .set("fallbackPool", "pool-1")
                .set("defaultPools", json!(["pool-1", "pool-2"]))
                .set("steeringPolicy", "dynamic_latency"),
        )
        .await
        .unwrap();

        assert_eq!(
            executor.last().json_body(),
            Some(&json!({
                "name": "lb.example.com",
                "fallback_pool": "pool-1",
                "default_pools": ["pool-1", "pool-2"],
                "steering_policy": "dynamic_latency"
            }))
        );
    }
}
