//
//  ibm-cis
//  services/global_load_balancer_pools.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Origin pools shared by the load balancers of an instance.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const POOL_FIELDS: &[&str] = &[
    "name",
    "checkRegions",
    "origins",
    "description",
    "minimumOrigins",
    "enabled",
    "monitor",
    "notificationEmail",
];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "global_load_balancer_pools",
    title: "GlobalLoadBalancerPoolsV0",
    version: "v0",
    summary: "Load balancer origin pools",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("listAllLoadBalancerPools", "/v1/{crn}/load_balancers/pools"),
        OperationSpec::post("createLoadBalancerPool", "/v1/{crn}/load_balancers/pools").json(POOL_FIELDS),
        OperationSpec::get("getLoadBalancerPool", "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .params(&["poolIdentifier"]),
        OperationSpec::delete("deleteLoadBalancerPool", "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .params(&["poolIdentifier"]),
        OperationSpec::put("editLoadBalancerPool", "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .params(&["poolIdentifier"])
            .json(POOL_FIELDS),
    ],
};

cis_service! {
    pub struct GlobalLoadBalancerPoolsV0 for SPEC {
        list_all_load_balancer_pools => "listAllLoadBalancerPools",
        create_load_balancer_pool => "createLoadBalancerPool",
        get_load_balancer_pool => "getLoadBalancerPool",
        delete_load_balancer_pool => "deleteLoadBalancerPool",
        edit_load_balancer_pool => "editLoadBalancerPool",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingExecutor;
    use crate::api::{Params, ServiceOptions};

    #[tokio::test]
    async fn test_analytics_header_reports_v0() {
        let executor = RecordingExecutor::new();
        let pools = GlobalLoadBalancerPoolsV0::new(
            ServiceOptions::new().crn("crn:v1:test").executor(executor.clone()),
        )
        .unwrap();
        pools.list_all_load_balancer_pools(Params::new()).await.unwrap();

        assert_eq!(
            executor.last().header("x-ibmcloud-sdk-analytics"),
            Some("service_name=global_load_balancer_pools;service_version=V0;operation_id=listAllLoadBalancerPools")
        );
    }
}
