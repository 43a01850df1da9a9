//
//  ibm-cis
//  services/global_load_balancer_events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Health change events of load balancer origins.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "global_load_balancer_events",
    title: "GlobalLoadBalancerEventsV1",
    version: "v1",
    summary: "Load balancer health events",
    identity: &[Identity::Crn],
    operations: &[OperationSpec::get("getLoadBalancerEvents", "/v1/{crn}/load_balancers/events")],
};

cis_service! {
    pub struct GlobalLoadBalancerEventsV1 for SPEC {
        get_load_balancer_events => "getLoadBalancerEvents",
    }
}
