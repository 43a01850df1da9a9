//
//  ibm-cis
//  services/global_load_balancer_monitor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Health check monitors attached to load balancer pools.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const MONITOR_FIELDS: &[&str] = &[
    "expectedCodes",
    "type",
    "description",
    "method",
    "port",
    "path",
    "timeout",
    "retries",
    "interval",
    "followRedirects",
    "expectedBody",
    "allowInsecure",
    "header",
];
const MONITOR_PATH: &str = "/v1/{crn}/load_balancers/monitors/{monitor_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "global_load_balancer_monitor",
    title: "GlobalLoadBalancerMonitorV1",
    version: "v1",
    summary: "Load balancer health monitors",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("listAllLoadBalancerMonitors", "/v1/{crn}/load_balancers/monitors"),
        OperationSpec::post("createLoadBalancerMonitor", "/v1/{crn}/load_balancers/monitors")
            .json(MONITOR_FIELDS),
        OperationSpec::put("editLoadBalancerMonitor", MONITOR_PATH)
            .params(&["monitorIdentifier"])
            .json(MONITOR_FIELDS),
        OperationSpec::delete("deleteLoadBalancerMonitor", MONITOR_PATH).params(&["monitorIdentifier"]),
        OperationSpec::get("getLoadBalancerMonitor", MONITOR_PATH).params(&["monitorIdentifier"]),
    ],
};

cis_service! {
    pub struct GlobalLoadBalancerMonitorV1 for SPEC {
        list_all_load_balancer_monitors => "listAllLoadBalancerMonitors",
        create_load_balancer_monitor => "createLoadBalancerMonitor",
        edit_load_balancer_monitor => "editLoadBalancerMonitor",
        delete_load_balancer_monitor => "deleteLoadBalancerMonitor",
        get_load_balancer_monitor => "getLoadBalancerMonitor",
    }
}
