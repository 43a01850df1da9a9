//
//  ibm-cis
//  services/filters.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Filter expressions referenced by firewall rules. Scoped per call the
//! same way as [`firewall_rules`](super::firewall_rules).

use crate::api::schema::{OperationSpec, ServiceSpec};

const SCOPE: &[&str] = &["crn", "zoneIdentifier"];
const FILTER_SCOPE: &[&str] = &["crn", "zoneIdentifier", "filterIdentifier"];
const USER_TOKEN: &[&str] = &["xAuthUserToken=X-Auth-User-Token"];
const FILTERS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/filters";
const FILTER_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/filters/{filter_identifier}";

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "filters",
    title: "FiltersV1",
    version: "v1",
    summary: "Firewall filter expressions",
    identity: &[],
    operations: &[
        OperationSpec::get("listAllFilters", FILTERS_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::post("createFilter", FILTERS_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .whole("filterInput")
            .required(&["xAuthUserToken"]),
        OperationSpec::put("updateFilters", FILTERS_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .whole("filterUpdateInput")
            .required(&["xAuthUserToken"]),
        OperationSpec::delete("deleteFilters", FILTERS_PATH)
            .params(SCOPE)
            .headers(USER_TOKEN)
            .query(&["id"])
            .required(&["xAuthUserToken", "id"]),
        OperationSpec::delete("deleteFilter", FILTER_PATH)
            .params(FILTER_SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::get("getFilter", FILTER_PATH)
            .params(FILTER_SCOPE)
            .headers(USER_TOKEN)
            .required(&["xAuthUserToken"]),
        OperationSpec::put("updateFilter", FILTER_PATH)
            .params(FILTER_SCOPE)
            .headers(USER_TOKEN)
            .json(&["id", "expression", "paused", "description"])
            .required(&["xAuthUserToken"]),
    ],
};

cis_service! {
    pub struct FiltersV1 for SPEC {
        list_all_filters => "listAllFilters",
        create_filter => "createFilter",
        update_filters => "updateFilters",
        delete_filters => "deleteFilters",
        delete_filter => "deleteFilter",
        get_filter => "getFilter",
        update_filter => "updateFilter",
    }
}
