//
//  ibm-cis
//  services/caching_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Caching
//!
//! Cache purges and the cache related settings of a zone.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const VALUE: &[&str] = &["value"];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "caching_api",
    title: "CachingApiV1",
    version: "v1",
    summary: "Cache purge and cache settings",
    identity: &[Identity::Crn, Identity::ZoneId],
    operations: &[
        OperationSpec::put("purgeAll", "/v1/{crn}/zones/{zone_id}/purge_cache/purge_all"),
        OperationSpec::put("purgeByUrls", "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_urls")
            .json(&["files"]),
        OperationSpec::put("purgeByCacheTags", "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_cache_tags")
            .json(&["tags"]),
        OperationSpec::put("purgeByHosts", "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_hosts")
            .json(&["hosts"]),
        OperationSpec::get("getBrowserCacheTtl", "/v1/{crn}/zones/{zone_id}/settings/browser_cache_ttl"),
        OperationSpec::patch("updateBrowserCacheTtl", "/v1/{crn}/zones/{zone_id}/settings/browser_cache_ttl").json(VALUE),
        OperationSpec::get("getServeStaleContent", "/v1/{crn}/zones/{zone_id}/settings/always_online"),
        OperationSpec::patch("updateServeStaleContent", "/v1/{crn}/zones/{zone_id}/settings/always_online").json(VALUE),
        OperationSpec::get("getDevelopmentMode", "/v1/{crn}/zones/{zone_id}/settings/development_mode"),
        OperationSpec::patch("updateDevelopmentMode", "/v1/{crn}/zones/{zone_id}/settings/development_mode").json(VALUE),
        OperationSpec::get("getQueryStringSort", "/v1/{crn}/zones/{zone_id}/settings/sort_query_string_for_cache"),
        OperationSpec::patch("updateQueryStringSort", "/v1/{crn}/zones/{zone_id}/settings/sort_query_string_for_cache")
            .json(VALUE),
        OperationSpec::get("getCacheLevel", "/v1/{crn}/zones/{zone_id}/settings/cache_level"),
        OperationSpec::patch("updateCacheLevel", "/v1/{crn}/zones/{zone_id}/settings/cache_level").json(VALUE),
    ],
};

cis_service! {
    /// Cache control of one zone.
    pub struct CachingApiV1 for SPEC {
        purge_all => "purgeAll",
        purge_by_urls => "purgeByUrls",
        purge_by_cache_tags => "purgeByCacheTags",
        purge_by_hosts => "purgeByHosts",
        get_browser_cache_ttl => "getBrowserCacheTtl",
        update_browser_cache_ttl => "updateBrowserCacheTtl",
        get_serve_stale_content => "getServeStaleContent",
        update_serve_stale_content => "updateServeStaleContent",
        get_development_mode => "getDevelopmentMode",
        update_development_mode => "updateDevelopmentMode",
        get_query_string_sort => "getQueryStringSort",
        update_query_string_sort => "updateQueryStringSort",
        get_cache_level => "getCacheLevel",
        update_cache_level => "updateCacheLevel",
    }
}
