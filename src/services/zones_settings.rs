//
//  ibm-cis
//  services/zones_settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Zone Settings
//!
//! Per-zone feature toggles. Every setting is read with a `GET` and changed
//! with a `PATCH` whose body is `{"value": ...}`, except DNSSEC which takes
//! `{"status": ...}`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_cis::api::{Params, ServiceOptions};
//! use ibm_cis::services::zones_settings::ZonesSettingsV1;
//!
//! # async fn example() -> Result<(), ibm_cis::api::CisError> {
//! let settings = ZonesSettingsV1::new_instance(ServiceOptions::new())?;
//! settings
//!     .update_min_tls_version(Params::new().set("value", "1.2"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const VALUE: &[&str] = &["value"];

macro_rules! settings_table {
    ($( ($get:literal, $update:literal, $path:literal) ),* $(,)?) => {
        &[
            OperationSpec::get("getZoneDnssec", "/v1/{crn}/zones/{zone_identifier}/dnssec"),
            OperationSpec::patch("updateZoneDnssec", "/v1/{crn}/zones/{zone_identifier}/dnssec")
                .json(&["status"]),
            $(
                OperationSpec::get($get, concat!("/v1/{crn}/zones/{zone_identifier}/settings/", $path)),
                OperationSpec::patch($update, concat!("/v1/{crn}/zones/{zone_identifier}/settings/", $path))
                    .json(VALUE),
            )*
        ]
    };
}

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "zones_settings",
    title: "ZonesSettingsV1",
    version: "v1",
    summary: "Zone settings",
    identity: &[Identity::Crn, Identity::ZoneIdentifier],
    operations: settings_table![
        ("getZoneCnameFlattening", "updateZoneCnameFlattening", "cname_flattening"),
        ("getOpportunisticEncryption", "updateOpportunisticEncryption", "opportunistic_encryption"),
        ("getOpportunisticOnion", "updateOpportunisticOnion", "opportunistic_onion"),
        ("getChallengeTtl", "updateChallengeTtl", "challenge_ttl"),
        ("getAutomaticHttpsRewrites", "updateAutomaticHttpsRewrites", "automatic_https_rewrites"),
        ("getTrueClientIp", "updateTrueClientIp", "true_client_ip_header"),
        ("getAlwaysUseHttps", "updateAlwaysUseHttps", "always_use_https"),
        ("getImageSizeOptimization", "updateImageSizeOptimization", "image_size_optimization"),
        ("getScriptLoadOptimization", "updateScriptLoadOptimization", "script_load_optimization"),
        ("getImageLoadOptimization", "updateImageLoadOptimization", "image_load_optimization"),
        ("getMinify", "updateMinify", "minify"),
        ("getMinTlsVersion", "updateMinTlsVersion", "min_tls_version"),
        ("getIpGeolocation", "updateIpGeolocation", "ip_geolocation"),
        ("getServerSideExclude", "updateServerSideExclude", "server_side_exclude"),
        ("getSecurityHeader", "updateSecurityHeader", "security_header"),
        ("getMobileRedirect", "updateMobileRedirect", "mobile_redirect"),
        ("getPrefetchPreload", "updatePrefetchPreload", "prefetch_preload"),
        ("getHttp2", "updateHttp2", "http2"),
        ("getHttp3", "updateHttp3", "http3"),
        ("getIpv6", "updateIpv6", "ipv6"),
        ("getWebSockets", "updateWebSockets", "websockets"),
        ("getPseudoIpv4", "updatePseudoIpv4", "pseudo_ipv4"),
        ("getResponseBuffering", "updateResponseBuffering", "response_buffering"),
        ("getHotlinkProtection", "updateHotlinkProtection", "hotlink_protection"),
        ("getMaxUpload", "updateMaxUpload", "max_upload"),
        ("getTlsClientAuth", "updateTlsClientAuth", "tls_client_auth"),
        ("getBrowserCheck", "updateBrowserCheck", "browser_check"),
        ("getEnableErrorPagesOn", "updateEnableErrorPagesOn", "origin_error_page_pass_thru"),
        ("getWebApplicationFirewall", "updateWebApplicationFirewall", "waf"),
        ("getCiphers", "updateCiphers", "ciphers"),
    ],
};

cis_service! {
    /// Settings of one zone.
    pub struct ZonesSettingsV1 for SPEC {
        get_zone_dnssec => "getZoneDnssec",
        update_zone_dnssec => "updateZoneDnssec",
        get_zone_cname_flattening => "getZoneCnameFlattening",
        update_zone_cname_flattening => "updateZoneCnameFlattening",
        get_opportunistic_encryption => "getOpportunisticEncryption",
        update_opportunistic_encryption => "updateOpportunisticEncryption",
        get_opportunistic_onion => "getOpportunisticOnion",
        update_opportunistic_onion => "updateOpportunisticOnion",
        get_challenge_ttl => "getChallengeTtl",
        update_challenge_ttl => "updateChallengeTtl",
        get_automatic_https_rewrites => "getAutomaticHttpsRewrites",
        update_automatic_https_rewrites => "updateAutomaticHttpsRewrites",
        get_true_client_ip => "getTrueClientIp",
        update_true_client_ip => "updateTrueClientIp",
        get_always_use_https => "getAlwaysUseHttps",
        update_always_use_https => "updateAlwaysUseHttps",
        get_image_size_optimization => "getImageSizeOptimization",
        update_image_size_optimization => "updateImageSizeOptimization",
        get_script_load_optimization => "getScriptLoadOptimization",
        update_script_load_optimization => "updateScriptLoadOptimization",
        get_image_load_optimization => "getImageLoadOptimization",
        update_image_load_optimization => "updateImageLoadOptimization",
        get_minify => "getMinify",
        update_minify => "updateMinify",
        get_min_tls_version => "getMinTlsVersion",
        update_min_tls_version => "updateMinTlsVersion",
        get_ip_geolocation => "getIpGeolocation",
        update_ip_geolocation => "updateIpGeolocation",
        get_server_side_exclude => "getServerSideExclude",
        update_server_side_exclude => "updateServerSideExclude",
        get_security_header => "getSecurityHeader",
        update_security_header => "updateSecurityHeader",
        get_mobile_redirect => "getMobileRedirect",
        update_mobile_redirect => "updateMobileRedirect",
        get_prefetch_preload => "getPrefetchPreload",
        update_prefetch_preload => "updatePrefetchPreload",
        get_http2 => "getHttp2",
        update_http2 => "updateHttp2",
        get_http3 => "getHttp3",
        update_http3 => "updateHttp3",
        get_ipv6 => "getIpv6",
        update_ipv6 => "updateIpv6",
        get_web_sockets => "getWebSockets",
        update_web_sockets => "updateWebSockets",
        get_pseudo_ipv4 => "getPseudoIpv4",
        update_pseudo_ipv4 => "updatePseudoIpv4",
        get_response_buffering => "getResponseBuffering",
        update_response_buffering => "updateResponseBuffering",
        get_hotlink_protection => "getHotlinkProtection",
        update_hotlink_protection => "updateHotlinkProtection",
        get_max_upload => "getMaxUpload",
        update_max_upload => "updateMaxUpload",
        get_tls_client_auth => "getTlsClientAuth",
        update_tls_client_auth => "updateTlsClientAuth",
        get_browser_check => "getBrowserCheck",
        update_browser_check => "updateBrowserCheck",
        get_enable_error_pages_on => "getEnableErrorPagesOn",
        update_enable_error_pages_on => "updateEnableErrorPagesOn",
        get_web_application_firewall => "getWebApplicationFirewall",
        update_web_application_firewall => "updateWebApplicationFirewall",
        get_ciphers => "getCiphers",
        update_ciphers => "updateCiphers",
    }
}
