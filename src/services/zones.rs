//
//  ibm-cis
//  services/zones.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Zones
//!
//! Zones are the domains managed by a CIS instance. Unlike the
//! zone-scoped resources, this service is bound to the instance CRN only,
//! and the zone id is passed per call as `zoneIdentifier`.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "zones",
    title: "ZonesV1",
    version: "v1",
    summary: "Zones of a CIS instance",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("listZones", "/v1/{crn}/zones").query(&["page", "perPage"]),
        OperationSpec::post("createZone", "/v1/{crn}/zones").json(&["name"]),
        OperationSpec::delete("deleteZone", "/v1/{crn}/zones/{zone_identifier}")
            .params(&["zoneIdentifier"]),
        OperationSpec::get("getZone", "/v1/{crn}/zones/{zone_identifier}").params(&["zoneIdentifier"]),
        OperationSpec::patch("updateZone", "/v1/{crn}/zones/{zone_identifier}")
            .params(&["zoneIdentifier"])
            .json(&["paused"]),
        OperationSpec::put("zoneActivationCheck", "/v1/{crn}/zones/{zone_identifier}/activation_check")
            .params(&["zoneIdentifier"]),
    ],
};

cis_service! {
    /// Zones of a CIS instance.
    pub struct ZonesV1 for SPEC {
        list_zones => "listZones",
        create_zone => "createZone",
        delete_zone => "deleteZone",
        get_zone => "getZone",
        update_zone => "updateZone",
        zone_activation_check => "zoneActivationCheck",
    }
}
