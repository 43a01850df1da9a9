//
//  ibm-cis
//  services/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook destinations for alert policies.

use crate::api::schema::{Identity, OperationSpec, ServiceSpec};

const WEBHOOK_FIELDS: &[&str] = &["name", "url", "secret"];

pub static SPEC: ServiceSpec = ServiceSpec {
    name: "webhooks",
    title: "WebhooksV1",
    version: "v1",
    summary: "Alert webhook destinations",
    identity: &[Identity::Crn],
    operations: &[
        OperationSpec::get("getWebhooks", "/v1/{crn}/alerting/destinations/webhooks"),
        OperationSpec::post("createAlertWebhook", "/v1/{crn}/alerting/destinations/webhooks")
            .json(WEBHOOK_FIELDS),
        OperationSpec::get("getWebhook", "/v1/{crn}/alerting/destinations/webhooks/{webhook_id}")
            .params(&["webhookId"]),
        OperationSpec::put("updateAlertWebhook", "/v1/{crn}/alerting/destinations/webhooks/{webhook_id}")
            .params(&["webhookId"])
            .json(WEBHOOK_FIELDS),
        OperationSpec::delete("deleteWebhook", "/v1/{crn}/alerting/destinations/webhooks/{webhook_id}")
            .params(&["webhookId"]),
    ],
};

cis_service! {
    /// Alert webhooks of a CIS instance.
    pub struct WebhooksV1 for SPEC {
        get_webhooks => "getWebhooks",
        create_alert_webhook => "createAlertWebhook",
        get_webhook => "getWebhook",
        update_alert_webhook => "updateAlertWebhook",
        delete_webhook => "deleteWebhook",
    }
}
