//
//  ibm-cis
//  tests/http_transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Facades talking HTTP to a mock CIS endpoint.

use std::sync::Arc;

use ibm_cis::api::{CisError, Params, ServiceOptions};
use ibm_cis::auth::{BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator, NoAuthAuthenticator};
use ibm_cis::services::alerts::AlertsV1;
use ibm_cis::services::dns_record_bulk::DnsRecordBulkV1;
use ibm_cis::services::dns_records::DnsRecordsV1;
use ibm_cis::services::edge_functions::EdgeFunctionsApiV1;
use mockito::Matcher;
use serde_json::json;

const CRN: &str = "crn:v1:test";

fn dns_records(url: &str) -> DnsRecordsV1 {
    DnsRecordsV1::new(
        ServiceOptions::new()
            .service_url(url)
            .crn(CRN)
            .zone_identifier("zone-1")
            .authenticator(Arc::new(BearerTokenAuthenticator::new("token-1").unwrap())),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_sends_bearer_token_and_sdk_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/crn:v1:test/zones/zone-1/dns_records/rec-1")
        .match_header("authorization", "Bearer token-1")
        .match_header("accept", "application/json")
        .match_header(
            "x-ibmcloud-sdk-analytics",
            "service_name=dns_records;service_version=V1;operation_id=getDnsRecord",
        )
        .match_header("user-agent", Matcher::Regex("^cis/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success": true, "errors": [], "messages": [], "result": {"id": "rec-1", "type": "A"}}"#)
        .create_async()
        .await;

    let response = dns_records(&server.url())
        .get_dns_record(Params::new().set("dnsrecordIdentifier", "rec-1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert!(response.api_success());
    assert_eq!(response.result["result"]["id"], "rec-1");
}

#[tokio::test]
async fn test_query_and_json_body() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/v1/crn:v1:test/zones/zone-1/dns_records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "A".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_body(r#"{"success": true, "result": []}"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/v1/crn:v1:test/zones/zone-1/dns_records")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "www", "type": "A", "content": "192.0.2.1", "ttl": 300})))
        .with_body(r#"{"success": true, "result": {"id": "new"}}"#)
        .create_async()
        .await;

    let service = dns_records(&server.url());
    service
        .list_all_dns_records(Params::new().set("type", "A").set("page", 2))
        .await
        .unwrap();
    service
        .create_dns_record(
            Params::new()
                .set("name", "www")
                .set("type", "A")
                .set("content", "192.0.2.1")
                .set("ttl", 300),
        )
        .await
        .unwrap();

    list.assert_async().await;
    create.assert_async().await;
}

#[tokio::test]
async fn test_error_status_uses_first_error_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/crn:v1:test/zones/zone-1/dns_records/missing")
        .with_status(404)
        .with_body(r#"{"success": false, "errors": [{"code": 81044, "message": "Record not found"}], "result": null}"#)
        .create_async()
        .await;

    let err = dns_records(&server.url())
        .get_dns_record(Params::new().set("dnsrecordIdentifier", "missing"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP 404: Record not found");
}

#[tokio::test]
async fn test_error_status_without_body_uses_reason() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = dns_records(&server.url())
        .delete_dns_record(Params::new().set("dnsrecordIdentifier", "rec-1"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_success_false_is_returned() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/crn:v1:test/alerting/policies")
        .with_body(r#"{"success": false, "errors": [{"message": "partial"}], "messages": [], "result": []}"#)
        .create_async()
        .await;

    let alerts = AlertsV1::new(
        ServiceOptions::new()
            .service_url(server.url())
            .crn(CRN)
            .authenticator(Arc::new(NoAuthAuthenticator)),
    )
    .unwrap();

    let response = alerts.get_alert_policies(Params::new()).await.unwrap();
    assert!(!response.api_success());
    assert_eq!(
        response.envelope::<serde_json::Value>().unwrap().first_error().as_deref(),
        Some("partial")
    );
}

#[tokio::test]
async fn test_validation_errors_send_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

    let err = dns_records(&server.url())
        .get_dns_record(Params::new())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, CisError::MissingParameters(ref names) if names == &["dnsrecordIdentifier"]));
}

#[tokio::test]
async fn test_raw_javascript_body_with_basic_auth() {
    let mut server = mockito::Server::new_async().await;
    let script = "addEventListener('fetch', e => e.respondWith(fetch(e.request)))";
    let mock = server
        .mock("PUT", "/v1/crn:v1:test/workers/scripts/example")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .match_header("content-type", "application/javascript")
        .match_body(script)
        .with_body(r#"{"success": true, "result": {"id": "example"}}"#)
        .create_async()
        .await;

    let edge = EdgeFunctionsApiV1::new(
        ServiceOptions::new()
            .service_url(server.url())
            .crn(CRN)
            .zone_identifier("zone-1")
            .authenticator(Arc::new(BasicAuthenticator::new("user", "pass").unwrap())),
    )
    .unwrap();

    edge.update_edge_functions_action(
        Params::new()
            .set("scriptName", "example")
            .set("edgeFunctionsAction", script),
    )
    .await
    .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_multipart_upload_and_text_export() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/v1/crn:v1:test/zones/zone-1/dns_records_bulk")
        .match_header("content-type", Matcher::Regex("^multipart/form-data; boundary=".to_string()))
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex("www 300 IN A 192.0.2.1".to_string()),
        ]))
        .with_body(r#"{"success": true, "result": {"recs_added": 1, "total_records_parsed": 1}}"#)
        .create_async()
        .await;
    let export = server
        .mock("GET", "/v1/crn:v1:test/zones/zone-1/dns_records_bulk")
        .with_header("content-type", "text/plain")
        .with_body("www 300 IN A 192.0.2.1\n")
        .create_async()
        .await;

    let bulk = DnsRecordBulkV1::new(
        ServiceOptions::new()
            .service_url(server.url())
            .crn(CRN)
            .zone_identifier("zone-1")
            .authenticator(Arc::new(NoAuthAuthenticator)),
    )
    .unwrap();

    let response = bulk
        .post_dns_records_bulk(
            Params::new()
                .set("file", "www 300 IN A 192.0.2.1\n")
                .header("Content-Type", "text/plain"),
        )
        .await
        .unwrap();
    assert_eq!(response.result["result"]["recs_added"], 1);

    let response = bulk.get_dns_records_bulk(Params::new()).await.unwrap();
    assert_eq!(response.result, json!("www 300 IN A 192.0.2.1\n"));

    upload.assert_async().await;
    export.assert_async().await;
}

#[tokio::test]
async fn test_iam_token_is_fetched_once_and_reused() {
    let mut server = mockito::Server::new_async().await;
    let token = server
        .mock("POST", "/identity/token")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "urn:ibm:params:oauth:grant-type:apikey".into()),
            Matcher::UrlEncoded("apikey".into(), "my-key".into()),
        ]))
        .with_body(r#"{"access_token": "iam-token", "refresh_token": "r", "token_type": "Bearer", "expires_in": 3600, "expiration": 4102444800}"#)
        .expect(1)
        .create_async()
        .await;
    let api = server
        .mock("GET", "/v1/crn:v1:test/alerting/policies")
        .match_header("authorization", "Bearer iam-token")
        .with_body(r#"{"success": true, "result": []}"#)
        .expect(2)
        .create_async()
        .await;

    let iam = IamAuthenticator::new("my-key").unwrap().with_url(server.url());
    let alerts = AlertsV1::new(
        ServiceOptions::new()
            .service_url(server.url())
            .crn(CRN)
            .authenticator(Arc::new(iam)),
    )
    .unwrap();

    alerts.get_alert_policies(Params::new()).await.unwrap();
    alerts.get_alert_policies(Params::new()).await.unwrap();

    token.assert_async().await;
    api.assert_async().await;
}

#[tokio::test]
async fn test_iam_failure_is_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/identity/token")
        .with_status(400)
        .with_body(r#"{"errorCode": "BXNIM0415E", "errorMessage": "Provided API key could not be found"}"#)
        .create_async()
        .await;

    let iam = IamAuthenticator::new("bad-key").unwrap().with_url(server.url());
    let alerts = AlertsV1::new(
        ServiceOptions::new()
            .service_url(server.url())
            .crn(CRN)
            .authenticator(Arc::new(iam)),
    )
    .unwrap();

    let err = alerts.get_alert_policies(Params::new()).await.unwrap_err();
    assert!(matches!(err, CisError::Authentication(_)));
    assert!(err.to_string().contains("Provided API key could not be found"));
}
