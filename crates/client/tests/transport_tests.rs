//! Transport-level tests: authentication, headers, error mapping.
//!
//! This module tests:
//! - HTTP Basic credentials on every request (including API-root user lookups)
//! - HAL `Accept` header and user agent
//! - Mapping of non-2xx responses and undecodable bodies
//! - Requests with a metrics collector attached
//!
//! # Invariants
//! - No request is retried; one call means one HTTP request
//! - Error messages use Mode's `{id, message}` body when present

mod common;

use common::*;
use mode_client::MetricsCollector;
use serde_json::json;
use wiremock::matchers::{basic_auth, header, header_regex, method, path};

#[tokio::test]
async fn test_requests_carry_basic_auth_and_hal_accept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/4f8e2a7c91d3")))
        .and(basic_auth(TOKEN, PASSWORD))
        .and(header("accept", "application/hal+json"))
        .and(header_regex("user-agent", r"^mode-client/\d+\.\d+\.\d+"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("reports/get_report.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.get_report("4f8e2a7c91d3").await.unwrap();
}

#[tokio::test]
async fn test_user_lookup_carries_basic_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/jane"))
        .and(basic_auth(TOKEN, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/get_user.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.get_user("jane").await.unwrap();
}

#[tokio::test]
async fn test_tokens_are_path_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/acme/reports/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "a/b" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let report = client.get_report("a/b").await.unwrap();
    assert_eq!(report.token(), "a/b");
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_report("r1").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_error_body_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("errors/not_found.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_report("r1").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/acme/reports/r1"));
            assert_eq!(message, "not_found: Report not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_report("r1").await.unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_report("r1").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
    assert!(err.is_shape_error());
}

#[tokio::test]
async fn test_record_without_token_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "No token" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_report("r1").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_requests_with_metrics_collector() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("reports/r1")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ModeClient::builder()
        .base_url(format!("{}/api", mock_server.uri()))
        .organization(ORG)
        .token(TOKEN)
        .password(PASSWORD)
        .metrics(MetricsCollector::new())
        .build()
        .unwrap();

    let err = client.get_report("r1").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}
