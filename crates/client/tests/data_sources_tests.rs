//! Data source endpoint tests.
//!
//! This module tests the Mode data sources API:
//! - Listing data sources
//! - Fetching and refreshing one data source
//!
//! # Invariants
//! - Numeric attributes accept both JSON numbers and numeric strings

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_list_data_sources() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("data_sources")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("data_sources/list_data_sources.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sources = client.list_data_sources().await.unwrap();

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].id(), Some(12));
    assert_eq!(sources[0].adapter(), Some("jdbc:postgresql"));
    assert_eq!(sources[0].data().port.as_deref(), Some("5432"));
    assert_eq!(sources[1].id(), Some(13));
    assert_eq!(sources[1].data().port.as_deref(), Some("443"));
    assert_eq!(sources[1].data().warehouse.as_deref(), Some("COMPUTE_WH"));
}

#[tokio::test]
async fn test_get_and_refresh_data_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("data_sources/ds0001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "ds0001",
            "id": 12,
            "name": "warehouse",
            "asleep": false
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(org_path("data_sources/ds0001")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "ds0001",
            "id": 12,
            "name": "warehouse",
            "asleep": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut source = client.get_data_source("ds0001").await.unwrap();
    assert_eq!(source.name(), Some("warehouse"));
    assert_eq!(source.data().asleep, Some(false));

    source.refresh().await.unwrap();
    assert_eq!(source.data().asleep, Some(true));
}

#[tokio::test]
async fn test_get_data_source_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("data_sources/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "Data source not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_data_source("missing").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not_found: Data source not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_data_sources_with_null_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("data_sources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": {
                "data_sources": [
                    { "token": "ds1", "id": 12, "_links": null },
                    { "token": "ds2", "id": "13" }
                ]
            },
            "_links": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sources = client.list_data_sources().await.unwrap();

    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].id(), Some(12));
    assert_eq!(sources[1].id(), Some(13));
}
