//! Paginated collection fetch tests.
//!
//! This module tests the descriptor-driven page walk:
//! - `total_pages = N` yields exactly N requests, concatenated in page order
//! - No descriptor yields exactly one request
//! - Empty or short pages never end the walk early
//! - Missing HAL envelope keys are reported as `MissingField`
//!
//! # Invariants
//! - Every request carries `page=<n>` starting at 1
//! - Item counts never decide completion

mod common;

use common::*;
use proptest::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};

async fn mount_page(
    server: &MockServer,
    resource: &str,
    key: &str,
    page: u32,
    total_pages: u32,
    items: Vec<serde_json::Value>,
) {
    let body = HalPageBuilder::new(key)
        .with_items(items)
        .with_pagination(page, total_pages)
        .build();

    Mock::given(method("GET"))
        .and(path(org_path(resource)))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_three_pages_of_ten_reports() {
    let mock_server = MockServer::start().await;

    for page in 1..=3u32 {
        let start = (page as usize - 1) * 10;
        mount_page(
            &mock_server,
            "spaces/abc/reports",
            "reports",
            page,
            3,
            records("r", start, 10),
        )
        .await;
    }

    let client = client_for(&mock_server);
    let reports = client.list_reports("abc").await.unwrap();

    assert_eq!(reports.len(), 30);
    let tokens: Vec<&str> = reports.iter().map(|r| r.token()).collect();
    let expected: Vec<String> = (0..30).map(|i| format!("r-{i}")).collect();
    assert_eq!(tokens, expected);
}

#[tokio::test]
async fn test_no_descriptor_means_single_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("data_sources")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            HalPageBuilder::new("data_sources")
                .with_items(records("ds", 0, 50))
                .build(),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let sources = client.list_data_sources().await.unwrap();
    assert_eq!(sources.len(), 50);
}

#[tokio::test]
async fn test_empty_middle_page_does_not_stop_walk() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "definitions", "definitions", 1, 3, records("d", 0, 2)).await;
    mount_page(&mock_server, "definitions", "definitions", 2, 3, Vec::new()).await;
    mount_page(&mock_server, "definitions", "definitions", 3, 3, records("d", 2, 1)).await;

    let client = client_for(&mock_server);
    let definitions = client.list_definitions().await.unwrap();

    let tokens: Vec<&str> = definitions.iter().map(|d| d.token()).collect();
    assert_eq!(tokens, vec!["d-0", "d-1", "d-2"]);
}

#[tokio::test]
async fn test_last_page_descriptor_ends_walk() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "memberships",
        "memberships",
        1,
        2,
        membership_records(0, 3),
    )
    .await;
    mount_page(
        &mock_server,
        "memberships",
        "memberships",
        2,
        2,
        membership_records(3, 1),
    )
    .await;

    let client = client_for(&mock_server);
    let memberships = client.list_memberships().await.unwrap();

    assert_eq!(memberships.len(), 4);
    assert_eq!(memberships[3].token(), "m-3");
}

#[tokio::test]
async fn test_missing_embedded_is_missing_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("spaces")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "page": 1, "total_pages": 1 }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_spaces(mode_client::SpaceFilter::Custom)
        .await
        .unwrap_err();

    match err {
        ClientError::MissingField { field, .. } => assert_eq!(field, "_embedded"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_collection_key_is_missing_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(org_path("spaces")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_embedded": { "reports": [] }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .list_spaces(mode_client::SpaceFilter::Custom)
        .await
        .unwrap_err();

    assert!(err.is_shape_error());
    assert!(matches!(
        err,
        ClientError::MissingField { ref field, .. } if field == "_embedded.spaces"
    ));
}

#[tokio::test]
async fn test_error_on_later_page_is_returned() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "spaces/abc/reports", "reports", 1, 2, records("r", 0, 10)).await;
    Mock::given(method("GET"))
        .and(path(org_path("spaces/abc/reports")))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_reports("abc").await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_n_pages_means_n_requests(sizes in mode_client::testing::generators::strategies::page_sizes(5, 4)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let mock_server = MockServer::start().await;
            let total = sizes.len() as u32;

            let mut start = 0;
            for (index, size) in sizes.iter().enumerate() {
                mount_page(
                    &mock_server,
                    "spaces/abc/reports",
                    "reports",
                    index as u32 + 1,
                    total,
                    records("r", start, *size),
                )
                .await;
                start += size;
            }

            let client = client_for(&mock_server);
            let reports = client.list_reports("abc").await.unwrap();

            let tokens: Vec<String> = reports.iter().map(|r| r.token().to_string()).collect();
            let expected: Vec<String> = (0..start).map(|i| format!("r-{i}")).collect();
            assert_eq!(tokens, expected);

            mock_server.verify().await;
        });
    }
}
