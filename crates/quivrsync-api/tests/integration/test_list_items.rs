//! Integration tests for the listing endpoint
//!
//! Verifies deserialization, authentication headers, and the explicit
//! failure behavior: a non-200 listing is an error, never an empty result.

use std::sync::Arc;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quivrsync_api::client::QuivrClient;
use quivrsync_api::store::QuivrKnowledgeStore;
use quivrsync_api::ApiError;
use quivrsync_core::ports::knowledge_store::KnowledgeStore;

use crate::common;

#[tokio::test]
async fn test_list_items_returns_items() {
    let (server, client) = common::setup_mock().await;

    common::mount_listing(
        &server,
        serde_json::json!([
            {
                "id": "folder-001",
                "file_name": "obsidian-sync",
                "is_folder": true,
                "parent_id": null
            },
            {
                "id": "file-001",
                "file_name": "notes.md",
                "is_folder": false,
                "parent_id": "folder-001"
            }
        ]),
    )
    .await;

    let items = client.list_items().await.expect("listing failed");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].file_name, "obsidian-sync");
    assert!(items[0].is_folder);
    assert_eq!(items[1].parent_id.as_deref(), Some("folder-001"));
}

#[tokio::test]
async fn test_list_items_sends_bearer_and_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/knowledge/files"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = QuivrClient::with_base_url("test-api-key", server.uri());
    client.list_items().await.expect("listing failed");
}

#[tokio::test]
async fn test_empty_knowledge_base_is_ok() {
    let (server, client) = common::setup_mock().await;
    common::mount_listing(&server, serde_json::json!([])).await;

    let items = client.list_items().await.expect("listing failed");
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_listing_failure_is_an_error_not_empty() {
    let (server, client) = common::setup_mock().await;

    Mock::given(method("GET"))
        .and(path("/knowledge/files"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = client.list_items().await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_listing_body_is_invalid_response() {
    let (server, client) = common::setup_mock().await;

    Mock::given(method("GET"))
        .and(path("/knowledge/files"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_items().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_store_adapter_lists_through_the_port() {
    let (server, client) = common::setup_mock().await;
    common::mount_listing(
        &server,
        serde_json::json!([
            { "id": "a", "file_name": "x.md", "is_folder": false, "parent_id": null }
        ]),
    )
    .await;

    let store: Arc<dyn KnowledgeStore> = Arc::new(QuivrKnowledgeStore::new(client));
    let items = store.list_items().await.expect("port listing failed");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "a");
}
