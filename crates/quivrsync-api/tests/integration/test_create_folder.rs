//! Integration tests for folder creation

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use quivrsync_api::ApiError;
use quivrsync_core::domain::knowledge::KnowledgeData;

use crate::common;

#[tokio::test]
async fn test_create_folder_returns_id() {
    let (server, client) = common::setup_mock().await;
    common::mount_knowledge_post(&server, "folder-new").await;

    let id = client
        .create_folder("obsidian-sync")
        .await
        .expect("create failed");
    assert_eq!(id, "folder-new");
}

#[tokio::test]
async fn test_create_folder_sends_knowledge_data_field() {
    let (server, client) = common::setup_mock().await;
    common::mount_knowledge_post(&server, "folder-new").await;

    client
        .create_folder("obsidian-sync")
        .await
        .expect("create failed");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .expect("missing content-type")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let part = common::find_part(content_type, &request.body, "knowledge_data")
        .expect("knowledge_data field missing");
    let data: KnowledgeData = serde_json::from_slice(&part.body).unwrap();
    assert_eq!(data.file_name, "obsidian-sync");
    assert!(data.is_folder);
    assert!(data.parent_id.is_none());

    // A folder creation carries no file part.
    assert!(common::find_part(content_type, &request.body, "file").is_none());
}

#[tokio::test]
async fn test_create_folder_failure_is_an_error() {
    let (server, client) = common::setup_mock().await;

    Mock::given(method("POST"))
        .and(path("/knowledge/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = client.create_folder("obsidian-sync").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 403));
}
