//! Integration tests for file upload
//!
//! Includes the round-trip property: the multipart request carries a
//! `knowledge_data` field that deserializes back to the request metadata and
//! a `file` part that byte-for-byte equals the document content.

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use quivrsync_api::ApiError;
use quivrsync_core::domain::knowledge::{KnowledgeData, UploadRequest};

use crate::common;

#[tokio::test]
async fn test_upload_round_trip() {
    let (server, client) = common::setup_mock().await;
    common::mount_knowledge_post(&server, "file-new").await;

    let request = UploadRequest::new("folder-001", "notes.md", b"# Hello".to_vec());
    let item = client.upload_file(&request).await.expect("upload failed");

    assert_eq!(item.id, "file-new");
    assert_eq!(item.file_name, "notes.md");
    assert!(!item.is_folder);
    assert_eq!(item.parent_id.as_deref(), Some("folder-001"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let captured = &requests[0];

    let content_type = captured
        .headers
        .get("content-type")
        .expect("missing content-type")
        .to_str()
        .unwrap();

    let data_part = common::find_part(content_type, &captured.body, "knowledge_data")
        .expect("knowledge_data field missing");
    let data: KnowledgeData = serde_json::from_slice(&data_part.body).unwrap();
    assert_eq!(data.parent_id.as_deref(), Some("folder-001"));
    assert_eq!(data.file_name, "notes.md");
    assert!(!data.is_folder);

    let file_part =
        common::find_part(content_type, &captured.body, "file").expect("file part missing");
    assert_eq!(file_part.body, b"# Hello");
    assert_eq!(file_part.content_type(), Some("text/markdown"));
}

#[tokio::test]
async fn test_upload_non_markdown_uses_fallback_content_type() {
    let (server, client) = common::setup_mock().await;
    common::mount_knowledge_post(&server, "file-new").await;

    let request = UploadRequest::new("folder-001", "scan.pdf", vec![0x25, 0x50, 0x44, 0x46]);
    client.upload_file(&request).await.expect("upload failed");

    let requests = server.received_requests().await.unwrap();
    let captured = &requests[0];
    let content_type = captured
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();

    let file_part =
        common::find_part(content_type, &captured.body, "file").expect("file part missing");
    assert_eq!(file_part.content_type(), Some("application/pdf"));
    assert_eq!(file_part.body, vec![0x25, 0x50, 0x44, 0x46]);
}

#[tokio::test]
async fn test_upload_failure_is_an_error() {
    let (server, client) = common::setup_mock().await;

    Mock::given(method("POST"))
        .and(path("/knowledge/"))
        .respond_with(ResponseTemplate::new(413).set_body_string("too large"))
        .mount(&server)
        .await;

    let request = UploadRequest::new("folder-001", "big.md", vec![0u8; 1024]);
    let err = client.upload_file(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status, .. } if status.as_u16() == 413));
}
