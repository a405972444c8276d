//! Knowledge-base entities and request payloads
//!
//! These types mirror the Quivr REST API wire format. `RemoteItem` is what
//! the listing endpoint returns; `KnowledgeData` is the JSON metadata payload
//! accompanying every create/upload request, independent of the raw file
//! bytes; `UploadRequest` pairs the metadata with the bytes and content type
//! for a single upload.

use serde::{Deserialize, Serialize};

/// MIME type used for markdown documents.
pub const CONTENT_TYPE_MARKDOWN: &str = "text/markdown";

/// Fallback MIME type for anything that is not markdown.
///
/// The upstream service only distinguishes these two content types; this is
/// a placeholder mapping, not real MIME detection.
pub const CONTENT_TYPE_FALLBACK: &str = "application/pdf";

/// A file or folder record as known to the remote knowledge service.
///
/// Read-only to this system except via creation requests: the service
/// assigns the `id` when a folder is created or a file uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteItem {
    /// Service-assigned identifier
    pub id: String,
    /// Item name (file or folder name)
    pub file_name: String,
    /// Whether this item is a folder
    pub is_folder: bool,
    /// Parent folder id (None for top-level items)
    pub parent_id: Option<String>,
}

/// The JSON metadata payload sent as the `knowledge_data` multipart field
/// of every create-folder and upload call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnowledgeData {
    /// Destination folder id (None to create at the top level)
    pub parent_id: Option<String>,
    /// Name the item will have in the knowledge base
    pub file_name: String,
    /// Whether the request creates a folder (no file bytes) or a file
    pub is_folder: bool,
}

impl KnowledgeData {
    /// Metadata for creating a top-level folder with the given name.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            parent_id: None,
            file_name: name.into(),
            is_folder: true,
        }
    }

    /// Metadata for uploading a file into the given parent folder.
    pub fn file(parent_id: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            file_name: file_name.into(),
            is_folder: false,
        }
    }
}

/// A single file upload: metadata plus raw bytes and content type.
///
/// Ephemeral - constructed per upload, never persisted.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// The `knowledge_data` metadata payload
    pub data: KnowledgeData,
    /// Raw file content
    pub bytes: Vec<u8>,
    /// MIME type for the `file` multipart part
    pub content_type: &'static str,
}

impl UploadRequest {
    /// Builds an upload request for a document, picking the content type
    /// from the file name extension.
    pub fn new(parent_id: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name);
        Self {
            data: KnowledgeData::file(parent_id, file_name),
            bytes,
            content_type,
        }
    }
}

/// Maps a file name to the content type the service expects.
///
/// `.md` documents are `text/markdown`; everything else falls back to
/// `application/pdf`.
pub fn content_type_for(file_name: &str) -> &'static str {
    if file_name.to_ascii_lowercase().ends_with(".md") {
        CONTENT_TYPE_MARKDOWN
    } else {
        CONTENT_TYPE_FALLBACK
    }
}
