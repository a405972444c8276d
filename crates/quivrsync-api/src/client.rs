//! Quivr API client
//!
//! Provides a typed HTTP client for the Quivr knowledge-base REST API.
//! Handles authentication headers, multipart body construction, and endpoint
//! paths.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quivrsync_api::client::QuivrClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = QuivrClient::new("api-key-here");
//! let items = client.list_items().await?;
//! println!("{} items in the knowledge base", items.len());
//! # Ok(())
//! # }
//! ```

use quivrsync_core::domain::knowledge::{KnowledgeData, RemoteItem, UploadRequest};
use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::ApiError;

/// Base URL for the Quivr API
const QUIVR_BASE_URL: &str = "https://api.quivr.app";

/// Path of the listing endpoint
const LIST_PATH: &str = "/knowledge/files";

/// Path of the create/upload endpoint
const KNOWLEDGE_PATH: &str = "/knowledge/";

// ============================================================================
// Quivr API response types
// ============================================================================

/// Response body of a successful create/upload call.
///
/// The service returns more fields, but `id` is the only one this system
/// relies on.
#[derive(Debug, Deserialize)]
struct CreatedResponse {
    /// Service-assigned id of the created item
    id: String,
}

// ============================================================================
// QuivrClient
// ============================================================================

/// HTTP client for Quivr knowledge-base API calls
///
/// Wraps `reqwest::Client` with bearer authentication and base URL
/// construction. All operations return explicit `Result`s: a non-success
/// status becomes [`ApiError::Status`] carrying the response body, so a
/// failed listing is never mistaken for an empty knowledge base.
pub struct QuivrClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Bearer token drawn from the configured API key
    api_key: String,
}

impl QuivrClient {
    /// Creates a new QuivrClient with the given API key
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the knowledge service
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: QUIVR_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Creates a new QuivrClient with a custom base URL (useful for testing)
    ///
    /// # Arguments
    /// * `api_key` - Bearer token for the knowledge service
    /// * `base_url` - Custom base URL for API requests
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Returns a reference to the current API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the `Authorization` and
    /// `accept` headers every endpoint expects.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, ...)
    /// * `path` - API path relative to base URL (e.g., "/knowledge/files")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json")
    }

    /// Lists every item known to the knowledge base
    ///
    /// Makes `GET /knowledge/files` and deserializes the JSON array body.
    ///
    /// # Returns
    /// All file and folder records, in service order.
    pub async fn list_items(&self) -> Result<Vec<RemoteItem>, ApiError> {
        debug!("listing knowledge items");

        let response = self.request(Method::GET, LIST_PATH).send().await?;
        let response = check_status(response).await?;

        let items: Vec<RemoteItem> = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("listing body: {e}")))?;

        debug!(count = items.len(), "listing complete");
        Ok(items)
    }

    /// Creates a top-level folder in the knowledge base
    ///
    /// Makes `POST /knowledge/` with a multipart body whose `knowledge_data`
    /// field is the JSON-encoded
    /// `{parent_id: null, file_name: name, is_folder: true}`.
    ///
    /// # Arguments
    /// * `name` - The folder name
    ///
    /// # Returns
    /// The service-assigned id of the created folder.
    pub async fn create_folder(&self, name: &str) -> Result<String, ApiError> {
        debug!(name, "creating folder");

        let data = KnowledgeData::folder(name);
        let form = multipart::Form::new().text("knowledge_data", encode_knowledge_data(&data)?);

        let response = self
            .request(Method::POST, KNOWLEDGE_PATH)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("create-folder body: {e}")))?;

        debug!(id = %created.id, "folder created");
        Ok(created.id)
    }

    /// Uploads a single file into the knowledge base
    ///
    /// Makes `POST /knowledge/` with a multipart body carrying the
    /// `knowledge_data` metadata field plus a `file` part with the raw bytes
    /// and content type.
    ///
    /// # Arguments
    /// * `request` - Metadata, bytes, and content type for the upload
    ///
    /// # Returns
    /// The created item; the id comes from the response body, the remaining
    /// fields echo the request metadata.
    pub async fn upload_file(&self, request: &UploadRequest) -> Result<RemoteItem, ApiError> {
        debug!(
            file_name = %request.data.file_name,
            bytes = request.bytes.len(),
            content_type = request.content_type,
            "uploading file"
        );

        let file_part = multipart::Part::bytes(request.bytes.clone())
            .file_name(request.data.file_name.clone())
            .mime_str(request.content_type)?;

        let form = multipart::Form::new()
            .text("knowledge_data", encode_knowledge_data(&request.data)?)
            .part("file", file_part);

        let response = self
            .request(Method::POST, KNOWLEDGE_PATH)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;

        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("upload body: {e}")))?;

        debug!(id = %created.id, "upload complete");
        Ok(RemoteItem {
            id: created.id,
            file_name: request.data.file_name.clone(),
            is_folder: false,
            parent_id: request.data.parent_id.clone(),
        })
    }
}

/// Serializes a `knowledge_data` payload for a multipart text field.
fn encode_knowledge_data(data: &KnowledgeData) -> Result<String, ApiError> {
    serde_json::to_string(data)
        .map_err(|e| ApiError::InvalidResponse(format!("knowledge_data encoding: {e}")))
}

/// Converts a non-success response into [`ApiError::Status`], keeping the
/// body for the error notice.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
