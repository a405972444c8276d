//! quivrsync API - Quivr REST client
//!
//! Provides an async client for the Quivr knowledge-base API:
//! - Listing knowledge items
//! - Creating folders
//! - Uploading files (multipart)
//!
//! ## Modules
//!
//! - [`client`] - The HTTP client wrapping `reqwest`
//! - [`store`] - Adapter implementing the core `KnowledgeStore` port

pub mod client;
pub mod store;

use thiserror::Error;

/// Errors that can occur when communicating with the knowledge service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: reqwest::StatusCode,
        /// Response body, for the error notice
        body: String,
    },

    /// A network-level error occurred (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
