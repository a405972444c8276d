//! Shared test helpers for Quivr API integration tests
//!
//! Provides wiremock-based mock server setup for the knowledge endpoints and
//! a small multipart parser for asserting on captured request bodies.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use quivrsync_api::client::QuivrClient;

/// Starts a mock server and returns it together with a client pointing at it.
pub async fn setup_mock() -> (MockServer, QuivrClient) {
    let server = MockServer::start().await;
    let client = QuivrClient::with_base_url("test-api-key", server.uri());
    (server, client)
}

/// Mounts `GET /knowledge/files` returning the given items.
pub async fn mount_listing(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/knowledge/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(server)
        .await;
}

/// Mounts `POST /knowledge/` answering 200 with the given item id.
pub async fn mount_knowledge_post(server: &MockServer, response_id: &str) {
    Mock::given(method("POST"))
        .and(path("/knowledge/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": response_id })),
        )
        .mount(server)
        .await;
}

// ============================================================================
// Multipart request inspection
// ============================================================================

/// One decoded part of a `multipart/form-data` body.
pub struct MultipartPart {
    /// Raw part headers, joined as one string
    pub headers: String,
    /// Exact part content bytes
    pub body: Vec<u8>,
}

impl MultipartPart {
    /// Content type declared in the part headers, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-type") {
                Some(value.trim())
            } else {
                None
            }
        })
    }
}

/// Finds the form field with the given name in a captured multipart body.
///
/// `content_type` is the request's `Content-Type` header value (carries the
/// boundary); `body` is the raw request body.
pub fn find_part(content_type: &str, body: &[u8], name: &str) -> Option<MultipartPart> {
    let boundary = content_type.split("boundary=").nth(1)?.trim();
    let delimiter = format!("--{boundary}");
    let needle = format!("name=\"{name}\"");

    for segment in split_bytes(body, delimiter.as_bytes()) {
        let segment = segment.strip_prefix(b"\r\n".as_slice()).unwrap_or(segment);
        if segment.starts_with(b"--") || segment.is_empty() {
            continue;
        }

        let header_end = find_subslice(segment, b"\r\n\r\n")?;
        let headers = String::from_utf8_lossy(&segment[..header_end]).to_string();
        if !headers.contains(&needle) {
            continue;
        }

        // Part content runs up to the \r\n preceding the next boundary.
        let content = &segment[header_end + 4..];
        let content = content.strip_suffix(b"\r\n".as_slice()).unwrap_or(content);
        return Some(MultipartPart {
            headers,
            body: content.to_vec(),
        });
    }
    None
}

/// Splits `haystack` on every occurrence of `needle`.
fn split_bytes<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut segments = Vec::new();
    let mut start = 0;
    while let Some(pos) = find_subslice(&haystack[start..], needle) {
        segments.push(&haystack[start..start + pos]);
        start += pos + needle.len();
    }
    segments.push(&haystack[start..]);
    segments
}

/// Returns the offset of the first occurrence of `needle` in `haystack`.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
