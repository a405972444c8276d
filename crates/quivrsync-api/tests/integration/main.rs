//! Integration tests for the Quivr API client
//!
//! All tests run against a wiremock-based mock server; no real network
//! access is required.

mod common;
mod test_create_folder;
mod test_list_items;
mod test_upload;
