//! Test helpers for paste client integration tests.
//!
//! Every test gets its own wiremock server standing in for a dogbin or
//! hastebin instance.

use paste_core::{PasteClient, ServerConfig};

use wiremock::MockServer;

/// Body dogbin returns for an existing document (server-internal fields included).
pub const DOGBIN_EXISTS_BODY: &str = r#"{"data":"works","document":{"_id":"exists","content":"works","isUrl":false,"owner":{"$oid":"5b20334e5e7034132c431e78"},"version":2,"viewCount":12},"key":"exists"}"#;

/// Body hastebin returns for an existing document.
pub const HASTEBIN_EXISTS_BODY: &str = r#"{"data":"works", "key":"existshaste"}"#;

pub const NOT_FOUND_BODY: &str = r#"{"message":"Document not found."}"#;

pub const DUPLICATE_BODY: &str =
    r#"{"message":"This URL is already in use, please choose a different one"}"#;

/// Test helper: Client bound to the mock server, without an API key.
pub fn client_for(server: &MockServer) -> PasteClient {
    let config = ServerConfig::builder()
        .with_server(server.uri())
        .build()
        .expect("mock server uri is a valid server");
    PasteClient::new(&config).expect("Failed to build paste client")
}

/// Test helper: Client bound to the mock server, sending `api_key`.
pub fn client_with_key(server: &MockServer, api_key: &str) -> PasteClient {
    let config = ServerConfig::builder()
        .with_server(server.uri())
        .with_api_key(api_key)
        .build()
        .expect("mock server uri is a valid server");
    PasteClient::new(&config).expect("Failed to build paste client")
}

/// Test helper: Number of requests the mock server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .len()
}
