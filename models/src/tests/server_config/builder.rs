use crate::{DOGBIN_SERVER, ModelError, ServerConfig, ServerConfigBuilder};

/// **VALUE**: Verifies that builder validation rejects a missing server.
///
/// **WHY THIS MATTERS**: Every request URL is derived from the server. A config without
/// one would only fail later, deep inside URL parsing, with a less useful message.
///
/// **BUG THIS CATCHES**: Would catch if the required-field check is removed.
#[test]
fn given_missing_server_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a server
    let builder = ServerConfigBuilder::default().with_api_key("abc");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the field
    match result.unwrap_err() {
        ModelError::Validation { field, message, .. } => {
            assert_eq!(field, "server");
            assert_eq!(message, "Server is required");
        }
    }
}

/// **VALUE**: Verifies that a whitespace-only server is rejected.
///
/// **BUG THIS CATCHES**: Would catch an empty `~/.inu/server` file producing a config
/// that points at `https://`.
#[test]
fn given_blank_server_when_building_then_returns_validation_error() {
    let result = ServerConfig::builder().with_server("  \n").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Server cannot be empty");
        }
    }
}

/// **VALUE**: Verifies the server is trimmed but otherwise kept as typed.
///
/// **WHY THIS MATTERS**: Scheme defaulting belongs to the URL builder. If the builder
/// rewrote the server here, an explicit `http://` would be indistinguishable from none.
#[test]
fn given_server_with_whitespace_when_building_then_trims_only() {
    let config = ServerConfig::builder()
        .with_server(" http://test:90\n")
        .build()
        .expect("valid server");

    assert_eq!(config.server(), "http://test:90");
    assert!(config.api_key().is_none());
}

/// **VALUE**: Verifies blank keys count as no key and real keys are trimmed.
///
/// **BUG THIS CATCHES**: Would catch a blank `DOGBIN_KEY` turning into an empty
/// `X-Api-Key` header on every request.
#[test]
fn given_api_key_input_when_building_then_blank_is_dropped() {
    let without = ServerConfig::builder()
        .with_server(DOGBIN_SERVER)
        .with_api_key("   ")
        .build()
        .expect("valid config");
    assert!(without.api_key().is_none());

    let with = ServerConfig::builder()
        .with_server(DOGBIN_SERVER)
        .with_api_key(" key-123\n")
        .build()
        .expect("valid config");
    assert_eq!(with.api_key().map(|key| key.as_str()), Some("key-123"));
}

#[test]
fn given_presets_when_created_then_point_at_public_instances() {
    assert_eq!(ServerConfig::dogbin().server(), "del.dog");
    assert_eq!(ServerConfig::hastebin().server(), "hastebin.com");
}

/// **VALUE**: Verifies Debug output of a config never prints the key.
#[test]
fn given_config_with_key_when_debug_formatted_then_key_is_redacted() {
    let config = ServerConfig::builder()
        .with_server(DOGBIN_SERVER)
        .with_api_key("very-secret")
        .build()
        .expect("valid config");

    let debug = format!("{config:?}");

    assert!(debug.contains("del.dog"));
    assert!(!debug.contains("very-secret"));
}
