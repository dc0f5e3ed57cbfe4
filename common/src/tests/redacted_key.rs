use crate::RedactedApiKey;

/// **VALUE**: Verifies the key value never shows up in Debug or Display output.
///
/// **WHY THIS MATTERS**: `ServerConfig` is logged at debug level. A derived Debug on the
/// key would print the dogbin credential into the log stream.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with `#[derive(Debug)]`.
#[test]
fn given_api_key_when_formatted_then_value_is_redacted() {
    // GIVEN: A key with a recognizable value
    let key = RedactedApiKey::new(String::from("super-secret-key"));

    // WHEN: Formatting with Debug and Display
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret-key"));
    assert!(!display.contains("super-secret-key"));
    assert_eq!(key.as_str(), "super-secret-key");
    assert_eq!(key.len(), 16);
}

/// **VALUE**: Verifies key files and env values are trimmed and blank values mean "no key".
///
/// **BUG THIS CATCHES**: Would catch a trailing newline from `~/.inu/key` being sent in the
/// header, or an empty `DOGBIN_KEY` producing an empty header.
#[test]
fn given_raw_input_when_from_input_then_trims_and_rejects_blank() {
    let key = RedactedApiKey::from_input("  abc123\n").expect("non-blank input yields a key");
    assert_eq!(key.as_str(), "abc123");

    assert!(RedactedApiKey::from_input("").is_none());
    assert!(RedactedApiKey::from_input(" \n\t").is_none());
}
