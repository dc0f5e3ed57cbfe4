// Unit tests for deriving endpoint URLs from a server specifier

use crate::{PasteClientError, ServerUrls};

use models::{DOGBIN_SERVER, HASTEBIN_SERVER};

/// **VALUE**: Verifies a bare host gets the secure scheme.
///
/// **WHY THIS MATTERS**: Users type `del.dog`, not `https://del.dog`. Defaulting to plain
/// http would send pastes and API keys in the clear.
#[test]
fn given_specifier_without_scheme_when_parsed_then_defaults_to_https() {
    let urls = ServerUrls::parse("test").unwrap();
    assert_eq!(urls.base_url(), "https://test");

    let dogbin = ServerUrls::parse(DOGBIN_SERVER).unwrap();
    assert_eq!(dogbin.base_url(), "https://del.dog");

    let hastebin = ServerUrls::parse(HASTEBIN_SERVER).unwrap();
    assert_eq!(hastebin.base_url(), "https://hastebin.com");
}

/// **VALUE**: Verifies an explicit scheme and port are preserved.
///
/// **BUG THIS CATCHES**: Would catch the scheme default being applied unconditionally, or
/// `test:90` being parsed as a URL with scheme `test`.
#[test]
fn given_specifier_with_scheme_and_port_when_parsed_then_preserved() {
    let urls = ServerUrls::parse("http://test:90").unwrap();
    assert_eq!(urls.base_url(), "http://test:90");

    let plain = ServerUrls::parse("http://test").unwrap();
    assert_eq!(plain.base_url(), "http://test");

    let port_only = ServerUrls::parse("localhost:7777").unwrap();
    assert_eq!(port_only.base_url(), "https://localhost:7777");
}

/// **VALUE**: Verifies the three endpoints hang off the normalized base.
#[test]
fn given_base_when_deriving_endpoints_then_appends_paths() {
    let urls = ServerUrls::parse("http://test:90").unwrap();

    assert_eq!(urls.upload_url().as_str(), "http://test:90/documents");
    assert_eq!(urls.get_url("exists").as_str(), "http://test:90/documents/exists");
    assert_eq!(urls.document_url("exists"), "http://test:90/exists");
}

/// **VALUE**: Verifies a trailing slash or base path does not produce `//` or lose the path.
///
/// **BUG THIS CATCHES**: Would catch naive string concatenation (`https://test//documents`)
/// or `Url::join` replacing the last path segment of a self-hosted instance.
#[test]
fn given_base_with_path_when_deriving_endpoints_then_path_kept() {
    let slash = ServerUrls::parse("https://test/").unwrap();
    assert_eq!(slash.base_url(), "https://test");
    assert_eq!(slash.upload_url().as_str(), "https://test/documents");

    let nested = ServerUrls::parse("http://host/paste/").unwrap();
    assert_eq!(nested.base_url(), "http://host/paste");
    assert_eq!(nested.get_url("abc").as_str(), "http://host/paste/documents/abc");
    assert_eq!(nested.document_url("abc"), "http://host/paste/abc");
}

#[test]
fn given_specifier_with_query_when_parsed_then_query_dropped() {
    let urls = ServerUrls::parse("https://test/?a=b#frag").unwrap();

    assert_eq!(urls.base_url(), "https://test");
}

/// **VALUE**: Verifies slugs stay a single path segment.
///
/// **BUG THIS CATCHES**: Would catch a slug like `a/b` or `x?y` escaping its segment and
/// hitting a different endpoint.
#[test]
fn given_slug_with_reserved_characters_when_deriving_then_percent_encoded() {
    let urls = ServerUrls::parse("test").unwrap();

    assert_eq!(urls.get_url("a/b").as_str(), "https://test/documents/a%2Fb");
    assert_eq!(urls.document_url("x?y"), "https://test/x%3Fy");
}

/// **VALUE**: Verifies unparsable specifiers fail with the specifier in the error.
#[test]
fn given_unparsable_specifier_when_parsed_then_invalid_server_specifier() {
    for specifier in ["", "   ", "http://", "https://exa mple.com", "http://test:notaport"] {
        let result = ServerUrls::parse(specifier);

        match result {
            Err(PasteClientError::InvalidServerSpecifier { specifier: got, .. }) => {
                assert_eq!(got, specifier);
            }
            other => panic!("Expected InvalidServerSpecifier for {specifier:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_non_http_scheme_when_parsed_then_invalid_server_specifier() {
    let result = ServerUrls::parse("ftp://test");

    match result {
        Err(PasteClientError::InvalidServerSpecifier { message, .. }) => {
            assert!(message.contains("ftp"));
        }
        other => panic!("Expected InvalidServerSpecifier, got {other:?}"),
    }
}
