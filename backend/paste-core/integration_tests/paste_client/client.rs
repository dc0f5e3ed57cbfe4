use crate::helpers::{DOGBIN_EXISTS_BODY, HASTEBIN_EXISTS_BODY, client_for, client_with_key};

use paste_core::{PasteClient, PasteClientError, ServerConfig};

use std::net::TcpListener;
use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a configured API key is sent on uploads and reads.
///
/// **WHY THIS MATTERS**: Dogbin ties pastes to the account owning the key. Missing the
/// header on one of the two paths would create anonymous pastes.
#[tokio::test]
async fn given_api_key_when_requests_sent_then_x_api_key_header_present() {
    // GIVEN: A server that only answers keyed requests
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(header("x-api-key", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"mine"}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents/exists"))
        .and(header("x-api-key", "key-123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DOGBIN_EXISTS_BODY))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Uploading and reading with a keyed client
    let client = client_with_key(&server, " key-123\n");
    let uploaded = client.put("", "content").await.unwrap();
    let document = client.get("exists").await.unwrap();

    // THEN: Both matched the keyed mocks
    assert_eq!(uploaded.slug, "mine");
    assert_eq!(document.view_count, 12);
}

#[tokio::test]
async fn given_no_api_key_when_request_sent_then_no_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/existshaste"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HASTEBIN_EXISTS_BODY))
        .mount(&server)
        .await;

    client_for(&server).get("existshaste").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-api-key").is_none());
}

/// **VALUE**: Verifies a key that cannot be a header value is rejected at construction.
#[test]
fn given_api_key_with_control_characters_when_client_built_then_invalid_api_key() {
    let config = ServerConfig::builder()
        .with_server("del.dog")
        .with_api_key("bad\u{7f}key")
        .build()
        .unwrap();

    let result = PasteClient::new(&config);

    assert!(matches!(result, Err(PasteClientError::InvalidApiKey { .. })));
}

#[test]
fn given_unparsable_server_when_client_built_then_invalid_server_specifier() {
    let config = ServerConfig::builder()
        .with_server("http://exa mple")
        .build()
        .unwrap();

    let result = PasteClient::new(&config);

    assert!(matches!(
        result,
        Err(PasteClientError::InvalidServerSpecifier { .. })
    ));
}

/// **VALUE**: Verifies read-after-write returns the uploaded content.
#[tokio::test]
async fn given_conformant_server_when_put_then_get_returns_same_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"roundtrip","isUrl":false}"#))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents/roundtrip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"data":"hello inu","key":"roundtrip"}"#),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let uploaded = client.put("roundtrip", "hello inu").await.unwrap();
    let document = client.get(&uploaded.slug).await.unwrap();

    assert_eq!(document.content, "hello inu");
}

/// **VALUE**: Verifies one client can serve concurrent calls.
///
/// **WHY THIS MATTERS**: The client holds no per-call state; callers may share it across
/// tasks without locking.
#[tokio::test]
async fn given_shared_client_when_calls_run_concurrently_then_each_gets_its_answer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/exists"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DOGBIN_EXISTS_BODY))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/documents/existshaste"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HASTEBIN_EXISTS_BODY))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let (dogbin, hastebin) = tokio::join!(client.get("exists"), client.get("existshaste"));

    assert_eq!(dogbin.unwrap().view_count, 12);
    assert_eq!(hastebin.unwrap().view_count, 0);
}

/// **VALUE**: Verifies callers can bound a call with their own deadline.
///
/// **BUG THIS CATCHES**: Would catch the client blocking the runtime (e.g. a blocking
/// transport) so the caller's timeout never fires.
#[tokio::test]
async fn given_slow_server_when_caller_deadline_passes_then_call_is_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HASTEBIN_EXISTS_BODY)
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = tokio::time::timeout(Duration::from_millis(200), client.get("slow")).await;

    assert!(result.is_err(), "the caller's deadline should win");
}

/// **VALUE**: Verifies a refused connection surfaces as a transport error.
#[tokio::test]
async fn given_no_listener_when_get_then_http_error() {
    // GIVEN: A port that was bound and released
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let config = ServerConfig::builder()
        .with_server(format!("http://127.0.0.1:{port}"))
        .build()
        .unwrap();
    let client = PasteClient::new(&config).unwrap();

    // WHEN: Getting a document
    let err = client.get("anything").await.unwrap_err();

    // THEN: Http error flagged as a connect failure, no status
    match &err {
        PasteClientError::Http { is_connect, .. } => assert!(*is_connect),
        other => panic!("Expected Http, got {other:?}"),
    }
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies a transport timeout configured by the caller surfaces as a timed-out
/// `Http` error.
///
/// **WHY THIS MATTERS**: The client sets no deadline of its own; a caller-supplied
/// `reqwest::Client` is the way to bound every call made through it.
#[tokio::test]
async fn given_caller_client_with_timeout_when_server_slow_then_http_timeout() {
    // GIVEN: A slow server and a transport that gives up after 200ms
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HASTEBIN_EXISTS_BODY)
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;
    let config = ServerConfig::builder()
        .with_server(server.uri())
        .build()
        .unwrap();
    let transport = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = PasteClient::with_http_client(&config, transport).unwrap();

    // WHEN: Getting a document
    let err = client.get("slow").await.unwrap_err();

    // THEN: The transport timeout is reported, not a status error
    match &err {
        PasteClientError::Http { is_timeout, .. } => assert!(*is_timeout),
        other => panic!("Expected Http timeout, got {other:?}"),
    }
    assert_eq!(err.status(), None);
}
