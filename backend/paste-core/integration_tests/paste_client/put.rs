use crate::helpers::{DUPLICATE_BODY, client_for, request_count};

use common::HttpStatusCode;
use paste_core::PasteClientError;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies a custom slug upload uses the dogbin JSON dialect.
///
/// **WHY THIS MATTERS**: Dogbin only honors custom slugs in a JSON body. A plain-text
/// post would silently get a random slug.
///
/// **BUG THIS CATCHES**: Would catch a wrong content type or body field names.
#[tokio::test]
async fn given_slug_when_put_then_sends_json_and_builds_url() {
    // GIVEN: A dogbin server expecting a JSON upload
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"slug": "works", "content": "random content"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"works", "isUrl": false}"#))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Uploading with a slug
    let result = client_for(&server).put("works", "random content").await.unwrap();

    // THEN: Slug from the server, url derived locally
    assert_eq!(result.slug, "works");
    assert!(!result.is_url);
    assert_eq!(result.url, format!("{}/works", server.uri()));
}

#[tokio::test]
async fn given_url_content_when_put_then_is_url_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(body_json(json!({"slug": "url", "content": "https://github.com/dogbin/inu"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"url", "isUrl": true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .put("url", "https://github.com/dogbin/inu")
        .await
        .unwrap();

    assert_eq!(result.slug, "url");
    assert!(result.is_url);
    assert_eq!(result.url, format!("{}/url", server.uri()));
}

/// **VALUE**: Verifies an upload without a slug uses the hastebin plain-text dialect.
///
/// **BUG THIS CATCHES**: Would catch the content being JSON-wrapped for hastebin servers,
/// which would store the JSON text as the paste.
#[tokio::test]
async fn given_no_slug_when_put_then_sends_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .and(header("content-type", "text/plain"))
        .and(body_string("random content"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"key":"hasteup"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).put("", "random content").await.unwrap();

    assert_eq!(result.slug, "hasteup");
    assert!(!result.is_url);
    assert_eq!(result.url, format!("{}/hasteup", server.uri()));
}

/// **VALUE**: Verifies a taken slug surfaces the server's conflict message.
#[tokio::test]
async fn given_duplicate_slug_when_put_then_server_rejected_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(409).set_body_string(DUPLICATE_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .put("duplicate", "random content")
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "This URL is already in use, please choose a different one"
    );
    assert_eq!(err.status(), Some(HttpStatusCode(409)));
}

/// **VALUE**: Verifies a rejected upload without a usable body falls back to the status line.
///
/// **WHY THIS MATTERS**: Unlike get, put never reports the secondary decode failure; the
/// rejection itself is what the user needs to see.
#[tokio::test]
async fn given_rejection_without_body_when_put_then_status_line_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let err = client_for(&server).put("taken", "content").await.unwrap_err();

    match err {
        PasteClientError::ServerRejected { status, message, .. } => {
            assert_eq!(status, HttpStatusCode(409));
            assert_eq!(message, "409 Conflict");
        }
        other => panic!("Expected ServerRejected, got {other:?}"),
    }
}

/// **VALUE**: Verifies empty content fails locally without touching the network.
///
/// **BUG THIS CATCHES**: Would catch the precondition moving after the request, creating
/// empty pastes on the server.
#[tokio::test]
async fn given_empty_content_when_put_then_empty_content_error_and_no_request() {
    let server = MockServer::start().await;

    for slug in ["", "empty"] {
        let err = client_for(&server).put(slug, "").await.unwrap_err();
        assert!(matches!(err, PasteClientError::EmptyContent { .. }));
        assert_eq!(err.message(), "no content was provided");
    }

    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn given_invalid_json_answer_when_put_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).put("", "content").await.unwrap_err();

    assert!(matches!(err, PasteClientError::Decode { .. }));
}
