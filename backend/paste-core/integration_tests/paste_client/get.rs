use crate::helpers::{
    DOGBIN_EXISTS_BODY, HASTEBIN_EXISTS_BODY, NOT_FOUND_BODY, client_for, request_count,
};

use common::HttpStatusCode;
use paste_core::{Document, PasteClientError};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_get(server: &MockServer, slug: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/documents/{slug}")))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

/// **VALUE**: Verifies a dogbin document is normalized with its metadata.
///
/// **WHY THIS MATTERS**: This is the main read path against del.dog. `viewCount` and
/// `isUrl` only exist in the nested document.
#[tokio::test]
async fn given_dogbin_document_when_get_then_returns_document_with_metadata() {
    // GIVEN: A dogbin server holding "exists"
    let server = MockServer::start().await;
    mount_get(
        &server,
        "exists",
        ResponseTemplate::new(200).set_body_string(DOGBIN_EXISTS_BODY),
    )
    .await;

    // WHEN: Getting the document
    let document = client_for(&server).get("exists").await.unwrap();

    // THEN: All four fields come through
    assert_eq!(
        document,
        Document {
            slug: String::from("exists"),
            content: String::from("works"),
            is_url: false,
            view_count: 12,
        }
    );
}

/// **VALUE**: Verifies hastebin documents have zeroed metadata.
#[tokio::test]
async fn given_hastebin_document_when_get_then_metadata_defaults() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "existshaste",
        ResponseTemplate::new(200).set_body_string(HASTEBIN_EXISTS_BODY),
    )
    .await;

    let document = client_for(&server).get("existshaste").await.unwrap();

    assert_eq!(document.slug, "existshaste");
    assert_eq!(document.content, "works");
    assert_eq!(document.view_count, 0, "ViewCount should always be zero for haste servers");
    assert!(!document.is_url, "IsUrl should always be false for haste servers");
}

/// **VALUE**: Verifies a 404 with a JSON message surfaces exactly that message.
///
/// **BUG THIS CATCHES**: Would catch the status line or the raw body replacing the
/// server's message.
#[tokio::test]
async fn given_not_found_with_message_when_get_then_server_rejected_with_exact_message() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "notexist",
        ResponseTemplate::new(404).set_body_string(NOT_FOUND_BODY),
    )
    .await;

    let err = client_for(&server).get("notexist").await.unwrap_err();

    assert_eq!(err.message(), "Document not found.");
    match err {
        PasteClientError::ServerRejected { status, message, .. } => {
            assert_eq!(status, HttpStatusCode(404));
            assert_eq!(message, "Document not found.");
        }
        other => panic!("Expected ServerRejected, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 500 with an empty body is a request failure naming status and
/// decode problem.
///
/// **WHY THIS MATTERS**: Proxies and crashed servers answer with empty bodies. The user
/// needs to see the status, not a bare JSON parse error.
#[tokio::test]
async fn given_server_error_with_empty_body_when_get_then_request_failed() {
    let server = MockServer::start().await;
    mount_get(&server, "whoops", ResponseTemplate::new(500)).await;

    let err = client_for(&server).get("whoops").await.unwrap_err();

    match &err {
        PasteClientError::RequestFailed {
            status,
            status_line,
            reason,
            ..
        } => {
            assert_eq!(*status, HttpStatusCode(500));
            assert_eq!(status_line, "500 Internal Server Error");
            assert!(reason.contains("EOF"), "reason should carry the decode failure: {reason}");
        }
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
    assert!(err.message().contains("500"));
}

#[tokio::test]
async fn given_server_error_with_text_body_when_get_then_request_failed() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "whoops2",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let err = client_for(&server).get("whoops2").await.unwrap_err();

    assert!(matches!(err, PasteClientError::RequestFailed { .. }));
    assert!(err.message().starts_with(
        "unable to make request (500 Internal Server Error) and decode response:"
    ));
}

/// **VALUE**: Verifies a JSON error body without a message falls back to the status line.
#[tokio::test]
async fn given_server_error_with_empty_json_when_get_then_status_line_message() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "whoops3",
        ResponseTemplate::new(500).set_body_string("{}"),
    )
    .await;

    let err = client_for(&server).get("whoops3").await.unwrap_err();

    assert!(matches!(err, PasteClientError::ServerRejected { .. }));
    assert_eq!(err.message(), "500 Internal Server Error");
}

/// **VALUE**: Verifies an invalid JSON 200 body is a decode error.
#[tokio::test]
async fn given_invalid_json_when_get_then_decode_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "broken",
        ResponseTemplate::new(200).set_body_string("whoops"),
    )
    .await;

    let err = client_for(&server).get("broken").await.unwrap_err();

    match err {
        PasteClientError::Decode { message, .. } => {
            assert!(message.contains("expected value"), "unexpected detail: {message}");
        }
        other => panic!("Expected Decode, got {other:?}"),
    }
}

/// **VALUE**: Verifies a 200 with `{}` is rejected instead of returning a blank paste.
///
/// **BUG THIS CATCHES**: Would catch the emptiness check being skipped, which would print
/// nothing and exit successfully for a misbehaving server.
#[tokio::test]
async fn given_empty_json_object_when_get_then_empty_document_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "broken2",
        ResponseTemplate::new(200).set_body_string("{}"),
    )
    .await;

    let err = client_for(&server).get("broken2").await.unwrap_err();

    assert!(matches!(err, PasteClientError::EmptyDocument { .. }));
    assert_eq!(err.message(), "unable to decode response: document is empty");
}

/// **VALUE**: Verifies get issues exactly one request even when it fails.
#[tokio::test]
async fn given_failing_server_when_get_then_single_request_no_retry() {
    let server = MockServer::start().await;
    mount_get(&server, "flaky", ResponseTemplate::new(503)).await;

    let _ = client_for(&server).get("flaky").await;

    assert_eq!(request_count(&server).await, 1);
}

/// **VALUE**: Verifies a `null` error body is a rejection carrying the status line.
///
/// **BUG THIS CATCHES**: Would catch valid-but-null JSON being reported as an undecodable
/// request failure instead of the plain status.
#[tokio::test]
async fn given_not_found_with_null_body_when_get_then_status_line_message() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "gone",
        ResponseTemplate::new(404).set_body_string("null"),
    )
    .await;

    let err = client_for(&server).get("gone").await.unwrap_err();

    assert!(matches!(err, PasteClientError::ServerRejected { .. }));
    assert_eq!(err.message(), "404 Not Found");
    assert_eq!(err.status(), Some(HttpStatusCode(404)));
}

#[tokio::test]
async fn given_null_success_body_when_get_then_empty_document_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "nothing",
        ResponseTemplate::new(200).set_body_string("null"),
    )
    .await;

    let err = client_for(&server).get("nothing").await.unwrap_err();

    assert!(matches!(err, PasteClientError::EmptyDocument { .. }));
}

/// **VALUE**: Verifies a dogbin document with null metadata fields still reads.
#[tokio::test]
async fn given_document_with_null_fields_when_get_then_zero_metadata() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "sparse",
        ResponseTemplate::new(200).set_body_string(
            r#"{"data":"works","key":"sparse","document":{"_id":"sparse","isUrl":null,"viewCount":null}}"#,
        ),
    )
    .await;

    let document = client_for(&server).get("sparse").await.unwrap();

    assert_eq!(document.content, "works");
    assert!(!document.is_url);
    assert_eq!(document.view_count, 0);
}
