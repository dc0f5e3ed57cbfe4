// Unit tests for the dogbin/hastebin JSON shapes

use crate::{ErrorMessage, ResponseWrapper, UploadRequest, UploadResult};
use serde_json::json;

/// **VALUE**: Verifies the extended upload body carries exactly `slug` and `content`.
///
/// **WHY THIS MATTERS**: Dogbin picks the custom slug out of this body. A renamed field
/// would silently fall back to a server-generated slug.
#[test]
fn given_upload_request_when_serialized_then_has_slug_and_content_only() {
    let request = UploadRequest {
        slug: "works",
        content: "random content",
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value, json!({"slug": "works", "content": "random content"}));
}

/// **VALUE**: Verifies a hastebin upload answer (`{"key"}` only) decodes with `is_url == false`.
#[test]
fn given_legacy_upload_answer_when_decoded_then_is_url_defaults_false() {
    let result: UploadResult = serde_json::from_str(r#"{"key":"hasteup"}"#).unwrap();

    assert_eq!(result.slug, "hasteup");
    assert!(!result.is_url);
    assert!(result.url.is_empty(), "url is derived locally, never decoded");
}

/// **VALUE**: Verifies a server-supplied `url` field is ignored.
///
/// **BUG THIS CATCHES**: Would catch `skip_deserializing` being dropped, letting a server
/// dictate the link printed to the user.
#[test]
fn given_upload_answer_with_url_field_when_decoded_then_url_ignored() {
    let result: UploadResult =
        serde_json::from_str(r#"{"key":"url","isUrl":true,"url":"https://evil.example"}"#)
            .unwrap();

    assert_eq!(result.slug, "url");
    assert!(result.is_url);
    assert_eq!(result.url, "");
}

#[test]
fn given_upload_result_when_serialized_then_uses_wire_names_plus_url() {
    let result = UploadResult {
        slug: String::from("works"),
        is_url: false,
        url: String::from("https://del.dog/works"),
    };

    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(
        value,
        json!({"key": "works", "isUrl": false, "url": "https://del.dog/works"})
    );
}

/// **VALUE**: Verifies missing and empty `message` both decode to an empty string.
///
/// **WHY THIS MATTERS**: The client substitutes the status line in both cases; they must
/// look the same after decoding.
#[test]
fn given_error_bodies_when_decoded_then_missing_and_empty_message_match() {
    let missing: ErrorMessage = serde_json::from_str("{}").unwrap();
    let empty: ErrorMessage = serde_json::from_str(r#"{"message":""}"#).unwrap();
    let present: ErrorMessage = serde_json::from_str(r#"{"message":"Document not found."}"#).unwrap();

    assert_eq!(missing, empty);
    assert_eq!(present.message, "Document not found.");
}

/// **VALUE**: Verifies an extended Get body decodes, ignoring server-internal fields.
#[test]
fn given_extended_wrapper_when_decoded_then_nested_document_present() {
    let body = r#"{"data":"works","document":{"_id":"exists","content":"works","isUrl":false,"owner":{"$oid":"5b20334e5e7034132c431e78"},"version":2,"viewCount":12},"key":"exists"}"#;

    let wrapper: ResponseWrapper = serde_json::from_str(body).unwrap();

    assert_eq!(wrapper.content, "works");
    assert_eq!(wrapper.slug, "exists");
    let document = wrapper.document.expect("extended document");
    assert_eq!(document.slug, "exists");
    assert_eq!(document.view_count, 12);
    assert!(!document.is_url);
}

/// **VALUE**: Verifies `is_empty` only fires when content, slug and metadata are all absent.
///
/// **BUG THIS CATCHES**: Would catch the check being narrowed to content only, which
/// would reject a legitimately empty paste that still has a slug.
#[test]
fn given_wrappers_when_checking_empty_then_requires_all_fields_absent() {
    let empty: ResponseWrapper = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());

    let null_document: ResponseWrapper = serde_json::from_str(r#"{"document":null}"#).unwrap();
    assert!(null_document.is_empty());

    let slug_only: ResponseWrapper = serde_json::from_str(r#"{"key":"abc"}"#).unwrap();
    assert!(!slug_only.is_empty());

    let document_only: ResponseWrapper = serde_json::from_str(r#"{"document":{}}"#).unwrap();
    assert!(!document_only.is_empty());
}

/// **VALUE**: Verifies `null` field values decode as their zero value.
///
/// **BUG THIS CATCHES**: Would catch a server sending `"data":null` or `"isUrl":null`
/// turning an otherwise usable response into a decode error.
#[test]
fn given_null_fields_when_decoded_then_zero_values() {
    let wrapper: ResponseWrapper = serde_json::from_str(
        r#"{"data":null,"key":"abc","document":{"_id":null,"isUrl":null,"content":null,"viewCount":null}}"#,
    )
    .unwrap();
    assert_eq!(wrapper.content, "");
    assert_eq!(wrapper.slug, "abc");
    let document = wrapper.document.expect("extended document");
    assert!(!document.is_url);
    assert_eq!(document.view_count, 0);

    let result: UploadResult = serde_json::from_str(r#"{"key":"up","isUrl":null}"#).unwrap();
    assert!(!result.is_url);

    let error: ErrorMessage = serde_json::from_str(r#"{"message":null}"#).unwrap();
    assert_eq!(error.message, "");
}

#[test]
fn given_negative_view_count_when_decoded_then_kept_as_sent() {
    let wrapper: ResponseWrapper =
        serde_json::from_str(r#"{"data":"x","key":"k","document":{"viewCount":-1}}"#).unwrap();

    assert_eq!(wrapper.document.expect("extended document").view_count, -1);
}
