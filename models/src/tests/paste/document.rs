// Unit tests for normalizing Get responses into Document values

use crate::{Document, ExtendedDocument, ResponseWrapper};
use serde_json::json;

/// **VALUE**: Verifies dogbin metadata is copied into the normalized document.
///
/// **WHY THIS MATTERS**: `isUrl` and `viewCount` exist only in the nested document. If the
/// merge read them from the wrapper they would always be zero.
#[test]
fn given_extended_wrapper_when_normalized_then_copies_metadata() {
    // GIVEN: A dogbin response
    let wrapper: ResponseWrapper = serde_json::from_str(
        r#"{"data":"works","document":{"_id":"exists","content":"works","isUrl":false,"viewCount":12},"key":"exists"}"#,
    )
    .unwrap();

    // WHEN: Normalizing
    let document = Document::from(wrapper);

    // THEN: Wrapper fields plus nested metadata
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

/// **VALUE**: Verifies hastebin responses normalize with zeroed metadata.
#[test]
fn given_legacy_wrapper_when_normalized_then_metadata_is_default() {
    let wrapper: ResponseWrapper =
        serde_json::from_str(r#"{"data":"works", "key":"existshaste"}"#).unwrap();

    let document = Document::from(wrapper);

    assert_eq!(document.slug, "existshaste");
    assert_eq!(document.content, "works");
    assert!(!document.is_url, "is_url is always false for hastebin");
    assert_eq!(document.view_count, 0, "view_count is always zero for hastebin");
}

/// **VALUE**: Verifies slug and content come from the wrapper even when the nested
/// document disagrees.
///
/// **WHY THIS MATTERS**: Dogbin keeps the wrapper fields for hastebin compatibility and
/// they are what both dialects agree on.
#[test]
fn given_nested_document_with_other_slug_when_normalized_then_wrapper_wins() {
    let wrapper = ResponseWrapper {
        content: String::from("outer"),
        slug: String::from("outer-slug"),
        document: Some(ExtendedDocument {
            slug: String::from("inner-slug"),
            is_url: true,
            content: String::from("inner"),
            view_count: 3,
        }),
    };

    let document = Document::from(wrapper);

    assert_eq!(document.slug, "outer-slug");
    assert_eq!(document.content, "outer");
    assert!(document.is_url);
    assert_eq!(document.view_count, 3);
}

#[test]
fn given_document_when_serialized_then_uses_camel_case_metadata() {
    let document = Document {
        slug: String::from("exists"),
        content: String::from("works"),
        is_url: true,
        view_count: 7,
    };

    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(
        value,
        json!({"slug": "exists", "content": "works", "isUrl": true, "viewCount": 7})
    );
}
