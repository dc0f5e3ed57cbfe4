use super::wire::ResponseWrapper;

use serde::Serialize;

/// A paste as handed to callers, independent of the server dialect.
///
/// Hastebin servers have no metadata, so their documents always report
/// `is_url == false` and `view_count == 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub slug: String,
    pub content: String,
    #[serde(rename = "isUrl")]
    pub is_url: bool,
    #[serde(rename = "viewCount")]
    pub view_count: i64,
}

impl From<ResponseWrapper> for Document {
    fn from(wrapper: ResponseWrapper) -> Self {
        let (is_url, view_count) = wrapper
            .document
            .map(|extended| (extended.is_url, extended.view_count))
            .unwrap_or_default();

        Self {
            slug: wrapper.slug,
            content: wrapper.content,
            is_url,
            view_count,
        }
    }
}
