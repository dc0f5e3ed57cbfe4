use serde::{Deserialize, Deserializer, Serialize};

/// Body of an extended-dialect upload, sent only when a custom slug is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRequest<'a> {
    pub slug: &'a str,
    pub content: &'a str,
}

/// Answer to a successful upload.
///
/// `url` is never read from the wire: the client derives it from the
/// server address and the returned slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(rename = "key", default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(rename = "isUrl", default, deserialize_with = "null_as_default")]
    pub is_url: bool,
    #[serde(skip_deserializing)]
    pub url: String,
}

/// Error envelope. Servers may omit it entirely or leave `message` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

/// Outer body of a Get response, present in both dialects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponseWrapper {
    #[serde(rename = "data", default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "key", default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub document: Option<ExtendedDocument>,
}

impl ResponseWrapper {
    /// A 200 response carrying none of content, slug or metadata is not a document.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.slug.is_empty() && self.document.is_none()
    }
}

/// Dogbin-only metadata nested under `document`. Other server-side fields
/// (`owner`, `version`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtendedDocument {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(rename = "isUrl", default, deserialize_with = "null_as_default")]
    pub is_url: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "viewCount", default, deserialize_with = "null_as_default")]
    pub view_count: i64,
}

/// Servers send `null` for fields they have no value for; read it as the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
