//! Turning what the user passed to `inu get` into a slug and, for full
//! links, the server the link points at.

use url::Url;

const HTTPS_PREFIX: &str = "https://";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRef {
    pub slug: String,
    /// Origin of a pasted link, overriding the configured server.
    pub server: Option<String>,
}

/// Accepts `abc`, `abc.rs`, `/abc`, `del.dog/abc`, `https://host:90/raw/abc.py`.
///
/// For links, the slug is the last path segment and the server is the
/// link's origin. A file extension on the slug is dropped.
pub fn parse_paste_ref(reference: &str) -> PasteRef {
    let reference = reference.trim();

    let (slug, server) = if let Some(stripped) = reference.strip_prefix('/') {
        (stripped.to_string(), None)
    } else if reference.contains('/') {
        from_link(reference).unwrap_or_else(|| (reference.to_string(), None))
    } else {
        (reference.to_string(), None)
    };

    PasteRef {
        slug: strip_extension(&slug).to_string(),
        server,
    }
}

fn from_link(reference: &str) -> Option<(String, Option<String>)> {
    let candidate = if reference.starts_with("http") {
        reference.to_string()
    } else {
        format!("{HTTPS_PREFIX}{reference}")
    };

    let url = Url::parse(&candidate).ok()?;
    let slug = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .unwrap_or_default()
        .to_string();
    let origin = url.origin();
    let server = origin.is_tuple().then(|| origin.ascii_serialization());

    Some((slug, server))
}

fn strip_extension(slug: &str) -> &str {
    slug.split_once('.').map_or(slug, |(stem, _)| stem)
}
