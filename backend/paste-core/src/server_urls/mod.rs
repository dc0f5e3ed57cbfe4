//! Endpoint URLs derived from a configured server specifier.

use crate::DEFAULT_SCHEME;
use crate::error::paste_client::PasteClientError;

use common::ErrorLocation;

use std::borrow::Cow;
use std::panic::Location;

use url::Url;

const SCHEME_SEPARATOR: &str = "://";
const DOCUMENTS_SEGMENT: &str = "documents";

/// The base URL of a paste server and the endpoints hanging off it.
///
/// Parsed once; every derived URL is a pure function of the base and a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrls {
    base: Url,
}

impl ServerUrls {
    /// Parse a server specifier such as `del.dog` or `http://host:90`.
    ///
    /// A specifier without a scheme gets `https://`. Query and fragment are
    /// dropped; a base path is kept.
    ///
    /// # Errors
    ///
    /// Returns [`PasteClientError::InvalidServerSpecifier`] when the result is
    /// not an absolute `http`/`https` URL with a host.
    #[track_caller]
    pub fn parse(specifier: &str) -> Result<Self, PasteClientError> {
        let trimmed = specifier.trim();
        let candidate = if trimmed.contains(SCHEME_SEPARATOR) {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(format!("{DEFAULT_SCHEME}{SCHEME_SEPARATOR}{trimmed}"))
        };

        let mut base = match Url::parse(&candidate) {
            Ok(url) => url,
            Err(error) => {
                return Err(PasteClientError::InvalidServerSpecifier {
                    specifier: specifier.to_string(),
                    message: error.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        if !matches!(base.scheme(), "http" | "https") {
            return Err(PasteClientError::InvalidServerSpecifier {
                specifier: specifier.to_string(),
                message: format!("unsupported scheme '{}'", base.scheme()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base })
    }

    /// Normalized absolute base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    /// `{base}/documents`
    pub fn upload_url(&self) -> Url {
        self.with_segments(&[DOCUMENTS_SEGMENT])
    }

    /// `{base}/documents/{slug}`
    pub fn get_url(&self, slug: &str) -> Url {
        self.with_segments(&[DOCUMENTS_SEGMENT, slug])
    }

    /// `{base}/{slug}`, the link users share.
    pub fn document_url(&self, slug: &str) -> String {
        self.with_segments(&[slug]).to_string()
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // http(s) URLs always have a path to push onto
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
