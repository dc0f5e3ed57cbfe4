//! Upload and retrieval against dogbin and hastebin servers.
//!
//! One request per call. The response body is read to the end before any
//! decoding, on every path, so the connection goes back to the pool before
//! the call returns.

pub(crate) mod error_body;

use crate::error::paste_client::PasteClientError;
use crate::server_urls::ServerUrls;

use error_body::{decode_error_message, rejection_message, status_line};

use common::{ErrorLocation, HttpStatusCode};
use models::{Document, ResponseWrapper, ServerConfig, UploadRequest, UploadResult};

use std::panic::Location;

use log::{debug, warn};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};

const API_KEY_HEADER_KEY: &str = "X-Api-Key";
const TEXT_PLAIN_CONTENT_TYPE: &str = "text/plain";

/// A client bound to one paste server.
///
/// Cheap to clone and safe to share between tasks; no state changes after
/// construction.
#[derive(Debug, Clone)]
pub struct PasteClient {
    urls: ServerUrls,
    client: Client,
    api_key: Option<HeaderValue>,
}

impl PasteClient {
    /// Build a client for the configured server with a default transport.
    ///
    /// No timeout is set. Bound calls with `tokio::time::timeout`, drop the
    /// future to cancel, or pass a configured client to
    /// [`PasteClient::with_http_client`].
    pub fn new(config: &ServerConfig) -> Result<Self, PasteClientError> {
        let client = Client::builder().build()?;
        Self::with_http_client(config, client)
    }

    /// Build a client that sends its requests through `client`.
    #[track_caller]
    pub fn with_http_client(
        config: &ServerConfig,
        client: Client,
    ) -> Result<Self, PasteClientError> {
        let urls = ServerUrls::parse(config.server())?;

        let api_key = match config.api_key() {
            Some(key) => {
                let mut value = HeaderValue::from_str(key.as_str()).map_err(|_| {
                    PasteClientError::InvalidApiKey {
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                value.set_sensitive(true);
                debug!("Using API key ({} chars)", key.len());
                Some(value)
            }
            None => None,
        };

        debug!("Paste client bound to {}", urls.base_url());

        Ok(Self {
            urls,
            client,
            api_key,
        })
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER_KEY, key.clone()),
            None => request,
        }
    }

    /// Upload `content`, optionally under a custom `slug`.
    ///
    /// An empty slug uses the hastebin dialect: the raw content is posted as
    /// `text/plain` and the server picks the slug. A non-empty slug uses the
    /// dogbin dialect: a JSON `{"slug","content"}` body.
    ///
    /// # Errors
    /// - [`PasteClientError::EmptyContent`] if `content` is empty (nothing is sent)
    /// - [`PasteClientError::ServerRejected`] on any non-200 answer
    /// - [`PasteClientError::Decode`] if a 200 body is not an upload result
    /// - [`PasteClientError::Http`] on transport failure
    pub async fn put(&self, slug: &str, content: &str) -> Result<UploadResult, PasteClientError> {
        if content.is_empty() {
            return Err(PasteClientError::EmptyContent {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let url = self.urls.upload_url();
        let request = self.prepare_request(self.client.post(url.clone()));

        let request = if slug.is_empty() {
            debug!("POST {url} (text/plain, server-assigned slug)");
            request
                .header(CONTENT_TYPE, TEXT_PLAIN_CONTENT_TYPE)
                .body(content.to_string())
        } else {
            debug!("POST {url} (json, slug '{slug}')");
            request.json(&UploadRequest { slug, content })
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !HttpStatusCode::from(status.as_u16()).is_ok() {
            let message = rejection_message(&body, status);
            warn!("Upload to {url} rejected: {message}");
            return Err(PasteClientError::ServerRejected {
                status: HttpStatusCode::from(status.as_u16()),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut result: UploadResult = serde_json::from_str(&body)?;
        result.url = self.urls.document_url(&result.slug);

        debug!("Uploaded document '{}' (is_url: {})", result.slug, result.is_url);
        Ok(result)
    }

    /// Fetch the document stored under `slug`.
    ///
    /// # Errors
    /// - [`PasteClientError::ServerRejected`] on a non-200 answer with a JSON error body
    /// - [`PasteClientError::RequestFailed`] on a non-200 answer whose body is not JSON
    /// - [`PasteClientError::Decode`] if a 200 body is not a document wrapper
    /// - [`PasteClientError::EmptyDocument`] if a 200 body decodes to nothing
    /// - [`PasteClientError::Http`] on transport failure
    pub async fn get(&self, slug: &str) -> Result<Document, PasteClientError> {
        let url = self.urls.get_url(slug);
        debug!("GET {url}");

        let response = self.prepare_request(self.client.get(url.clone())).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !HttpStatusCode::from(status.as_u16()).is_ok() {
            return Err(Self::failed_get(&url, status, &body));
        }

        let wrapper = serde_json::from_str::<Option<ResponseWrapper>>(&body)?.unwrap_or_default();
        if wrapper.is_empty() {
            warn!("GET {url} returned an empty document");
            return Err(PasteClientError::EmptyDocument {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Document::from(wrapper))
    }

    #[track_caller]
    fn failed_get(url: &url::Url, status: StatusCode, body: &str) -> PasteClientError {
        let location = ErrorLocation::from(Location::caller());
        let code = HttpStatusCode::from(status.as_u16());

        match decode_error_message(body) {
            Ok(message) => {
                let message = message.unwrap_or_else(|| status_line(status));
                warn!("GET {url} rejected: {message}");
                PasteClientError::ServerRejected {
                    status: code,
                    message,
                    location,
                }
            }
            Err(error) => {
                warn!("GET {url} failed with {status} and an undecodable body");
                PasteClientError::RequestFailed {
                    status: code,
                    status_line: status_line(status),
                    reason: error.to_string(),
                    location,
                }
            }
        }
    }
}
