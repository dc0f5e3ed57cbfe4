//! Error taxonomy for paste server operations.
//!
//! - Status codes stored as [`HttpStatusCode`], never parsed back out of text
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` on conversions so the location is the failing call site

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PasteClientError {
    /// `put` was called without content; no request was sent.
    #[error("Empty Content Error: no content was provided {location}")]
    EmptyContent { location: ErrorLocation },

    #[error("Invalid Server Specifier Error: '{specifier}': {message} {location}")]
    InvalidServerSpecifier {
        specifier: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid API Key Error: key contains characters not allowed in a header {location}")]
    InvalidApiKey { location: ErrorLocation },

    /// Non-200 answer whose message came from the JSON body or, failing that,
    /// from the status line.
    #[error("Server Rejected Error: HTTP {status} - {message} {location}")]
    ServerRejected {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// Non-200 answer whose body was not a JSON error envelope.
    #[error(
        "Request Failed Error: unable to make request ({status_line}) and decode response: {reason} {location}"
    )]
    RequestFailed {
        status: HttpStatusCode,
        status_line: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Decode Error: unable to decode response: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// 200 answer that decoded to a wrapper with no content, slug or metadata.
    #[error("Empty Document Error: unable to decode response: document is empty {location}")]
    EmptyDocument { location: ErrorLocation },

    /// Transport failure: DNS, refused connection, TLS, timeout, broken body.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connect: bool,
        location: ErrorLocation,
    },
}

impl PasteClientError {
    /// The human-facing message without the error kind or source location.
    ///
    /// For a server rejection this is exactly the server's `message` field
    /// (or the status line when the server sent none).
    pub fn message(&self) -> String {
        match self {
            Self::EmptyContent { .. } => String::from("no content was provided"),
            Self::InvalidServerSpecifier {
                specifier, message, ..
            } => format!("unable to parse server URL '{specifier}': {message}"),
            Self::InvalidApiKey { .. } => {
                String::from("API key contains characters not allowed in a header")
            }
            Self::ServerRejected { message, .. } => message.clone(),
            Self::RequestFailed {
                status_line,
                reason,
                ..
            } => format!("unable to make request ({status_line}) and decode response: {reason}"),
            Self::Decode { message, .. } => format!("unable to decode response: {message}"),
            Self::EmptyDocument { .. } => {
                String::from("unable to decode response: document is empty")
            }
            Self::Http { message, .. } => message.clone(),
        }
    }

    /// HTTP status of the failed response, when the server answered at all.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            Self::ServerRejected { status, .. } | Self::RequestFailed { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            Self::EmptyContent { location }
            | Self::InvalidServerSpecifier { location, .. }
            | Self::InvalidApiKey { location }
            | Self::ServerRejected { location, .. }
            | Self::RequestFailed { location, .. }
            | Self::Decode { location, .. }
            | Self::EmptyDocument { location }
            | Self::Http { location, .. } => *location,
        }
    }
}

impl From<reqwest::Error> for PasteClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PasteClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connect: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PasteClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        PasteClientError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
