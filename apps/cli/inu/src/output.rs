//! What `inu` prints on stdout.

use crate::error::InuError;

use common::ErrorLocation;
use models::{Document, UploadResult};

use std::panic::Location;

use serde::Serialize;

/// The shareable link, or the full result as pretty JSON.
pub fn render_upload(result: &UploadResult, json: bool) -> Result<String, InuError> {
    if json {
        to_pretty_json(result)
    } else {
        Ok(result.url.clone())
    }
}

/// The raw paste content, or the full document as pretty JSON.
pub fn render_document(document: &Document, json: bool) -> Result<String, InuError> {
    if json {
        to_pretty_json(document)
    } else {
        Ok(document.content.clone())
    }
}

#[track_caller]
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, InuError> {
    serde_json::to_string_pretty(value).map_err(|e| InuError::Output {
        message: format!("unable to encode output as JSON: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
