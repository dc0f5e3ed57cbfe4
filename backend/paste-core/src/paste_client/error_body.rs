//! Best-effort decoding of error response bodies.

use models::ErrorMessage;

use reqwest::StatusCode;

/// Decode the server's `{"message": ...}` envelope.
///
/// - `Ok(Some(message))`: a non-empty message was sent
/// - `Ok(None)`: valid envelope (or `null`), but `message` was empty or missing
/// - `Err(_)`: the body is not a JSON error envelope (empty, HTML, plain text)
pub(crate) fn decode_error_message(body: &str) -> Result<Option<String>, serde_json::Error> {
    let envelope: Option<ErrorMessage> = serde_json::from_str(body)?;
    Ok(envelope
        .map(|envelope| envelope.message)
        .filter(|message| !message.is_empty()))
}

/// The status line a server message falls back to, e.g. `409 Conflict`.
pub(crate) fn status_line(status: StatusCode) -> String {
    status.to_string()
}

/// The message reported for a rejected upload: the server's own message if it
/// sent one, the status line otherwise. Undecodable bodies are not an error here.
pub(crate) fn rejection_message(body: &str, status: StatusCode) -> String {
    match decode_error_message(body) {
        Ok(Some(message)) => message,
        Ok(None) | Err(_) => status_line(status),
    }
}
