use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Errors raised while constructing model values from user input.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}
