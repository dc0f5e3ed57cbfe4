use common::ErrorLocation;
use models::ModelError;
use paste_core::PasteClientError;

use thiserror::Error;

/// Errors surfaced by the `inu` command line.
///
/// Paste server errors are kept whole so their status and location survive
/// into the debug log; everything else carries a message and location.
#[derive(Debug, Error)]
pub enum InuError {
    /// Reading stdin or the `--file` argument failed
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Server or key settings could not be resolved
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Arguments were valid for clap but not for the command
    #[error("Usage Error: {message} {location}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Paste(#[from] PasteClientError),
}

impl InuError {
    /// Text printed after `Error:` on stderr.
    pub fn user_message(&self) -> String {
        match self {
            Self::Input { message, .. }
            | Self::Config { message, .. }
            | Self::Usage { message, .. }
            | Self::Output { message, .. }
            | Self::Logger { message, .. } => message.clone(),
            Self::Paste(error) => error.message(),
        }
    }
}

impl From<ModelError> for InuError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Validation { field, message, .. } => InuError::Config {
                message: format!("invalid {field}: {message}"),
                location: ErrorLocation::from(std::panic::Location::caller()),
            },
        }
    }
}
