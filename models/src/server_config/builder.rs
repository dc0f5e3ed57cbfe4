use crate::error::model_error::ModelError;
use crate::{ErrorLocation, ServerConfig};

use common::RedactedApiKey;

use std::panic::Location;

/// Builder for creating validated ServerConfig instances.
///
/// The CLI resolves the server and key from flags, environment and files,
/// then hands the raw strings here.
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    server: Option<String>,
    api_key: Option<RedactedApiKey>,
}

impl ServerConfigBuilder {
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Blank keys are dropped so an empty `DOGBIN_KEY` behaves like no key.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = RedactedApiKey::from_input(api_key);
        self
    }

    pub fn with_redacted_api_key(mut self, api_key: Option<RedactedApiKey>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }

    /// Build the ServerConfig with validation.
    #[track_caller]
    pub fn build(self) -> Result<ServerConfig, ModelError> {
        let server = self.server.ok_or_else(|| ModelError::Validation {
            field: "server",
            message: String::from("Server is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let server = server.trim();
        if server.is_empty() {
            return Err(ModelError::Validation {
                field: "server",
                message: String::from("Server cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(ServerConfig {
            server: server.to_string(),
            api_key: self.api_key,
        })
    }
}
