//! Resolution of the server and API key the paste client is built with.
//!
//! Each setting is taken from the first non-blank source, in order:
//! command-line flag, environment variable, file under `~/.inu/`, default.

use crate::error::InuError;

use common::{ErrorLocation, RedactedApiKey};
use models::{DOGBIN_SERVER, ServerConfig};

use std::env;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub const SERVER_ENV: &str = "DOGBIN_SERVER";
pub const KEY_ENV: &str = "DOGBIN_KEY";
pub const SETTINGS_DIR_NAME: &str = ".inu";
pub const SERVER_FILE_NAME: &str = "server";
pub const KEY_FILE_NAME: &str = "key";

/// Everything outside the command line that can supply a setting.
///
/// Captured once in `main` so resolution itself never touches process state.
#[derive(Debug, Clone, Default)]
pub struct SettingsSources {
    pub env_server: Option<String>,
    pub env_key: Option<RedactedApiKey>,
    pub settings_dir: Option<PathBuf>,
}

impl SettingsSources {
    /// Load `.env` (if any), then capture `DOGBIN_SERVER`, `DOGBIN_KEY` and `~/.inu`.
    pub fn from_environment() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => debug!("Ignoring unreadable .env: {e}"),
        }

        Self {
            env_server: env::var(SERVER_ENV).ok(),
            env_key: env::var(KEY_ENV)
                .ok()
                .and_then(|key| RedactedApiKey::from_input(&key)),
            settings_dir: dirs::home_dir().map(|home| home.join(SETTINGS_DIR_NAME)),
        }
    }
}

/// Build the [`ServerConfig`] for one invocation.
///
/// # Errors
///
/// Returns [`InuError::Config`] if a settings file exists but cannot be read.
pub fn resolve_server_config(
    flag_server: Option<&str>,
    flag_key: Option<&str>,
    sources: &SettingsSources,
) -> Result<ServerConfig, InuError> {
    let server = match first_non_blank([flag_server, sources.env_server.as_deref()]) {
        Some(server) => server.to_string(),
        None => read_setting_file(sources.settings_dir.as_deref(), SERVER_FILE_NAME)?
            .unwrap_or_else(|| DOGBIN_SERVER.to_string()),
    };

    let api_key = match flag_key.and_then(RedactedApiKey::from_input) {
        Some(key) => Some(key),
        None => match &sources.env_key {
            Some(key) => Some(key.clone()),
            None => read_setting_file(sources.settings_dir.as_deref(), KEY_FILE_NAME)?
                .and_then(|key| RedactedApiKey::from_input(&key)),
        },
    };

    let config = ServerConfig::builder()
        .with_server(server)
        .with_redacted_api_key(api_key)
        .build()?;

    debug!("Resolved settings: {config:?}");
    Ok(config)
}

fn first_non_blank<'a>(candidates: [Option<&'a str>; 2]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Read `{dir}/{name}`, trimmed. Missing directory, missing file and blank
/// contents all mean "not set".
#[track_caller]
fn read_setting_file(dir: Option<&Path>, name: &str) -> Result<Option<String>, InuError> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    let path = dir.join(name);

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let trimmed = contents.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                debug!("Read {name} setting from {}", path.display());
                Ok(Some(trimmed.to_string()))
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(InuError::Config {
            message: format!("unable to read {}: {e}", path.display()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
