use crate::cli::GetArgs;
use crate::error::InuError;
use crate::output::render_document;
use crate::paste_ref::parse_paste_ref;
use crate::settings::{SettingsSources, resolve_server_config};

use common::ErrorLocation;
use paste_core::PasteClient;

use std::panic::Location;

use log::debug;

/// Fetch one paste and return what should be printed.
///
/// A full link (`del.dog/abc`) overrides the configured server with the
/// link's own origin.
pub async fn execute(args: &GetArgs, sources: &SettingsSources) -> Result<String, InuError> {
    let reference = args
        .reference
        .as_deref()
        .or(args.slug.as_deref())
        .unwrap_or_default();

    let paste_ref = parse_paste_ref(reference);
    if paste_ref.slug.is_empty() {
        return Err(InuError::Usage {
            message: String::from("no slug given: inu get <SLUG|URL>"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let server = paste_ref.server.as_deref().or(args.common.server.as_deref());
    let config = resolve_server_config(server, args.common.api_key.as_deref(), sources)?;
    debug!("Fetching '{}' from {}", paste_ref.slug, config.server());

    let client = PasteClient::new(&config)?;
    let document = client.get(&paste_ref.slug).await?;

    render_document(&document, args.common.json)
}
