use crate::cli::PutArgs;
use crate::error::InuError;
use crate::input::resolve_put_input;
use crate::output::render_upload;
use crate::settings::{SettingsSources, resolve_server_config};

use paste_core::PasteClient;

use log::info;

/// Upload one paste and return what should be printed.
///
/// `piped` is stdin content already read by the caller, if any.
pub async fn execute(
    args: &PutArgs,
    sources: &SettingsSources,
    piped: Option<String>,
) -> Result<String, InuError> {
    let input = resolve_put_input(args, piped)?;
    let config = resolve_server_config(
        args.common.server.as_deref(),
        args.common.api_key.as_deref(),
        sources,
    )?;

    let client = PasteClient::new(&config)?;
    let result = client.put(&input.slug, &input.content).await?;
    info!("Created paste {}", result.url);

    render_upload(&result, args.common.json)
}
