//! Where the content and slug of an upload come from.

use crate::cli::PutArgs;
use crate::error::InuError;

use common::ErrorLocation;

use std::io::IsTerminal;
use std::panic::Location;

use log::debug;
use tokio::io::AsyncReadExt;

/// Slug and content for one upload; an empty slug lets the server choose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutInput {
    pub slug: String,
    pub content: String,
}

/// Whether stdin should be read as the paste content.
///
/// Only when stdin is not a terminal and neither `--file` nor an explicit
/// `SLUG CONTENT` pair was given.
pub fn wants_stdin(args: &PutArgs, stdin_is_terminal: bool) -> bool {
    !stdin_is_terminal && args.file.is_none() && args.args.len() < 2
}

/// Read all of stdin if [`wants_stdin`] says so.
pub async fn read_piped_stdin(args: &PutArgs) -> Result<Option<String>, InuError> {
    if !wants_stdin(args, std::io::stdin().is_terminal()) {
        return Ok(None);
    }

    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .map_err(|e| InuError::Input {
            message: format!("unable to read stdin: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    debug!("Read {} bytes from stdin", content.len());
    Ok(Some(content))
}

/// Decide slug and content.
///
/// 1. Non-empty piped stdin is the content; a single positional is the slug.
/// 2. Otherwise `--file` is the content; a single positional is the slug.
/// 3. Otherwise positionals are `CONTENT` or `SLUG CONTENT`.
///
/// `--slug` applies unless a positional slug overrides it.
#[track_caller]
pub fn resolve_put_input(args: &PutArgs, piped: Option<String>) -> Result<PutInput, InuError> {
    let flag_slug = args.slug.clone().unwrap_or_default();
    let single_positional = match args.args.as_slice() {
        [only] => Some(only.clone()),
        _ => None,
    };

    if let Some(content) = piped.filter(|content| !content.is_empty()) {
        return Ok(PutInput {
            slug: single_positional.unwrap_or(flag_slug),
            content,
        });
    }

    if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path).map_err(|e| InuError::Input {
            message: format!("unable to read the file '{}': {e}", path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;
        return Ok(PutInput {
            slug: single_positional.unwrap_or(flag_slug),
            content,
        });
    }

    match args.args.as_slice() {
        [] => Ok(PutInput {
            slug: flag_slug,
            content: String::new(),
        }),
        [content] => Ok(PutInput {
            slug: flag_slug,
            content: content.clone(),
        }),
        [slug, content] => Ok(PutInput {
            slug: slug.clone(),
            content: content.clone(),
        }),
        _ => Err(InuError::Usage {
            message: String::from("expected at most two arguments: [SLUG] CONTENT"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
