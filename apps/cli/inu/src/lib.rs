//! `inu`: upload to and read from dogbin/hastebin servers from a terminal.
//!
//! - `cli`: clap definitions
//! - `settings`: server and API key resolution (flag, env, `~/.inu`, default)
//! - `input`: paste content from stdin, `--file` or arguments
//! - `paste_ref`: slugs and links given to `inu get`
//! - `commands`: put and get, returning the text to print
//! - `output`: plain or JSON rendering
//! - `logger`: stderr logging

pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub mod output;
pub mod paste_ref;
pub mod settings;

#[cfg(test)]
mod tests;

use cli::Command;
use error::InuError;
use settings::SettingsSources;

/// Run one command and return the text for stdout.
pub async fn run(command: Command, sources: &SettingsSources) -> Result<String, InuError> {
    match command {
        Command::Put(args) => {
            let piped = input::read_piped_stdin(&args).await?;
            commands::put::execute(&args, sources, piped).await
        }
        Command::Get(args) => commands::get::execute(&args, sources).await,
    }
}
