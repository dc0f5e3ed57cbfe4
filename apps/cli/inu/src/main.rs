use inu::cli::Cli;
use inu::logger::initialize as LoggerInitialize;
use inu::settings::SettingsSources;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let command = Cli::parse().into_command();

    if let Err(e) = LoggerInitialize(command.log_level()) {
        eprintln!("Error: {}", e.user_message());
    }

    let sources = SettingsSources::from_environment();

    match inu::run(command, &sources).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
