//! Command-line surface of `inu`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "inu",
    version,
    about = "Use dogbin/hastebin right from your terminal"
)]
pub struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Option<Command>,

    /// `inu <content>` is `inu put <content>`
    #[command(flatten)]
    put: PutArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new paste
    #[command(visible_aliases = ["up", "p", "u"])]
    Put(PutArgs),

    /// Obtain the contents of a paste
    #[command(visible_aliases = ["show", "s"])]
    Get(GetArgs),
}

/// Flags shared by every command, accepted before or after the subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// The dogbin/hastebin server to use [env: DOGBIN_SERVER, file: ~/.inu/server]
    #[arg(short = 'r', long, global = true)]
    pub server: Option<String>,

    /// The dogbin API key to use [env: DOGBIN_KEY, file: ~/.inu/key]
    #[arg(short = 'k', long = "key", global = true)]
    pub api_key: Option<String>,

    /// Output the result as JSON
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// Log requests to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PutArgs {
    /// Filled from the global flags by [`Cli::into_command`].
    #[arg(skip)]
    pub common: CommonArgs,

    /// The slug to use instead of the server generated one [hastebin doesn't support this]
    #[arg(short = 's', long = "slug")]
    pub slug: Option<String>,

    /// A file to upload
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// `[SLUG] CONTENT`, or just `SLUG` when the content comes from stdin or --file
    #[arg(value_name = "ARGS", num_args = 0..=2)]
    pub args: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GetArgs {
    #[arg(skip)]
    pub common: CommonArgs,

    /// The slug of the paste to retrieve
    #[arg(short = 's', long = "slug")]
    pub slug: Option<String>,

    /// Slug or full paste URL (`del.dog/abc`, `https://hastebin.com/abc.rs`)
    #[arg(value_name = "SLUG_OR_URL")]
    pub reference: Option<String>,
}

impl Cli {
    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::parse_from(itr)
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// The command to run; no subcommand means put.
    pub fn into_command(self) -> Command {
        let mut command = self.command.unwrap_or(Command::Put(self.put));
        match &mut command {
            Command::Put(args) => args.common = self.common,
            Command::Get(args) => args.common = self.common,
        }
        command
    }
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Put(args) => &args.common,
            Command::Get(args) => &args.common,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.common().verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}
