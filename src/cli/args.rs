use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

// Ids of the flattened top-level `ChatArgs`.
const TOP_LEVEL_CHAT_ARGS: [&str; 4] = ["endpoint", "language", "theme", "offline"];

#[derive(Parser, Debug)]
#[command(name = "neochat")]
#[command(about = "Neo Support terminal chat client")]
#[command(version)]
pub struct Args {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options for the interactive chat.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ChatArgs {
    /// Backend endpoint URL
    #[arg(short = 'e', long, env = "NEOCHAT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Interface language code (en, hi)
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Color theme (light, dark)
    #[arg(short = 't', long)]
    pub theme: Option<String>,

    /// Reply with canned responses instead of calling the backend
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse_checked() -> Self {
        Self::try_parse_checked(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Like [`Parser::try_parse_from`], but rejects chat options given before
    /// a subcommand, which would otherwise be silently ignored.
    ///
    /// Values taken from the environment never conflict.
    pub fn try_parse_checked<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(args)?;

        if let Some(subcommand) = matches.subcommand_name() {
            let misplaced = TOP_LEVEL_CHAT_ARGS
                .into_iter()
                .find(|id| matches.value_source(id) == Some(ValueSource::CommandLine));
            if let Some(id) = misplaced {
                return Err(cmd.error(
                    ErrorKind::ArgumentConflict,
                    format!(
                        "'--{id}' cannot be used before '{subcommand}'; \
                         chat options go after 'chat'"
                    ),
                ));
            }
        }

        Self::from_arg_matches(&matches)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive chat (default)
    Chat(ChatArgs),
    /// Configure default endpoint, language and theme
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported interface language codes
    Languages,
}
