use anyhow::Result;

use neo_chat::cli::commands::{chat, configure};
use neo_chat::cli::{Args, Command};
use neo_chat::i18n::print_languages;
use neo_chat::logging;
use neo_chat::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_checked();

    let default_output = OutputConfig::default();
    output::init(OutputConfig {
        no_color: args.no_color || default_output.no_color,
    });
    logging::init(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat(chat_args)) => {
            chat::run_chat(chat_args).await?;
        }
        None => {
            chat::run_chat(args.chat).await?;
        }
    }

    Ok(())
}
