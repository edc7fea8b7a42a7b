//! folio command line entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use folio::cli::{Cli, Commands, ConfigCommands, ViewArgs};
use folio::logging::{init_logging, LogTarget, LOG_FILE};
use folio::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::View(_)));
    let target = if interactive {
        LogTarget::File(Config::state_dir()?.join(LOG_FILE))
    } else {
        LogTarget::Stderr
    };
    init_logging(cli.verbose, target)?;

    match cli.command {
        None => commands::view::handle(ViewArgs::default(), Config::load()?),
        Some(Commands::View(args)) => commands::view::handle(args, Config::load()?),
        Some(Commands::Theme { action }) => commands::theme::handle(action),
        Some(Commands::Contact(args)) => commands::contact::handle(args),
        Some(Commands::Config { action }) => match action {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
