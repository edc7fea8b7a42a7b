//! Command line definitions
//!
//! Lives in the library so xtask can generate man pages from it.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::content::SECTIONS;
use crate::theme::ThemeMode;

/// Version string including the git hash and build date.
pub const VERSION: &str = env!("FOLIO_VERSION");

/// Terminal portfolio with a typing hero, scroll-driven reveals and a
/// contact form.
#[derive(Debug, Parser)]
#[command(name = "folio", version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the portfolio page (default)
    View(ViewArgs),

    /// Show or change the saved color theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },

    /// Send a message through the contact form without the page
    Contact(ContactArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Default, Args)]
pub struct ViewArgs {
    /// Site content file replacing the built-in portfolio
    #[arg(long, value_name = "FILE")]
    pub site: Option<PathBuf>,

    /// Open the page scrolled to this section
    #[arg(long, value_name = "ID", value_parser = section_ids())]
    pub section: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the saved theme (default)
    Show,
    /// Switch between light and dark
    Toggle,
    /// Save a specific theme
    Set { mode: ThemeMode },
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
    /// Submit immediately instead of waiting for the simulated send delay
    #[arg(long)]
    pub no_delay: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Open the configuration file in $EDITOR
    Edit,
}

fn section_ids() -> clap::builder::PossibleValuesParser {
    clap::builder::PossibleValuesParser::new(SECTIONS.map(|(id, _)| id))
}
