//! Shell completion generation

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use folio::cli::Cli;

pub fn handle(shell: Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
