//! View command: the interactive portfolio page

use anyhow::{Context, Result};

use folio::cli::ViewArgs;
use folio::contact::SimulatedSubmitter;
use folio::tui::PortfolioApp;
use folio::{Config, Session, SessionConfig, Site};

use super::open_preferences;

/// Site content from `--site`, then `ui.site`, then the built-in default.
pub fn load_site(args: &ViewArgs, config: &Config) -> Result<Site> {
    match args.site.as_ref().or(config.ui.site.as_ref()) {
        Some(path) => Ok(Site::load(path)?),
        None => Ok(Site::default()),
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: ViewArgs, config: Config) -> Result<()> {
    let site = load_site(&args, &config)?;

    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("The portfolio page needs an interactive terminal");
    }

    let session = Session::new(
        SessionConfig::from(&config),
        &site,
        open_preferences()?,
        SimulatedSubmitter::new(config.contact.success_rate),
    )
    .context("Invalid site content")?;

    let mut app = PortfolioApp::new(session, site, config.tick_rate())?;
    app.run(args.section.as_deref())
}
