//! Theme subcommand handler

use anyhow::Result;

use folio::cli::ThemeCommands;
use folio::prefs::{FilePreferences, PreferenceStore};
use folio::theme::{load_theme_mode, ThemeMode, THEME_KEY};

use super::open_preferences;

pub fn handle(action: Option<ThemeCommands>) -> Result<()> {
    let mut prefs = open_preferences()?;
    let current = load_theme_mode(&prefs);

    let mode = match action.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => current,
        ThemeCommands::Toggle => store(&mut prefs, current.toggled())?,
        ThemeCommands::Set { mode } => store(&mut prefs, mode)?,
    };

    println!("{}", mode.theme().accent_text(mode.as_str()));
    Ok(())
}

/// Persist `mode`. A failed write is an error here, unlike on the page.
fn store(prefs: &mut FilePreferences, mode: ThemeMode) -> Result<ThemeMode> {
    prefs.set(THEME_KEY, mode.as_str())?;
    tracing::info!(theme = %mode, path = %prefs.path().display(), "theme saved");
    Ok(mode)
}
