//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod contact;
pub mod theme;
pub mod view;

use folio::config::Config;
use folio::prefs::FilePreferences;
use folio::theme::{load_theme_mode, Theme};

/// Preference store in the user's state directory.
pub fn open_preferences() -> anyhow::Result<FilePreferences> {
    Ok(FilePreferences::in_dir(&Config::state_dir()?))
}

/// Palette for printed output, following the saved theme.
pub fn output_theme() -> Theme {
    open_preferences()
        .map(|prefs| load_theme_mode(&prefs).theme())
        .unwrap_or_default()
}
