//! Theme configuration for TUI and CLI
//!
//! Light and dark palettes, the persisted theme preference, and ANSI
//! helpers for plain CLI output.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::prefs::PreferenceStore;

/// Preference key holding the theme name.
pub const THEME_KEY: &str = "theme";

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Read the saved theme. Absent or unrecognised values mean light.
pub fn load_theme_mode(prefs: &dyn PreferenceStore) -> ThemeMode {
    prefs
        .get(THEME_KEY)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

/// Persist `mode`. Failures are logged and otherwise ignored; the theme
/// still changes for the running session.
pub fn save_theme_mode(prefs: &mut dyn PreferenceStore, mode: ThemeMode) {
    if let Err(e) = prefs.set(THEME_KEY, mode.as_str()) {
        tracing::warn!(error = %e, "could not persist theme preference");
    }
}

/// Palette used for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for headings, active links and highlights
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Page background
    pub background: Color,
    /// Card and navbar surface when scrolled
    pub surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme - dark text on a pale page.
    pub fn light() -> Self {
        Self {
            text_primary: Color::Rgb(30, 41, 59),
            text_secondary: Color::Rgb(100, 116, 139),
            accent: Color::Rgb(99, 102, 241),
            error: Color::Rgb(220, 38, 38),
            success: Color::Rgb(22, 163, 74),
            background: Color::Rgb(248, 250, 252),
            surface: Color::Rgb(226, 232, 240),
        }
    }

    /// Dark theme - light text on a slate page.
    pub fn dark() -> Self {
        Self {
            text_primary: Color::Rgb(241, 245, 249),
            text_secondary: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(129, 140, 248),
            error: Color::Rgb(239, 68, 68),
            success: Color::Rgb(74, 222, 128),
            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
        }
    }

    // Style helpers

    /// Base style for the page.
    pub fn page_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Bold accent (headings, keybindings, active link).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn surface_style(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(color: Color, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    match color_to_ansi(color) {
        Some(code) => format!("{}{}{}", code, text, ANSI_RESET),
        None => text.to_string(),
    }
}

/// Convert a ratatui Color to an ANSI foreground escape code.
fn color_to_ansi(color: Color) -> Option<String> {
    let code = match color {
        Color::Black => "\x1b[30m".to_string(),
        Color::Red => "\x1b[31m".to_string(),
        Color::Green => "\x1b[32m".to_string(),
        Color::Yellow => "\x1b[33m".to_string(),
        Color::Blue => "\x1b[34m".to_string(),
        Color::Magenta => "\x1b[35m".to_string(),
        Color::Cyan => "\x1b[36m".to_string(),
        Color::Gray => "\x1b[37m".to_string(),
        Color::DarkGray => "\x1b[90m".to_string(),
        Color::White => "\x1b[97m".to_string(),
        Color::Rgb(r, g, b) => format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(i) => format!("\x1b[38;5;{}m", i),
        _ => return None,
    };
    Some(code)
}
