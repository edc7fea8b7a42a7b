//! Configuration for folio
//!
//! Loaded from `config.toml` in the user's config directory. Every field
//! has a default, so a missing file or a partial one both work.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::reactor::{CounterSpec, ObserverOptions, ReactorConfig};
use crate::typing::Pacing;

/// Overrides the config directory (used by tests and packaging).
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";
/// Overrides the state directory holding preferences and logs.
pub const STATE_DIR_ENV: &str = "FOLIO_STATE_DIR";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub typing: TypingConfig,
    pub scroll: ScrollConfig,
    pub contact: ContactConfig,
    pub ui: UiConfig,
}

/// Typing animation pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub dwell_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: 100,
            delete_delay_ms: 50,
            dwell_ms: 1500,
        }
    }
}

impl TypingConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing {
            type_delay: Duration::from_millis(self.type_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            dwell: Duration::from_millis(self.dwell_ms),
        }
    }
}

/// Scroll effects, in terminal rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Rows scrolled before the navbar switches style
    pub navbar_threshold: i64,
    /// Rows subtracted from section tops when picking the active link
    pub header_offset: i64,
    /// Rows left above a section when jumping to it
    pub anchor_offset: i64,
    /// Visible fraction required before an element reveals
    pub reveal_threshold: f64,
    /// Rows added to the bottom of the viewport for reveals (negative shrinks)
    pub reveal_bottom_margin: i64,
    pub stagger_step_ms: u64,
    pub counter_steps: u32,
    pub counter_interval_ms: u64,
    pub resize_debounce_ms: u64,
    pub parallax_debounce_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 3,
            header_offset: 3,
            anchor_offset: 2,
            reveal_threshold: 0.1,
            reveal_bottom_margin: -2,
            stagger_step_ms: 100,
            counter_steps: 50,
            counter_interval_ms: 50,
            resize_debounce_ms: 250,
            parallax_debounce_ms: 10,
        }
    }
}

impl ScrollConfig {
    pub fn reactor_config(&self) -> ReactorConfig {
        ReactorConfig {
            navbar_threshold: self.navbar_threshold,
            header_offset: self.header_offset,
            observer: ObserverOptions {
                threshold: self.reveal_threshold.clamp(0.0, 1.0),
                bottom_margin: self.reveal_bottom_margin,
            },
            stagger_step: Duration::from_millis(self.stagger_step_ms),
            counter: CounterSpec {
                steps: self.counter_steps,
                interval: Duration::from_millis(self.counter_interval_ms),
            },
        }
    }
}

/// Contact form timings and the simulated backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Simulated network delay before the submission resolves
    pub submit_delay_ms: u64,
    /// Probability the simulated submission succeeds
    pub success_rate: f64,
    /// How long a validation message stays visible
    pub error_display_ms: u64,
    /// How long the success/error button state lasts
    pub button_reset_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_rate: 0.9,
            error_display_ms: 5000,
            button_reset_ms: 3000,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Frame interval of the event loop
    pub tick_rate_ms: u64,
    /// How long the page stays blank before fading in
    pub page_fade_ms: u64,
    /// Site content file replacing the built-in portfolio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            page_fade_ms: 100,
            site: None,
        }
    }
}

impl Config {
    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("folio"))
            .context("Could not determine config directory")
    }

    /// Directory for preferences and logs.
    pub fn state_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(STATE_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .map(|d| d.join("folio"))
            .context("Could not determine state directory")
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(1))
    }
}
