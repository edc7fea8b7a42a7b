//! Logging initialization
//!
//! Structured logging via `tracing`. Verbosity comes from the `-v` flags
//! unless `FOLIO_LOG` holds an explicit filter. The interactive page owns
//! the terminal, so it logs to a file in the state directory; the other
//! commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";
/// Log file name inside the state directory.
pub const LOG_FILE: &str = "folio.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to this file, creating it and its directory if needed
    File(PathBuf),
}

/// Maps a verbosity level to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"` (saturates)
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Install the global subscriber.
///
/// Uses `try_init()` so calling this more than once (e.g. in tests) is safe.
pub fn init_logging(verbosity: u8, target: LogTarget) -> Result<()> {
    let show_target = verbosity >= 2;

    match target {
        LogTarget::Stderr => {
            let use_ansi =
                atty::is(atty::Stream::Stderr) && std::env::var_os("NO_COLOR").is_none();
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(verbosity))
                .with_ansi(use_ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(verbosity))
                .with_ansi(false)
                .with_target(show_target)
                .with_writer(Mutex::new(file))
                .try_init();
        }
    }
    Ok(())
}
