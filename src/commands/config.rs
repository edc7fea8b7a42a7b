//! Config subcommands handler

use anyhow::Result;

use folio::Config;

use super::output_theme;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", output_theme().primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the configuration file lives, whether or not it exists.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = output_theme();

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save()?;
        tracing::info!(path = %config_path.display(), "wrote default config");
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    // Catch mistakes right away instead of on the next start.
    if status.success() {
        if let Err(e) = Config::load() {
            println!("{}", theme.error_text(&format!("Warning: {:#}", e)));
        }
    }
    Ok(())
}
