//! Build script for folio - embeds git commit hash and build date
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` with the commit hash
//! - Emits `FOLIO_VERSION` as "<pkg version> (<sha> <date>)"
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits `FOLIO_VERSION` as "<pkg version> (<date>)", without the hash

use std::env;
use std::process::Command;

/// Get the current date in YYYY-MM-DD format
fn get_build_date() -> String {
    if let Ok(output) = Command::new("date").args(["+%Y-%m-%d"]).output() {
        if output.status.success() {
            return String::from_utf8_lossy(&output.stdout).trim().to_string();
        }
    }
    "unknown".to_string()
}

#[cfg(not(feature = "release"))]
fn git_sha() -> String {
    use vergen_gitcl::{Emitter, GitclBuilder};

    // Use graceful fallback if git info is unavailable
    let emitted = GitclBuilder::default()
        .sha(true)
        .build()
        .map_err(|e| e.to_string())
        .and_then(|git| {
            Emitter::default()
                .add_instructions(&git)
                .and_then(|emitter| emitter.emit())
                .map_err(|e| e.to_string())
        });
    if let Err(e) = emitted {
        eprintln!("cargo:warning=Failed to get git info: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }

    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_default();
    let build_date = get_build_date();
    println!("cargo:rustc-env=FOLIO_BUILD_DATE={}", build_date);

    #[cfg(not(feature = "release"))]
    println!(
        "cargo:rustc-env=FOLIO_VERSION={} ({} {})",
        version,
        git_sha(),
        build_date
    );

    #[cfg(feature = "release")]
    println!("cargo:rustc-env=FOLIO_VERSION={} ({})", version, build_date);
}
