//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Isolated config and state directories for one CLI run.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("config")).expect("config dir");
        fs::create_dir_all(dir.path().join("state")).expect("state dir");
        Self { dir }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `config.toml` with the given contents.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_dir().join("config.toml"), content).expect("write config");
    }

    /// `folio` preconfigured with this environment, for assert_cmd.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("folio").expect("folio binary");
        cmd.env("FOLIO_CONFIG_DIR", self.config_dir())
            .env("FOLIO_STATE_DIR", self.state_dir())
            .env("NO_COLOR", "1")
            .env_remove("FOLIO_LOG");
        cmd
    }

    /// Run folio and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_folio"))
            .args(args)
            .env("FOLIO_CONFIG_DIR", self.config_dir())
            .env("FOLIO_STATE_DIR", self.state_dir())
            .env("NO_COLOR", "1")
            .env_remove("FOLIO_LOG")
            .output()
            .expect("Failed to execute folio");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        (stdout, stderr, exit_code)
    }
}

/// Write a site file into `dir` and return its path.
pub fn write_site(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("site.toml");
    fs::write(&path, content).expect("write site");
    path
}
