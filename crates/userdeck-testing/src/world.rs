//! TestWorld pattern for declarative CLI test setup.
//!
//! Provides:
//! - An isolated data directory per test
//! - A saved API response the CLI reads instead of the network
//! - Command execution with the environment scrubbed of user settings

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use userdeck_types::UserRecord;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use userdeck_testing::{fixtures, TestWorld};
///
/// let world = TestWorld::new().with_users(&fixtures::trio());
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    response_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with no user source.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".userdeck");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            response_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Save a response containing `users` and point the CLI at it.
    pub fn with_users(mut self, users: &[UserRecord]) -> Self {
        let path = self.temp_dir.path().join("response.json");
        std::fs::write(&path, fixtures::response_json(users)).expect("Failed to write response");
        self.response_path = Some(path);
        self
    }

    /// Point the CLI at a response file with arbitrary content.
    pub fn with_raw_response(mut self, body: &str) -> Self {
        let path = self.temp_dir.path().join("response.json");
        std::fs::write(&path, body).expect("Failed to write response");
        self.response_path = Some(path);
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Configure a CLI command with this environment's data dir and source.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(&self.data_dir);

        if let Some(path) = &self.response_path {
            cmd.arg("--input").arg(path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("USERDECK_PATH");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the userdeck binary with `args` and capture the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("userdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find userdeck binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
