//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers for common patterns
//! - Grant table fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A grant table with a primary store, a removable store and three grants.
#[allow(dead_code)]
pub const SDCARD_GRANTS: &str = "\
private_dir: Android/data/org.example.app
stores:
  - name: primary
    root: /storage/emulated/0
    primary: true
  - name: 1234-ABCD
    root: /storage/1234-ABCD
grants:
  - tree: \"1234-ABCD:Music\"
    read: true
    write: true
  - tree: \"1234-ABCD:DCIM\"
    read: true
  - \"primary:Download\"
";

/// Test environment with an isolated home directory.
///
/// Commands run with `HOME` pointing into a temporary directory and with the
/// `SEGPATH_*` variables cleared, so a developer's own grant table never
/// leaks into a test.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the grant table written by `with_grants`
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with no grant table.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("grants.yaml");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Create a test environment whose grant table holds `contents`.
    pub fn with_grants(contents: &str) -> Self {
        let env = Self::new();
        std::fs::write(&env.config_path, contents).expect("Failed to write grant table");
        env
    }

    /// Get a command builder with an isolated environment and no `--config`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("segpath").expect("Failed to find segpath binary");
        cmd.env("HOME", &self.temp_path)
            .env_remove("SEGPATH_CONFIG")
            .env_remove("SEGPATH_PRIVATE_DIR")
            .env_remove("SEGPATH_EXTRA_STORES")
            .env_remove("SEGPATH_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--config` pointing at this environment's
    /// grant table.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
