//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture accessors for testing
//! the segpath library.

use std::env;
use std::path::PathBuf;

use segpath::UnixPath;

/// Shorthand for parsing a path.
#[allow(dead_code)]
pub fn p(raw: &str) -> UnixPath {
    UnixPath::parse(raw)
}

/// Path to a grant table fixture under `tests/fixtures/grants`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("grants")
        .join(name)
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Sets environment variables for the lifetime of the guard and restores the
/// previous values on drop.
///
/// Tests using this must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Creates a guard that has not changed anything yet.
    pub fn new() -> Self {
        Self { saved: Vec::new() }
    }

    /// Sets `key` to `value`, remembering the previous value.
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.saved.push((key.to_string(), env::var(key).ok()));
        env::set_var(key, value);
        self
    }

    /// Removes `key`, remembering the previous value.
    pub fn remove(mut self, key: &str) -> Self {
        self.saved.push((key.to_string(), env::var(key).ok()));
        env::remove_var(key);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            match value {
                Some(value) => env::set_var(&key, value),
                None => env::remove_var(&key),
            }
        }
    }
}
