//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SEGPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, StoreConfig};
use crate::error::{Error, Result};
use std::env;

/// Overrides the app-private directory.
pub const PRIVATE_DIR_ENV: &str = "SEGPATH_PRIVATE_DIR";

/// Adds stores, as comma-separated `name=/root` pairs.
pub const EXTRA_STORES_ENV: &str = "SEGPATH_EXTRA_STORES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use segpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `SEGPATH_PRIVATE_DIR` replaces the private directory.
    /// `SEGPATH_EXTRA_STORES` appends non-primary stores.
    ///
    /// # Errors
    ///
    /// Returns an error if `SEGPATH_EXTRA_STORES` is malformed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(private_dir) = env::var(PRIVATE_DIR_ENV) {
            config.private_dir = Some(private_dir);
        }

        if let Ok(stores) = env::var(EXTRA_STORES_ENV) {
            config.stores.extend(Self::parse_stores(&stores)?);
        }

        Ok(())
    }

    /// Parse stores from a comma-separated `name=/root` list.
    fn parse_stores(s: &str) -> Result<Vec<StoreConfig>> {
        let mut stores = Vec::new();

        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (name, root) = part.split_once('=').ok_or_else(|| Error::Validation {
                field: EXTRA_STORES_ENV.into(),
                message: format!("Expected name=/root, got: {part}"),
            })?;

            stores.push(StoreConfig {
                name: name.trim().to_string(),
                root: root.trim().to_string(),
                primary: false,
            });
        }

        Ok(stores)
    }
}
