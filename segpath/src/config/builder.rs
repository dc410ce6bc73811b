//! Layered configuration construction.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builds a validated [`Config`] from file, environment and programmatic
/// layers, in that order of increasing precedence.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigBuilder, StoreConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         stores: vec![StoreConfig {
///             name: "sd".to_string(),
///             root: "/storage/sd".to_string(),
///             primary: false,
///         }],
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.stores[0].name, "sd");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder reading the default file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` instead of the default grant table. Unlike the default
    /// file, an explicit file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `SEGPATH_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Add a programmatic layer; later layers take precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merge the layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// override is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            match self.config_file {
                Some(path) => {
                    let config = ConfigLoader::load_file(&path)?;
                    sources.push(ConfigSource { path, config });
                }
                None => sources.extend(ConfigLoader::load_default()?),
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        log::debug!(
            "grant table: {} store(s), {} grant(s)",
            config.stores.len(),
            config.grants.len()
        );
        Ok(config)
    }
}
