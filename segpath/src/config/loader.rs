//! Configuration file discovery and loading.
//!
//! The grant table is read from `$SEGPATH_CONFIG` when set, otherwise from
//! `~/.segpath/grants.yaml`.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit grant table file.
pub const CONFIG_ENV: &str = "SEGPATH_CONFIG";

/// A configuration file together with the path it was read from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use segpath::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_default().unwrap() {
///     println!("{} stores in {}", source.config.stores.len(), source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the default grant table, if the file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Option<ConfigSource>> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("no grant table at {}", path.display());
            return Ok(None);
        }
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read and a configuration
    /// error if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading grant table from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// The default grant table path.
    ///
    /// # Errors
    ///
    /// Returns an error if `SEGPATH_CONFIG` is unset and the home directory
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(explicit) = env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(explicit));
        }
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            resource: "home directory".to_string(),
        })?;
        Ok(home.join(".segpath").join("grants.yaml"))
    }
}
