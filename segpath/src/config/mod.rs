//! Grant table configuration.
//!
//! This module provides layered configuration with support for:
//! - A YAML grant table file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEGPATH_*`)
//! 3. The grant table file (`$SEGPATH_CONFIG` or `~/.segpath/grants.yaml`)
//!
//! # File format
//!
//! ```yaml
//! private_dir: Android/data/org.example.app
//! stores:
//!   - name: primary
//!     root: /storage/emulated/0
//!     primary: true
//!   - name: 1234-ABCD
//!     root: /storage/1234-ABCD
//! grants:
//!   - tree: "1234-ABCD:Music"
//!     read: true
//!     write: true
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use segpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("{} grants", config.grants.len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, GrantConfig, StoreConfig};
pub use validator::ConfigValidator;
