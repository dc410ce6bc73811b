//! Configuration validation.
//!
//! Checks that a grant table is internally consistent before a
//! [`GrantIndex`](crate::grant::GrantIndex) is built from it.

use crate::config::schema::{split_document_id, Config, GrantConfig, StoreConfig};
use crate::error::{Error, Result};
use crate::path::UnixPath;
use std::collections::HashSet;

/// Validates grant table configuration.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field when:
    /// - a store name is empty, contains `:` or `/`, or is duplicated
    /// - a store root is not absolute
    /// - more than one store is primary
    /// - the private directory is absolute or climbs with `..`
    /// - a grant tree has no `:`, names an unknown store, or has a path that
    ///   is absolute or climbs above the store root
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref private_dir) = config.private_dir {
            Self::validate_private_dir(private_dir)?;
        }

        let mut names = HashSet::new();
        let mut primary: Option<&str> = None;
        for (i, store) in config.stores.iter().enumerate() {
            Self::validate_store(i, store)?;
            if !names.insert(store.name.as_str()) {
                return Err(Error::Validation {
                    field: format!("stores[{i}].name"),
                    message: format!("Duplicate store name: {}", store.name),
                });
            }
            if store.primary {
                if let Some(first) = primary {
                    return Err(Error::Validation {
                        field: format!("stores[{i}].primary"),
                        message: format!("Store {first} is already primary"),
                    });
                }
                primary = Some(store.name.as_str());
            }
        }

        for (i, grant) in config.grants.iter().enumerate() {
            Self::validate_grant(i, grant, &names)?;
        }

        Ok(())
    }

    fn validate_private_dir(private_dir: &str) -> Result<()> {
        let path = UnixPath::parse(private_dir);
        if path.is_absolute() {
            return Err(Error::Validation {
                field: "private_dir".into(),
                message: "Must be relative to the store roots".into(),
            });
        }
        if path.names().any(|name| name == "..") {
            return Err(Error::Validation {
                field: "private_dir".into(),
                message: "Cannot contain '..'".into(),
            });
        }
        Ok(())
    }

    fn validate_store(i: usize, store: &StoreConfig) -> Result<()> {
        let name = store.name.trim();
        if name.is_empty() {
            return Err(Error::Validation {
                field: format!("stores[{i}].name"),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if name.contains(':') || name.contains('/') {
            return Err(Error::Validation {
                field: format!("stores[{i}].name"),
                message: format!("Cannot contain ':' or '/': {name}"),
            });
        }
        if !UnixPath::parse(&store.root).is_absolute() {
            return Err(Error::Validation {
                field: format!("stores[{i}].root"),
                message: format!("Must be an absolute path: {}", store.root),
            });
        }
        Ok(())
    }

    fn validate_grant(i: usize, grant: &GrantConfig, stores: &HashSet<&str>) -> Result<()> {
        let Some((store, relative)) = split_document_id(&grant.tree) else {
            return Err(Error::Validation {
                field: format!("grants[{i}].tree"),
                message: format!("Expected store:path, got: {}", grant.tree),
            });
        };
        if !stores.contains(store) {
            return Err(Error::Validation {
                field: format!("grants[{i}].tree"),
                message: format!("Unknown store: {store}"),
            });
        }
        let path = UnixPath::parse(relative);
        if path.is_absolute() || path.normalize().names().next() == Some("..") {
            return Err(Error::Validation {
                field: format!("grants[{i}].tree"),
                message: format!("Path must stay inside store {store}: {relative}"),
            });
        }
        Ok(())
    }
}
