//! Configuration merging and precedence handling.
//!
//! Scalars are overridden by later layers. Stores and grants accumulate,
//! with a later entry replacing an earlier one of the same name or tree.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use segpath::config::{Config, ConfigMerger};
///
/// let low = Config { private_dir: Some("low".to_string()), ..Default::default() };
/// let high = Config { private_dir: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.private_dir, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, lowest precedence first.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.private_dir.is_some() {
            target.private_dir.clone_from(&source.private_dir);
        }

        for store in &source.stores {
            match target.stores.iter_mut().find(|s| s.name == store.name) {
                Some(existing) => existing.clone_from(store),
                None => target.stores.push(store.clone()),
            }
        }

        for grant in &source.grants {
            match target.grants.iter_mut().find(|g| g.tree == grant.tree) {
                Some(existing) => existing.clone_from(grant),
                None => target.grants.push(grant.clone()),
            }
        }
    }
}
