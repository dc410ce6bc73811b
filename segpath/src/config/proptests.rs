//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, GrantConfig, StoreConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use std::collections::HashSet;

fn store_strategy() -> impl Strategy<Value = StoreConfig> {
    "[a-z0-9]{1,6}".prop_map(|name| StoreConfig {
        root: format!("/storage/{name}"),
        name,
        primary: false,
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,8}(/[a-z]{1,8}){0,2}"),
        prop::collection::vec(store_strategy(), 0..5),
        prop::collection::vec(("[a-z0-9]{1,6}", "[A-Za-z]{1,8}"), 0..5),
    )
        .prop_map(|(private_dir, stores, grants)| Config {
            private_dir,
            stores,
            grants: grants
                .into_iter()
                .map(|(store, path)| GrantConfig::read_write(&format!("{store}:{path}")))
                .collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    /// Merging into an empty config yields unique store names
    #[test]
    fn merged_store_names_unique(a in config_strategy(), b in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &a);
        ConfigMerger::merge_into(&mut merged, &b);

        let names: HashSet<&str> = merged.stores.iter().map(|s| s.name.as_str()).collect();
        prop_assert_eq!(names.len(), merged.stores.len());
    }

    /// Merging a config into itself changes nothing once deduplicated
    #[test]
    fn merge_idempotent(config in config_strategy()) {
        let mut once = Config::default();
        ConfigMerger::merge_into(&mut once, &config);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &config);
        prop_assert_eq!(once, twice);
    }

    /// The higher layer's private directory wins when set
    #[test]
    fn merge_higher_precedence_wins(a in config_strategy(), b in config_strategy()) {
        let mut merged = a.clone();
        ConfigMerger::merge_into(&mut merged, &b);
        let expected = b.private_dir.or(a.private_dir);
        prop_assert_eq!(merged.private_dir, expected);
    }

    /// Grants referencing only merged stores validate
    #[test]
    fn grants_on_known_stores_validate(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        let known: HashSet<String> = merged.stores.iter().map(|s| s.name.clone()).collect();
        merged.grants.retain(|g| known.contains(g.tree.split(':').next().unwrap_or("")));
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }
}
