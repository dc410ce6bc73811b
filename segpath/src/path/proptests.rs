//! Property-based tests for path handling.
//!
//! Note: the normalize and relationship modules carry their own smaller
//! property tests. This module runs the round-trip and algebra laws over a
//! wider input space, including arbitrary separator runs.

use super::relationship::PathRelationship;
use super::types::UnixPath;
use proptest::prelude::*;

// Strategy for raw text mixing names, dot names and separator runs
fn raw_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9_.-]{1,8}",
            Just(".".to_string()),
            Just("..".to_string()),
            "/{1,3}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn absolute_path_strategy() -> impl Strategy<Value = UnixPath> {
    prop::collection::vec("[a-z0-9_-]{1,10}", 0..8)
        .prop_map(|parts| UnixPath::parse(&format!("/{}", parts.join("/"))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsing the canonical text gives back the same path
    #[test]
    fn parse_display_round_trip(raw in raw_path_strategy()) {
        let parsed = UnixPath::parse(&raw);
        prop_assert_eq!(UnixPath::parse(&parsed.to_string()), parsed);
    }

    // Names never contain the separator
    #[test]
    fn names_never_contain_separator(raw in raw_path_strategy()) {
        let parsed = UnixPath::parse(&raw);
        prop_assert!(parsed.names().all(|n| !n.contains('/')));
    }

    // Only the current path has an empty name
    #[test]
    fn empty_name_only_in_current_path(raw in raw_path_strategy()) {
        let parsed = UnixPath::parse(&raw);
        if parsed.names().any(str::is_empty) {
            prop_assert!(parsed.is_empty());
        }
    }

    // Joining is parsing the joined text
    #[test]
    fn join_matches_parse_of_concatenation(a in "[a-z/]{1,6}", b in "[a-z/]{1,6}") {
        prop_assert_eq!(UnixPath::join([&a, &b]), UnixPath::parse(&format!("{a}/{b}")));
    }

    // Resolving the relativized path leads back to the normalized target
    #[test]
    fn resolve_relativize_round_trip(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let relative = base.relativize(&target).unwrap();
        prop_assert_eq!(base.resolve(&relative).normalize(), target.normalize());
    }

    // Subpaths of every length rebuild the original names
    #[test]
    fn subpath_covers_all_names(path in absolute_path_strategy()) {
        let count = path.name_count();
        if count > 0 {
            let whole = path.subpath(0, count).unwrap();
            prop_assert_eq!(whole.names().collect::<Vec<_>>(), path.names().collect::<Vec<_>>());
        }
    }

    // Relationship types are mutually exclusive and consistent with starts_with
    #[test]
    fn relationship_consistent_with_prefix(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let rel = PathRelationship::between(&p1, &p2);
        match rel {
            PathRelationship::Same => prop_assert_eq!(&p1, &p2),
            PathRelationship::Ancestor => prop_assert!(p2.starts_with(&p1)),
            PathRelationship::Descendant => prop_assert!(p1.starts_with(&p2)),
            PathRelationship::Unrelated => {
                prop_assert!(!p1.starts_with(&p2) && !p2.starts_with(&p1));
            }
        }
    }
}
