//! Integration tests for the path value and its lexical algebra.
//!
//! These tests pin down the observable string forms of parsing, joining,
//! decomposition, prefix/suffix tests, resolution, normalization and
//! relativization through the public API only.

use segpath::{PathRelationship, UnixPath};

fn p(raw: &str) -> UnixPath {
    UnixPath::parse(raw)
}

fn strings(paths: impl Iterator<Item = UnixPath>) -> Vec<String> {
    paths.map(|path| path.to_string()).collect()
}

// ============================================================================
// Parsing and joining
// ============================================================================

#[test]
fn test_parse_sanitizes() {
    let cases = [
        ("//////", "/"),
        ("///", "/"),
        ("///foo///", "/foo"),
        ("//./foo//./", "/./foo/."),
        ("foo/", "foo"),
        ("//foo///bar//", "/foo/bar"),
        ("foo/bar///", "foo/bar"),
        ("foo////bar", "foo/bar"),
        ("foo/bar////////baz", "foo/bar/baz"),
    ];
    for (raw, expected) in cases {
        assert_eq!(p(raw).to_string(), expected, "parse({raw:?})");
    }
}

#[test]
fn test_join() {
    let cases: [(&[&str], &str); 14] = [
        (&["", ""], ""),
        (&["/", ""], "/"),
        (&["", "/"], "/"),
        (&["/", "/"], "/"),
        (&["/", "foo/", "bar/"], "/foo/bar"),
        (&["/foo/", "/bar"], "/foo/bar"),
        (&["foo", "bar"], "foo/bar"),
        (&["/foo", "bar////baz"], "/foo/bar/baz"),
        (&["/foo/", "bar////////"], "/foo/bar"),
        (&["a/b", "c"], "a/b/c"),
        (&["a", "b", "c"], "a/b/c"),
        (&["a", "b/c"], "a/b/c"),
        (&["/", "////c"], "/c"),
        (&[], ""),
    ];
    for (parts, expected) in cases {
        assert_eq!(UnixPath::join(parts).to_string(), expected, "join({parts:?})");
    }
}

#[test]
fn test_parse_is_idempotent_on_samples() {
    for raw in ["", "/", "a//b/", "/./x/..", "..//..", "/a/b/c/"] {
        let once = p(raw);
        assert_eq!(p(&once.to_string()), once, "reparse of {raw:?}");
    }
}

// ============================================================================
// Decomposition
// ============================================================================

#[test]
fn test_iteration() {
    assert_eq!(strings(p("").iter()), [""]);
    assert_eq!(strings(p("foo").iter()), ["foo"]);
    assert_eq!(strings(p("foo/bar").iter()), ["foo", "bar"]);
    assert_eq!(strings(p("/foo").iter()), ["foo"]);
    assert_eq!(strings(p("/foo/bar").iter()), ["foo", "bar"]);
    assert_eq!(strings(p("/Test/../Test").iter()), ["Test", "..", "Test"]);
    assert!(p("/").iter().next().is_none());
}

#[test]
fn test_name_count() {
    let cases = [
        ("", 1),
        ("/", 0),
        ("/foo", 1),
        ("/foo/bar", 2),
        ("foo", 1),
        ("../bar", 2),
        ("/Test/../Test", 3),
    ];
    for (raw, count) in cases {
        assert_eq!(p(raw).name_count(), count, "name_count({raw:?})");
    }
}

#[test]
fn test_subpath() {
    assert_eq!(p("").subpath(0, 1).unwrap().to_string(), "");
    assert_eq!(p("foo").subpath(0, 1).unwrap().to_string(), "foo");
    assert_eq!(p("foo/bar").subpath(1, 2).unwrap().to_string(), "bar");
    assert_eq!(p("/foo").subpath(0, 1).unwrap().to_string(), "foo");
    assert_eq!(p("/foo/bar").subpath(0, 2).unwrap().to_string(), "foo/bar");
    assert_eq!(p("/foo/bar").subpath(1, 2).unwrap().to_string(), "bar");
}

#[test]
fn test_subpath_out_of_range() {
    for (raw, begin, end) in [("/", 0, 1), ("foo", 1, 1), ("foo", 0, 2), ("a/b", 2, 1)] {
        let err = p(raw).subpath(begin, end).unwrap_err();
        assert!(err.is_invalid_argument(), "subpath({raw:?}, {begin}, {end})");
    }
}

#[test]
fn test_name() {
    assert_eq!(p("").name(0).unwrap().to_string(), "");
    assert_eq!(p("foo").name(0).unwrap().to_string(), "foo");
    assert_eq!(p("/foo").name(0).unwrap().to_string(), "foo");
    assert_eq!(p("foo/bar").name(1).unwrap().to_string(), "bar");
    assert_eq!(p("/foo/bar").name(1).unwrap().to_string(), "bar");
    assert_eq!(p("/Test/../Test").name(0).unwrap().to_string(), "Test");
    assert_eq!(p("/Test/../Test").name(1).unwrap().to_string(), "..");
    assert!(p("/").name(0).unwrap_err().is_invalid_argument());
    assert!(p("foo").name(1).unwrap_err().is_invalid_argument());
}

#[test]
fn test_file_name() {
    assert!(p("/").file_name().is_none());
    assert_eq!(p("").file_name().unwrap().to_string(), "");
    assert_eq!(p("/foo").file_name().unwrap().to_string(), "foo");
    assert_eq!(p("/foo/bar").file_name().unwrap().to_string(), "bar");
    assert_eq!(p("foo").file_name().unwrap().to_string(), "foo");
    assert_eq!(p("foo/bar").file_name().unwrap().to_string(), "bar");
}

#[test]
fn test_parent() {
    assert!(p("").parent().is_none());
    assert!(p("/").parent().is_none());
    assert!(p("foo").parent().is_none());
    assert_eq!(p("foo/bar/baz").parent().unwrap().to_string(), "foo/bar");
    assert_eq!(p("foo/bar").parent().unwrap().to_string(), "foo");
    assert_eq!(p("/foo/bar/baz").parent().unwrap().to_string(), "/foo/bar");
    assert_eq!(p("/foo/bar").parent().unwrap().to_string(), "/foo");
    assert_eq!(p("/foo").parent().unwrap().to_string(), "/");
}

// ============================================================================
// Prefix and suffix
// ============================================================================

#[test]
fn test_starts_with() {
    let cases = [
        ("", "", true),
        ("/foo", "/", true),
        ("foo", "foo", true),
        ("foo/bar", "foo", true),
        ("foo/bar", "foo/bar", true),
        ("/foo/bar", "/foo/bar", true),
        ("/foo", "foo", false),
        ("/foo/bar", "foo/bar", false),
        ("foo/bar", "/foo", false),
        ("foo/bar", "fo", false),
        ("foo", "f", false),
        ("foo/bar", "", false),
    ];
    for (path, prefix, expected) in cases {
        assert_eq!(
            p(path).starts_with(&p(prefix)),
            expected,
            "{path:?}.starts_with({prefix:?})"
        );
    }
}

#[test]
fn test_ends_with() {
    let cases = [
        ("", "", true),
        ("/", "/", true),
        ("foo/..", "..", true),
        (".", ".", true),
        ("foo", "foo", true),
        ("foo/bar", "bar", true),
        ("foo/bar", "foo/bar", true),
        ("/foo/bar", "/foo/bar", true),
        ("foo..", "..", false),
        ("/foo/bar", "/foo", false),
        ("/foo", "", false),
        ("foo/bar", "ar", false),
        ("bar", "b", false),
        ("foo/bar", "/bar", false),
        ("/foo/bar", "/bar", false),
    ];
    for (path, suffix, expected) in cases {
        assert_eq!(
            p(path).ends_with(&p(suffix)),
            expected,
            "{path:?}.ends_with({suffix:?})"
        );
    }
}

// ============================================================================
// Resolution, normalization, relativization
// ============================================================================

#[test]
fn test_resolve() {
    let cases = [
        ("", "", ""),
        ("", "/", "/"),
        ("/", "", "/"),
        ("/", "/", "/"),
        ("", "foo", "foo"),
        ("", "/foo", "/foo"),
        ("/storage", "sd/Music", "/storage/sd/Music"),
    ];
    for (base, other, expected) in cases {
        assert_eq!(
            p(base).resolve(&p(other)).to_string(),
            expected,
            "{base:?}.resolve({other:?})"
        );
    }
}

#[test]
fn test_normalize() {
    let cases = [
        ("/", "/"),
        ("a/./b", "a/b"),
        ("a/b/..", "a"),
        ("a/..", ""),
        ("..", ".."),
        ("../a/b/..", "../a"),
        (".", ""),
    ];
    for (raw, expected) in cases {
        assert_eq!(p(raw).normalize().to_string(), expected, "normalize({raw:?})");
    }
}

#[test]
fn test_relativize() {
    let cases = [
        ("/a/b", "/a/b/c/d", "c/d"),
        ("/a/b", "/a/x", "../x"),
        ("/a/b/c/../..", "/a/b/c/d", "b/c/d"),
        ("/a/b/c", "/a/x", "../../x"),
        ("/a/b", "/a", ".."),
        ("/a/b/..", "/a/b/c", "b/c"),
        ("../a", "../a/b", "b"),
        ("a/../b", "a/../b/c", "c"),
        ("a/../b", "a/../b/c/..", ""),
        ("a/../b", "a/../b/..", ".."),
        ("./.", ".", ""),
        ("a", "a/../..", "../.."),
        ("a", "a/b/..", ""),
        ("/", "/.", ""),
    ];
    for (base, other, expected) in cases {
        assert_eq!(
            p(base).relativize(&p(other)).unwrap().to_string(),
            expected,
            "{base:?}.relativize({other:?})"
        );
    }
}

#[test]
fn test_relativize_then_resolve_round_trip() {
    let base = p("/storage/sd/Music");
    let target = p("/storage/sd/DCIM/Camera");
    let relative = base.relativize(&target).unwrap();
    assert_eq!(relative.to_string(), "../../DCIM/Camera");
    assert_eq!(base.resolve(&relative).normalize(), target);
}

#[test]
fn test_relationship_of_store_paths() {
    let store = p("/storage/1234-ABCD");
    let file = p("/storage/1234-ABCD/Music/../DCIM/a.jpg");
    assert_eq!(
        PathRelationship::between(&store, &file),
        PathRelationship::Ancestor
    );
    assert!(PathRelationship::is_within(&file, &store));
    assert!(!PathRelationship::is_within(&p("/storage/emulated/0"), &store));
}
