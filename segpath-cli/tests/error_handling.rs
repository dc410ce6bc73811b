//! Integration tests for error handling and exit codes.
//!
//! These tests verify that segpath returns appropriate exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (nothing matched, path uncovered)
//! - Exit code 4: Invalid arguments, including malformed globs
//! - Exit code 5: I/O error
//! - Exit code 6: Other library errors
//! - Exit code 7: Configuration error

mod common;

use common::{TestEnv, SDCARD_GRANTS};
use predicates::prelude::*;

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

#[test]
fn test_match_nothing_exit_code() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["match", "*.mp3", "a.ogg", "b/c.mp3"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No candidate matched"));
}

#[test]
fn test_grant_check_uncovered() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .args(["grant", "--check", "/storage/1234-ABCD/Podcasts/a.mp3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("uncovered"))
        .stderr(predicate::str::contains("not covered"));
}

#[test]
fn test_grant_check_all_covered() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .args(["grant", "--check", "/storage/1234-ABCD/Music/a.mp3"])
        .assert()
        .code(0);
}

#[test]
fn test_validate_invalid_table() {
    let env = TestEnv::new();
    let path = env.write_file(
        "bad.yaml",
        "stores:\n  - name: sd\n    root: storage/sd\n",
    );
    env.command_bare()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stores[0].root"));
}

#[test]
fn test_validate_unparseable_table() {
    let env = TestEnv::new();
    let path = env.write_file("bad.yaml", "stores: [name: sd\n");
    env.command_bare()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

#[test]
fn test_malformed_glob() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["match", "{foo,bar{baz}}", "foo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid glob"));

    env.command_bare()
        .args(["match", "--names", "[z-a]", "foo"])
        .assert()
        .code(4);
}

#[test]
fn test_relativize_mixed_absoluteness() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["relativize", "/a/b", "a/x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("only one path is absolute"));
}

#[test]
fn test_grant_relative_path() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .args(["grant", "storage/1234-ABCD/Music"])
        .assert()
        .code(4);
}

#[test]
fn test_resolve_id_malformed() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .args(["resolve-id", "Music/a.mp3"])
        .assert()
        .code(4);
}

#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("validate")
        .arg(env.path().join("absent.yaml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Other Library Errors (Exit Code 6)
// ============================================================================

#[test]
fn test_resolve_id_unknown_store() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .args(["resolve-id", "usb:Music"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("store usb"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();
    env.command()
        .args(["grant", "/storage/1234-ABCD/Music"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_store_in_grant_table() {
    let env = TestEnv::with_grants(
        "stores:\n  - name: sd\n    root: /storage/sd\ngrants:\n  - \"usb:Music\"\n",
    );
    env.command()
        .args(["grant", "/storage/sd/Music"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Unknown store"));
}

#[test]
fn test_malformed_env_stores() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command()
        .env("SEGPATH_EXTRA_STORES", "usb")
        .args(["grant", "/storage/1234-ABCD/Music"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("SEGPATH_EXTRA_STORES"));
}

// ============================================================================
// Argument Parsing (clap, Exit Code 2)
// ============================================================================

#[test]
fn test_unknown_subcommand() {
    let env = TestEnv::new();
    env.command_bare().arg("frobnicate").assert().code(2);
}

#[test]
fn test_grant_requires_paths() {
    let env = TestEnv::with_grants(SDCARD_GRANTS);
    env.command().arg("grant").assert().code(2);
}
