//! Build script for segpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("segpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect Unix paths, globs and grant tables")
        .long_about(
            "Command-line tool for lexical Unix path algebra, shell-glob matching and tree grant tables",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read this grant table instead of the default one")
                .value_name("PATH")
                .global(true),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show how a path is parsed and decomposed")
                .long_about("Print the parsed form of a path, its names, parent and normal form"),
            Command::new("normalize")
                .about("Normalize paths lexically")
                .long_about("Remove '.' names and fold '..' names without touching the file system"),
            Command::new("resolve")
                .about("Resolve a path against a base path")
                .long_about("Resolve a path against a base path, or against the base's parent"),
            Command::new("relativize")
                .about("Print the relative path between two paths")
                .long_about("Print the relative path leading from one path to another"),
            Command::new("match")
                .about("Print the candidates a glob matches")
                .long_about("Filter candidate paths through a shell glob; exits 1 when nothing matches"),
            Command::new("grant")
                .about("Report which grant covers each path")
                .long_about("Report whether each path is unprotected, granted or uncovered"),
            Command::new("resolve-id")
                .about("Map a tree document id back to a path")
                .long_about("Print the absolute path a store:relative document id refers to"),
            Command::new("validate")
                .about("Validate a grant table file")
                .long_about("Check a segpath grant table for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main segpath.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("segpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
