//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, GrantCommand, InspectCommand, MatchCommand, NormalizeCommand,
    RelativizeCommand, ResolveCommand, ResolveIdCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for Unix path algebra, glob matching and grant tables.
#[derive(Parser)]
#[command(name = "segpath")]
#[command(version, about = "Inspect Unix paths, globs and grant tables", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read this grant table instead of the default one
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how a path is parsed and decomposed
    Inspect(InspectCommand),

    /// Normalize paths lexically
    Normalize(NormalizeCommand),

    /// Resolve a path against a base path
    Resolve(ResolveCommand),

    /// Print the relative path between two paths
    Relativize(RelativizeCommand),

    /// Print the candidates a glob matches
    Match(MatchCommand),

    /// Report which grant covers each path
    Grant(GrantCommand),

    /// Map a tree document id back to a path
    ResolveId(ResolveIdCommand),

    /// Validate a grant table file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
