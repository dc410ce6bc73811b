//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including grant table loading and output helpers.

use crate::error::CliError;
use clap::ValueEnum;
use segpath::{Config, ConfigBuilder, GrantIndex};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose and quiet are applied through the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Grant table to read instead of the default one.
    pub config: Option<PathBuf>,
}

/// Output format shared by commands that report structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per item
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// Load the layered grant table.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or the default grant table if it exists
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    log::debug!(
        "loaded {} store(s) and {} grant(s)",
        config.stores.len(),
        config.grants.len()
    );
    Ok(config)
}

/// Load the grant table and index it.
pub fn load_grant_index(global: &GlobalOptions) -> Result<GrantIndex, CliError> {
    let config = load_configuration(global)?;
    GrantIndex::from_config(&config).map_err(|e| CliError::Config(e.to_string()))
}

/// Use the given arguments, or read one item per non-empty line from stdin
/// when there are none.
pub fn args_or_stdin(args: Vec<String>) -> Result<Vec<String>, CliError> {
    if !args.is_empty() {
        return Ok(args);
    }

    let stdin = io::stdin();
    let mut items = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.is_empty() {
            items.push(line);
        }
    }
    Ok(items)
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(io::Error::new(io::ErrorKind::Other, e)))?;
    writeln!(handle)?;
    Ok(())
}
