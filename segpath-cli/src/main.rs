//! Main entry point for the segpath CLI.
//!
//! This is the command-line interface for the segpath library.
//! It provides commands for working with paths and grants:
//! - `inspect`, `normalize`, `resolve`, `relativize`: path algebra
//! - `match`: glob matching over candidate paths
//! - `grant`, `resolve-id`, `validate`: grant table queries

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    let logger = segpath::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Relativize(cmd) => cmd.execute(&global),
        cli::Command::Match(cmd) => cmd.execute(&global),
        cli::Command::Grant(cmd) => cmd.execute(&global),
        cli::Command::ResolveId(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
