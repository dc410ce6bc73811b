//! Command to validate a grant table file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use segpath::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a grant table file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Grant table to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Grant table is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the grant table
        match ConfigValidator::validate(&config) {
            Ok(()) => {
                println!("Grant table is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Grant table validation failed".to_string(),
                ))
            }
        }
    }
}
