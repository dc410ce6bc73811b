//! Command to normalize paths lexically.

use crate::error::CliError;
use crate::utils::{args_or_stdin, GlobalOptions};
use clap::Args;
use segpath::UnixPath;

/// Normalize paths, removing `.` names and folding `..` where possible.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for raw in args_or_stdin(self.paths)? {
            println!("{}", UnixPath::parse(&raw).normalize());
        }
        Ok(())
    }
}
