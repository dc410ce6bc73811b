//! Command to resolve one path against another.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use segpath::UnixPath;

/// Resolve paths against a base path, each against the previous result.
#[derive(Args)]
pub struct ResolveCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Paths to resolve, in order
    #[arg(value_name = "OTHER", required = true)]
    pub others: Vec<String>,

    /// Resolve each path against the parent of the previous result
    #[arg(long)]
    pub sibling: bool,

    /// Normalize the result
    #[arg(long)]
    pub normalize: bool,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolved = UnixPath::parse(&self.base);
        for raw in &self.others {
            let other = UnixPath::parse(raw);
            resolved = if self.sibling {
                resolved.resolve_sibling(&other)
            } else {
                resolved.resolve(&other)
            };
        }
        if self.normalize {
            resolved = resolved.normalize();
        }

        println!("{resolved}");
        Ok(())
    }
}
