//! Command to compute the relative path between two paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use segpath::UnixPath;

/// Print the relative path leading from BASE to OTHER.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Starting path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Target path
    #[arg(value_name = "OTHER")]
    pub other: String,
}

impl RelativizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let base = UnixPath::parse(&self.base);
        let other = UnixPath::parse(&self.other);

        let relative = base.relativize(&other)?;
        println!("{relative}");
        Ok(())
    }
}
