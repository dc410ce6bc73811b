//! Command to map a tree document id back to a path.

use crate::error::CliError;
use crate::utils::{load_grant_index, GlobalOptions};
use clap::Args;

/// Print the absolute path a `store:relative` document id refers to.
#[derive(Args)]
pub struct ResolveIdCommand {
    /// Document id, as `store:relative/path`
    #[arg(value_name = "ID")]
    pub id: String,
}

impl ResolveIdCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let index = load_grant_index(global)?;
        let path = index.resolve_document_id(&self.id)?;
        println!("{path}");
        Ok(())
    }
}
