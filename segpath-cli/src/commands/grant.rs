//! Command to report which grant covers each path.

use crate::error::CliError;
use crate::utils::{load_grant_index, print_json, GlobalOptions, OutputFormat};
use clap::Args;
use segpath::{Coverage, UnixPath};

/// Report what governs access to each path under the grant table.
#[derive(Args)]
pub struct GrantCommand {
    /// Absolute paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,

    /// Exit with status 1 if any path is uncovered
    #[arg(long)]
    pub check: bool,
}

impl GrantCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let index = load_grant_index(global)?;

        let mut uncovered = 0;
        let mut report = Vec::with_capacity(self.paths.len());
        for raw in &self.paths {
            let path = UnixPath::parse(raw);
            let coverage = index.coverage(&path)?;
            let document_id = index.document_id(&path)?;

            let (status, tree) = match coverage {
                Coverage::Unprotected => ("unprotected", None),
                Coverage::Granted(entry) => (
                    "granted",
                    entry.grant.as_ref().map(|grant| grant.tree.clone()),
                ),
                Coverage::Uncovered => {
                    uncovered += 1;
                    ("uncovered", None)
                }
            };
            report.push((path, status, tree, document_id));
        }

        match self.format {
            OutputFormat::Plain => {
                for (path, status, tree, document_id) in &report {
                    match (tree, document_id) {
                        (Some(tree), Some(id)) => println!("{path}\t{status}\t{tree}\t{id}"),
                        (Some(tree), None) => println!("{path}\t{status}\t{tree}"),
                        _ => println!("{path}\t{status}"),
                    }
                }
            }
            OutputFormat::Json => {
                let json_data: Vec<serde_json::Value> = report
                    .iter()
                    .map(|(path, status, tree, document_id)| {
                        serde_json::json!({
                            "path": path.to_string(),
                            "status": status,
                            "tree": tree,
                            "document_id": document_id,
                        })
                    })
                    .collect();
                print_json(&serde_json::Value::Array(json_data))?;
            }
        }

        if self.check && uncovered > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{uncovered} path(s) not covered by any grant"
            )));
        }
        Ok(())
    }
}
