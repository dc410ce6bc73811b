//! Command to show how a path string is parsed and decomposed.

use crate::error::CliError;
use crate::utils::{print_json, GlobalOptions, OutputFormat};
use clap::Args;
use segpath::UnixPath;

/// Show the parsed form of a path and its decomposition.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", ignore_case = true)]
    pub format: OutputFormat,
}

impl InspectCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = UnixPath::parse(&self.path);
        let names: Vec<&str> = path.names().collect();
        let parent = path.parent().map(|p| p.to_string());
        let file_name = path.file_name_str();
        let normalized = path.normalize();

        match self.format {
            OutputFormat::Plain => {
                println!("Path: {path}");
                println!("Absolute: {}", if path.is_absolute() { "yes" } else { "no" });
                println!("Names ({}): {names:?}", path.name_count());
                println!("File name: {}", file_name.unwrap_or("-"));
                println!("Parent: {}", parent.as_deref().unwrap_or("-"));
                println!("Normalized: {normalized}");
            }
            OutputFormat::Json => {
                print_json(&serde_json::json!({
                    "path": path.to_string(),
                    "absolute": path.is_absolute(),
                    "names": names,
                    "file_name": file_name,
                    "parent": parent,
                    "normalized": normalized.to_string(),
                }))?;
            }
        }

        Ok(())
    }
}
