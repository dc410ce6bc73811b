//! Command to filter candidates through a glob.

use crate::error::CliError;
use crate::utils::{args_or_stdin, GlobalOptions};
use clap::Args;
use segpath::{DirectoryFilter, PathMatcher, UnixPath};

/// Print the candidates a glob matches.
///
/// Exits with status 1 when nothing matches.
#[derive(Args)]
pub struct MatchCommand {
    /// Glob pattern, optionally prefixed with `glob:`
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Candidate paths (read from stdin, one per line, when omitted)
    #[arg(value_name = "CANDIDATE", allow_hyphen_values = true)]
    pub candidates: Vec<String>,

    /// Match only each candidate's file name, like a directory listing filter
    #[arg(long)]
    pub names: bool,
}

impl MatchCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let glob = self.pattern.strip_prefix("glob:").unwrap_or(&self.pattern);
        let candidates: Vec<UnixPath> = args_or_stdin(self.candidates)?
            .iter()
            .map(|raw| UnixPath::parse(raw))
            .collect();

        let matched: Vec<UnixPath> = if self.names {
            let filter = DirectoryFilter::new(glob)?;
            filter.filter(candidates).collect()
        } else {
            let matcher = PathMatcher::new(&format!("glob:{glob}"))?;
            candidates
                .into_iter()
                .filter(|candidate| matcher.matches(candidate))
                .collect()
        };

        for path in &matched {
            println!("{path}");
        }

        if matched.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "No candidate matched {glob:?}"
            )));
        }
        Ok(())
    }
}
