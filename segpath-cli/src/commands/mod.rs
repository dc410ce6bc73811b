//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Show how a path is parsed and decomposed
//! - `normalize`: Normalize paths lexically
//! - `resolve`: Resolve one path against another
//! - `relativize`: Compute the relative path between two paths
//! - `matches`: Filter candidates through a glob
//! - `grant`: Report which grant covers each path
//! - `resolve_id`: Map a tree document id back to a path
//! - `validate`: Validate a grant table file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod grant;
pub mod inspect;
pub mod matches;
pub mod normalize;
pub mod relativize;
pub mod resolve;
pub mod resolve_id;
pub mod validate;

pub use completions::CompletionsCommand;
pub use grant::GrantCommand;
pub use inspect::InspectCommand;
pub use matches::MatchCommand;
pub use normalize::NormalizeCommand;
pub use relativize::RelativizeCommand;
pub use resolve::ResolveCommand;
pub use resolve_id::ResolveIdCommand;
pub use validate::ValidateCommand;
