//! Lexical Unix paths.
//!
//! This module provides [`UnixPath`], an immutable path value made of an
//! absolute flag and a sequence of names, together with its algebra.
//!
//! # Key Concepts
//!
//! ## Sanitizing
//!
//! Raw text is sanitized when parsed: separator runs collapse, a leading
//! separator marks the path absolute, a trailing separator is dropped. Any
//! string is a valid path.
//!
//! ## Special forms
//!
//! - The absolute root `/` has zero names.
//! - The relative current path `""` has exactly one empty name.
//!
//! ## Normalization
//!
//! Normalization is lexical: `.` names are dropped and `name/..` pairs
//! cancel. Leading `..` names of a relative path are kept, since there is
//! nothing to cancel them against.
//!
//! # Examples
//!
//! ```
//! use segpath::UnixPath;
//!
//! let base = UnixPath::parse("/a/b/c/../..");
//! let target = UnixPath::parse("/a/b/c/d");
//! assert_eq!(base.relativize(&target).unwrap().to_string(), "b/c/d");
//!
//! let joined = UnixPath::join(["/", "////c"]);
//! assert_eq!(joined.to_string(), "/c");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use segpath::{PathRelationship, UnixPath};
//!
//! let parent = UnixPath::parse("/home/user");
//! let child = UnixPath::parse("/home/user/project");
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod normalize;
pub mod relationship;
pub mod sanitize;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use types::{UnixPath, SEPARATOR};
