#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # segpath
//!
//! Lexical Unix paths, shell-glob matching, and a prefix trie keyed by path
//! names.
//!
//! Nothing in this library touches a file system. Paths are values: parsing
//! never fails, and every operation returns a new path.
//!
//! ## Core Types
//!
//! - [`UnixPath`] and [`PathRelationship`]: path values and their algebra
//! - [`GlobPattern`], [`PathMatcher`] and [`DirectoryFilter`]: glob matching
//! - [`SegmentTrie`], [`Descender`] and [`Descent`]: the segment trie and its
//!   descent cursor
//! - [`GrantIndex`]: tree grants over mounted stores, built on the trie
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use segpath::{GlobPattern, SegmentTrie, UnixPath};
//!
//! let path = UnixPath::parse("//storage/sd//Music/./a.mp3/");
//! assert_eq!(path.to_string(), "/storage/sd/Music/./a.mp3");
//! assert_eq!(path.normalize().to_string(), "/storage/sd/Music/a.mp3");
//!
//! let glob = GlobPattern::new("/storage/*/Music/**.{mp3,ogg}").unwrap();
//! assert!(glob.matches_path(&path.normalize()));
//!
//! let mut trie = SegmentTrie::new();
//! trie.insert(&UnixPath::parse("/storage/sd"), "sd card");
//! let found = trie.find_shortest(&path, |_| true);
//! assert_eq!(found, Some((2, &"sd card")));
//! ```

pub mod config;
pub mod error;
pub mod glob;
pub mod grant;
pub mod logging;
pub mod path;
pub mod trie;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use glob::{DirectoryFilter, GlobPattern, PathMatcher};
pub use grant::{Coverage, GrantIndex};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathRelationship, UnixPath};
pub use trie::{Descender, Descent, SegmentTrie};
