//! Shell-glob compilation and matching.
//!
//! A [`GlobPattern`] is compiled once and then matched any number of times
//! against candidate text. Matching is anchored: the whole candidate must
//! match, never a substring.
//!
//! # Syntax
//!
//! - `*` matches any run of characters except `/`
//! - `**` matches any run of characters, `/` included
//! - `?` matches exactly one character except `/`
//! - `[abc]`, `[a-z]`, `[!a-z]` match one character from (or not from) a class
//! - `{a,b,c}` matches any of the comma-separated sub-globs (no nesting)
//! - `\x` matches `x` literally
//!
//! # Examples
//!
//! ```
//! use segpath::GlobPattern;
//!
//! let glob = GlobPattern::new("*.{java,class}").unwrap();
//! assert!(glob.matches("Foo.java"));
//! assert!(!glob.matches("src/Foo.java"));
//!
//! let deep = GlobPattern::new("src/**.java").unwrap();
//! assert!(deep.matches("src/main/Foo.java"));
//! ```

mod matcher;
mod parser;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::path::UnixPath;
use parser::Step;

/// A compiled glob pattern.
///
/// Compiled patterns are immutable and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobPattern {
    glob: String,
    program: Vec<Step>,
}

impl GlobPattern {
    /// Compile a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for an unterminated class or group, an
    /// inverted or empty class, a nested group, or a trailing lone `\`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::GlobPattern;
    ///
    /// assert!(GlobPattern::new("[a-y]oo").is_ok());
    /// assert!(GlobPattern::new("[z-a]").is_err());
    /// assert!(GlobPattern::new("{foo,bar{baz}}").is_err());
    /// ```
    pub fn new(glob: &str) -> Result<Self> {
        let program = parser::parse(glob)?;
        log::debug!("compiled glob {glob:?} into {} step(s)", program.len());
        Ok(Self {
            glob: glob.to_string(),
            program,
        })
    }

    /// The source text of the pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// Whether the whole of `candidate` matches the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::GlobPattern;
    ///
    /// assert!(GlobPattern::new("f*r").unwrap().matches("foobar"));
    /// assert!(!GlobPattern::new("f*b").unwrap().matches("foobar"));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let chars: Vec<char> = candidate.chars().collect();
        matcher::matches(&self.program, &chars)
    }

    /// Match against the canonical text of a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{GlobPattern, UnixPath};
    ///
    /// let glob = GlobPattern::new("/home/*/*").unwrap();
    /// assert!(glob.matches_path(&UnixPath::parse("//home/gus/data/")));
    /// ```
    #[must_use]
    pub fn matches_path(&self, path: &UnixPath) -> bool {
        self.matches(&path.to_string())
    }
}

impl FromStr for GlobPattern {
    type Err = Error;

    fn from_str(glob: &str) -> Result<Self> {
        Self::new(glob)
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}

/// A path matcher selected by a `syntax:pattern` string.
///
/// Only the `glob` syntax is available; the syntax name is case-insensitive.
///
/// # Examples
///
/// ```
/// use segpath::{PathMatcher, UnixPath};
///
/// let matcher = PathMatcher::new("glob:**.mp3").unwrap();
/// assert!(matcher.matches(&UnixPath::parse("/music/a/b.mp3")));
/// assert!(PathMatcher::new("regex:.*").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMatcher {
    /// Shell glob syntax.
    Glob(GlobPattern),
}

impl PathMatcher {
    /// Build a matcher from `syntax:pattern`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when the `:` is missing, an
    /// unsupported-syntax error for an unknown syntax, and a glob syntax
    /// error for a malformed pattern.
    pub fn new(syntax_and_pattern: &str) -> Result<Self> {
        let (syntax, pattern) = syntax_and_pattern.split_once(':').ok_or_else(|| {
            Error::invalid_argument(format!(
                "expected syntax:pattern, got {syntax_and_pattern:?}"
            ))
        })?;

        if syntax.eq_ignore_ascii_case("glob") {
            return Ok(Self::Glob(GlobPattern::new(pattern)?));
        }
        Err(Error::UnsupportedSyntax {
            syntax: syntax.to_string(),
        })
    }

    /// Whether `path` matches.
    #[must_use]
    pub fn matches(&self, path: &UnixPath) -> bool {
        match self {
            Self::Glob(glob) => glob.matches_path(path),
        }
    }
}

/// Accepts directory entries whose file name matches a glob.
///
/// # Examples
///
/// ```
/// use segpath::{DirectoryFilter, UnixPath};
///
/// let filter = DirectoryFilter::new("*.{jpg,png}").unwrap();
/// let entries = ["/dcim/a.jpg", "/dcim/b.txt", "/dcim/c.png"].map(UnixPath::parse);
/// let kept: Vec<String> = filter.filter(entries).map(|p| p.to_string()).collect();
/// assert_eq!(kept, ["/dcim/a.jpg", "/dcim/c.png"]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryFilter {
    pattern: GlobPattern,
}

impl DirectoryFilter {
    /// Compile the filter's glob.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the glob is malformed.
    pub fn new(glob: &str) -> Result<Self> {
        Ok(Self {
            pattern: GlobPattern::new(glob)?,
        })
    }

    /// The compiled glob.
    #[must_use]
    pub fn pattern(&self) -> &GlobPattern {
        &self.pattern
    }

    /// Whether `entry`'s file name matches. The root has no file name and is
    /// never accepted.
    #[must_use]
    pub fn accept(&self, entry: &UnixPath) -> bool {
        entry
            .file_name_str()
            .is_some_and(|name| self.pattern.matches(name))
    }

    /// Keep the accepted entries, in order.
    pub fn filter<'a, I>(&'a self, entries: I) -> impl Iterator<Item = UnixPath> + 'a
    where
        I: IntoIterator<Item = UnixPath>,
        I::IntoIter: 'a,
    {
        entries.into_iter().filter(move |entry| self.accept(entry))
    }
}
