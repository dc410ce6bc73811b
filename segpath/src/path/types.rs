//! The core `UnixPath` value type.
//!
//! A `UnixPath` is an immutable lexical path: an absolute flag plus an ordered
//! sequence of names. Construction goes through [`UnixPath::parse`] or
//! [`UnixPath::join`] (see the `sanitize` module); the algebra lives in the
//! `normalize` and `relationship` modules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The name separator.
pub const SEPARATOR: char = '/';

/// An immutable, lexical Unix path.
///
/// Two special forms exist:
/// - the absolute root `/`, which has zero names;
/// - the relative "current" path `""`, which has exactly one, empty, name.
///
/// Equality, hashing and ordering are structural over the absolute flag and
/// the names. Relative paths order before absolute ones.
///
/// # Examples
///
/// ```
/// use segpath::UnixPath;
///
/// let path = UnixPath::parse("//usr///lib/");
/// assert!(path.is_absolute());
/// assert_eq!(path.name_count(), 2);
/// assert_eq!(path.to_string(), "/usr/lib");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct UnixPath {
    pub(super) absolute: bool,
    pub(super) names: Vec<String>,
}

impl UnixPath {
    /// Build a path from already-split names.
    ///
    /// An empty relative name list becomes the current path `""`.
    pub(crate) fn from_names(absolute: bool, names: Vec<String>) -> Self {
        if !absolute && names.is_empty() {
            return Self::current();
        }
        Self { absolute, names }
    }

    /// The absolute root `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::root().to_string(), "/");
    /// assert_eq!(UnixPath::root().name_count(), 0);
    /// ```
    #[must_use]
    pub fn root() -> Self {
        Self {
            absolute: true,
            names: Vec::new(),
        }
    }

    /// The relative current path `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let current = UnixPath::current();
    /// assert!(current.is_empty());
    /// assert_eq!(current.name_count(), 1);
    /// ```
    #[must_use]
    pub fn current() -> Self {
        Self {
            absolute: false,
            names: vec![String::new()],
        }
    }

    /// Whether the path starts at the root.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Whether this is the absolute root `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.absolute && self.names.is_empty()
    }

    /// Whether this is the relative current path `""`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.names.len() == 1 && self.names[0].is_empty()
    }

    /// Number of names. `""` has one name, `/` has none.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate the names as string slices.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// The names used as trie keys: every name, except that the current path
    /// `""` contributes none.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        if self.is_empty() {
            &[]
        } else {
            &self.names
        }
    }

    /// Iterate the names as single-name relative paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let names: Vec<String> = UnixPath::parse("/Test/../Test")
    ///     .iter()
    ///     .map(|p| p.to_string())
    ///     .collect();
    /// assert_eq!(names, ["Test", "..", "Test"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = UnixPath> + '_ {
        self.names
            .iter()
            .map(|name| Self::from_names(false, vec![name.clone()]))
    }

    /// The name at `index` as a relative path.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `index >= name_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::parse("/foo/bar").name(1).unwrap().to_string(), "bar");
    /// assert!(UnixPath::parse("/").name(0).is_err());
    /// ```
    pub fn name(&self, index: usize) -> Result<UnixPath> {
        self.names
            .get(index)
            .map(|name| Self::from_names(false, vec![name.clone()]))
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "name index {index} out of range for {} name(s)",
                    self.names.len()
                ))
            })
    }

    /// The relative path made of names `begin..end`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error unless `begin < end <= name_count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let path = UnixPath::parse("/foo/bar/baz");
    /// assert_eq!(path.subpath(1, 3).unwrap().to_string(), "bar/baz");
    /// assert!(UnixPath::parse("/").subpath(0, 1).is_err());
    /// ```
    pub fn subpath(&self, begin: usize, end: usize) -> Result<UnixPath> {
        if begin >= end || end > self.names.len() {
            return Err(Error::invalid_argument(format!(
                "subpath range {begin}..{end} invalid for {} name(s)",
                self.names.len()
            )));
        }
        Ok(Self::from_names(false, self.names[begin..end].to_vec()))
    }

    /// The last name as a relative path, or `None` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::parse("foo/bar").file_name().unwrap().to_string(), "bar");
    /// assert!(UnixPath::root().file_name().is_none());
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<UnixPath> {
        self.names
            .last()
            .map(|name| Self::from_names(false, vec![name.clone()]))
    }

    /// The last name as a string slice, or `None` for the root.
    #[must_use]
    pub fn file_name_str(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    /// The path without its last name.
    ///
    /// Relative paths with at most one name and the root have no parent; an
    /// absolute path with a single name has the root as parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::parse("/foo").parent().unwrap().to_string(), "/");
    /// assert_eq!(UnixPath::parse("foo/bar").parent().unwrap().to_string(), "foo");
    /// assert!(UnixPath::parse("foo").parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<UnixPath> {
        let count = self.names.len();
        if count == 0 || (!self.absolute && count == 1) {
            return None;
        }
        Some(Self {
            absolute: self.absolute,
            names: self.names[..count - 1].to_vec(),
        })
    }
}

impl Default for UnixPath {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for UnixPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl From<&str> for UnixPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for UnixPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<UnixPath> for String {
    fn from(path: UnixPath) -> Self {
        path.to_string()
    }
}

impl FromStr for UnixPath {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(raw))
    }
}
