//! Lexical path algebra: normalization, resolution and relativization.
//!
//! None of these operations consult a file system. `..` is resolved purely
//! by cancelling the preceding name.

use super::types::UnixPath;
use crate::error::{Error, Result};

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// Reduce `.` and `..` names without producing the `""` placeholder.
///
/// `..` cancels a preceding real name; when there is nothing to cancel (the
/// left edge, or another pending `..`) it is kept.
fn reduce(names: &[String]) -> Vec<String> {
    let mut stack: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        match name.as_str() {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match stack.last() {
                Some(top) if top != PARENT_DIR => {
                    stack.pop();
                }
                _ => stack.push(name.clone()),
            },
            _ => stack.push(name.clone()),
        }
    }
    stack
}

impl UnixPath {
    /// Remove `.` names and cancel `name/..` pairs.
    ///
    /// Leading `..` names of a relative path are preserved. A relative path
    /// that reduces to nothing becomes `""`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::parse("a/./b").normalize().to_string(), "a/b");
    /// assert_eq!(UnixPath::parse("a/..").normalize().to_string(), "");
    /// assert_eq!(UnixPath::parse("../a/b/..").normalize().to_string(), "../a");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> UnixPath {
        Self::from_names(self.absolute, reduce(&self.names))
    }

    /// Resolve `other` against this path.
    ///
    /// An absolute `other` is returned as is. Resolving the empty path yields
    /// `self`, and resolving against the empty path yields `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let base = UnixPath::parse("/storage/emulated/0");
    /// assert_eq!(base.resolve(&"Music".into()).to_string(), "/storage/emulated/0/Music");
    /// assert_eq!(base.resolve(&"/tmp".into()).to_string(), "/tmp");
    /// assert_eq!(UnixPath::parse("").resolve(&"foo".into()).to_string(), "foo");
    /// ```
    #[must_use]
    pub fn resolve(&self, other: &UnixPath) -> UnixPath {
        if other.absolute || self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut names = Vec::with_capacity(self.names.len() + other.names.len());
        names.extend_from_slice(&self.names);
        names.extend_from_slice(&other.names);
        Self::from_names(self.absolute, names)
    }

    /// Resolve `other` against this path's parent.
    ///
    /// Without a parent, `other` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let file = UnixPath::parse("/music/a.mp3");
    /// assert_eq!(file.resolve_sibling(&"b.mp3".into()).to_string(), "/music/b.mp3");
    /// ```
    #[must_use]
    pub fn resolve_sibling(&self, other: &UnixPath) -> UnixPath {
        match self.parent() {
            Some(parent) => parent.resolve(other),
            None => other.clone(),
        }
    }

    /// Build the relative path leading from this path to `other`.
    ///
    /// Both operands are normalized first. The result climbs out of the
    /// non-shared part of `self` with `..` names and then descends into the
    /// non-shared part of `other`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if exactly one of the paths is
    /// absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// let base = UnixPath::parse("/a/b");
    /// assert_eq!(base.relativize(&"/a/b/c/d".into()).unwrap().to_string(), "c/d");
    /// assert_eq!(base.relativize(&"/a/x".into()).unwrap().to_string(), "../x");
    /// assert!(base.relativize(&"a/x".into()).is_err());
    /// ```
    pub fn relativize(&self, other: &UnixPath) -> Result<UnixPath> {
        if self.absolute != other.absolute {
            return Err(Error::invalid_argument(format!(
                "cannot relativize {:?} against {:?}: only one path is absolute",
                other.to_string(),
                self.to_string()
            )));
        }

        let base = reduce(&self.names);
        let target = reduce(&other.names);
        let shared = base
            .iter()
            .zip(target.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut names: Vec<String> = std::iter::repeat(PARENT_DIR.to_string())
            .take(base.len() - shared)
            .collect();
        names.extend_from_slice(&target[shared..]);
        Ok(Self::from_names(false, names))
    }
}
