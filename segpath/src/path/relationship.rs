//! Prefix, suffix and hierarchy relationships between paths.
//!
//! `starts_with` and `ends_with` compare names literally, without
//! normalization. [`PathRelationship`] compares normalized paths and is the
//! hierarchy test used when deciding whether one path lies within another.

use super::types::UnixPath;

impl UnixPath {
    /// Whether `other` is a name-wise prefix of this path.
    ///
    /// Both paths must agree on absoluteness. Names compare by exact string
    /// equality, so `foo` does not start with `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert!(UnixPath::parse("/foo").starts_with(&"/".into()));
    /// assert!(UnixPath::parse("foo/bar").starts_with(&"foo".into()));
    /// assert!(!UnixPath::parse("/foo/bar").starts_with(&"foo/bar".into()));
    /// assert!(!UnixPath::parse("foo/bar").starts_with(&"fo".into()));
    /// ```
    #[must_use]
    pub fn starts_with(&self, other: &UnixPath) -> bool {
        self.absolute == other.absolute
            && other.names.len() <= self.names.len()
            && self.names.iter().zip(&other.names).all(|(a, b)| a == b)
    }

    /// Whether `other` is a name-wise suffix of this path.
    ///
    /// An absolute `other` only matches the whole path. A relative `other`
    /// matches trailing names and never consumes the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert!(UnixPath::parse("/foo/bar").ends_with(&"bar".into()));
    /// assert!(UnixPath::parse("/foo/bar").ends_with(&"/foo/bar".into()));
    /// assert!(!UnixPath::parse("/foo/bar").ends_with(&"/bar".into()));
    /// assert!(!UnixPath::parse("foo..").ends_with(&"..".into()));
    /// ```
    #[must_use]
    pub fn ends_with(&self, other: &UnixPath) -> bool {
        if other.absolute {
            return self == other;
        }
        other.names.len() <= self.names.len()
            && self
                .names
                .iter()
                .rev()
                .zip(other.names.iter().rev())
                .all(|(a, b)| a == b)
    }
}

/// Relationship between two paths.
///
/// Computed over normalized paths, so `/a/b/..` and `/a` are the same path.
/// Paths of differing absoluteness are always unrelated.
///
/// # Examples
///
/// ```
/// use segpath::{PathRelationship, UnixPath};
///
/// let parent = UnixPath::parse("/storage/emulated/0");
/// let child = UnixPath::parse("/storage/emulated/0/Music");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{PathRelationship, UnixPath};
    ///
    /// let a = UnixPath::parse("/a");
    /// let ab = UnixPath::parse("/a/b");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(
    ///     PathRelationship::between(&a, &UnixPath::parse("/b")),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(path1: &UnixPath, path2: &UnixPath) -> Self {
        let p1 = path1.normalize();
        let p2 = path2.normalize();

        if p1 == p2 {
            return Self::Same;
        }

        // The current path "" is a prefix of every relative path.
        if p2.starts_with(&p1) || (p1.is_empty() && !p2.is_absolute()) {
            return Self::Ancestor;
        }

        if p1.starts_with(&p2) || (p2.is_empty() && !p1.is_absolute()) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Returns `true` for `Ancestor`, `Descendant` and `Same`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{PathRelationship, UnixPath};
    ///
    /// let dir = UnixPath::parse("/storage/1234-ABCD");
    /// let file = UnixPath::parse("/storage/1234-ABCD/Music/a.mp3");
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &UnixPath, directory: &UnixPath) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    #[must_use]
    pub fn contains(path: &UnixPath, other: &UnixPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{PathRelationship, UnixPath};
    ///
    /// let desc = PathRelationship::Ancestor
    ///     .description(&UnixPath::parse("/a"), &UnixPath::parse("/a/b"));
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &UnixPath, path2: &UnixPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
