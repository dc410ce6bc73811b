//! Parsing raw text into `UnixPath` values.
//!
//! Sanitizing collapses separator runs, records and strips a leading
//! separator, drops a trailing separator and splits what remains into names.
//! Any string is a valid path, so these operations never fail.

use super::types::{UnixPath, SEPARATOR};

/// Collapse runs of separators into a single separator.
fn collapse_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_was_separator = false;
    for c in raw.chars() {
        if c == SEPARATOR {
            if !previous_was_separator {
                out.push(c);
            }
            previous_was_separator = true;
        } else {
            out.push(c);
            previous_was_separator = false;
        }
    }
    out
}

impl UnixPath {
    /// Parse raw text into a path.
    ///
    /// `.` and `..` are kept as ordinary names; see [`UnixPath::normalize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::parse("///foo///").to_string(), "/foo");
    /// assert_eq!(UnixPath::parse("//./foo//./").to_string(), "/./foo/.");
    /// assert_eq!(UnixPath::parse("").name_count(), 1);
    /// assert_eq!(UnixPath::parse("/").name_count(), 0);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let collapsed = collapse_separators(raw);

        let (absolute, rest) = match collapsed.strip_prefix(SEPARATOR) {
            Some(stripped) => (true, stripped),
            None => (false, collapsed.as_str()),
        };
        let rest = rest.strip_suffix(SEPARATOR).unwrap_or(rest);

        if absolute && rest.is_empty() {
            return Self::root();
        }

        let names = rest.split(SEPARATOR).map(str::to_string).collect();
        Self::from_names(absolute, names)
    }

    /// Join raw parts with a separator and parse the result as a whole.
    ///
    /// This is textual concatenation, not resolution: a later part that looks
    /// absolute does not discard earlier parts. Empty parts contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::UnixPath;
    ///
    /// assert_eq!(UnixPath::join(["/", "////c"]).to_string(), "/c");
    /// assert_eq!(UnixPath::join(["/foo/", "/bar"]).to_string(), "/foo/bar");
    /// assert_eq!(UnixPath::join(["", ""]).to_string(), "");
    /// ```
    pub fn join<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for part in parts {
            let part = part.as_ref();
            if part.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(SEPARATOR);
            }
            text.push_str(part);
        }
        Self::parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_separators() {
        assert_eq!(collapse_separators("//a///b/"), "/a/b/");
        assert_eq!(collapse_separators("a"), "a");
        assert_eq!(collapse_separators(""), "");
        assert_eq!(collapse_separators("////"), "/");
    }

    #[test]
    fn test_parse_empty_is_current() {
        let path = UnixPath::parse("");
        assert!(!path.is_absolute());
        assert_eq!(path.names().collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn test_parse_root_variants() {
        for raw in ["/", "//////", "///"] {
            assert!(UnixPath::parse(raw).is_root(), "{raw:?} should be root");
        }
    }

    #[test]
    fn test_parse_keeps_dot_names() {
        let path = UnixPath::parse("/Test/../Test");
        assert_eq!(path.names().collect::<Vec<_>>(), ["Test", "..", "Test"]);
    }

    #[test]
    fn test_parse_trailing_separator() {
        assert_eq!(UnixPath::parse("foo/").to_string(), "foo");
        assert_eq!(UnixPath::parse("foo/bar///").to_string(), "foo/bar");
    }

    #[test]
    fn test_join_sanitizes_whole_text() {
        assert_eq!(UnixPath::join(["/", ""]).to_string(), "/");
        assert_eq!(UnixPath::join(["", "/"]).to_string(), "/");
        assert_eq!(UnixPath::join(["/", "/"]).to_string(), "/");
        assert_eq!(UnixPath::join(["/", "foo/", "bar/"]).to_string(), "/foo/bar");
        assert_eq!(UnixPath::join(["/foo", "bar////baz"]).to_string(), "/foo/bar/baz");
        assert_eq!(UnixPath::join(["a", "b/c"]).to_string(), "a/b/c");
    }

    #[test]
    fn test_join_owned_strings() {
        let parts = vec![String::from("a"), String::from("b")];
        assert_eq!(UnixPath::join(&parts).to_string(), "a/b");
    }
}
