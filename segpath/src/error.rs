//! Error types for the segpath library.
//!
//! This module provides the error hierarchy for all operations in the
//! segpath library, using `thiserror` for ergonomic error handling.
//!
//! Path parsing, joining, resolution and normalization are total and never
//! fail. Errors come from malformed arguments (index ranges, mismatched
//! absoluteness), malformed globs, and configuration loading.

use thiserror::Error;

/// Result type alias for operations that may fail with a segpath error.
///
/// # Examples
///
/// ```
/// use segpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the segpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was outside the accepted domain of an operation.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// The reason the argument was rejected.
        reason: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob {pattern:?} at index {index}: {reason}")]
    GlobSyntax {
        /// The offending pattern.
        pattern: String,
        /// Character index where the problem was detected.
        index: usize,
        /// Description of the problem.
        reason: String,
    },

    /// A path matcher was requested with an unknown syntax prefix.
    #[error("unsupported matcher syntax: {syntax}")]
    UnsupportedSyntax {
        /// The syntax name that was requested.
        syntax: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if error is an invalid-argument error.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::{Error, UnixPath};
    ///
    /// let err = UnixPath::parse("/").name(0).unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error is a syntax error (malformed glob or matcher syntax).
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::GlobPattern;
    ///
    /// let err = GlobPattern::new("[z-a]").unwrap_err();
    /// assert!(err.is_syntax());
    /// ```
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::GlobSyntax { .. } | Self::UnsupportedSyntax { .. }
        )
    }
}
