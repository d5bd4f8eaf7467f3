//! Error types for the resource filesystem.
//!
//! Every operation in this crate reports failures through [`FsError`].
//! Each variant carries the path (or value) that caused it, and the enum
//! offers `is_xxx()` predicates for easy classification.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::FsError;
//!
//! let error = FsError::NotFound {
//!     path: "missing.txt".to_string(),
//! };
//!
//! assert!(error.is_not_found());
//! ```

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving or accessing resources.
///
/// # Examples
///
/// ```
/// use bundle_fs::FsError;
///
/// let error = FsError::NotAFile {
///     path: "assets".to_string(),
/// };
///
/// assert!(error.is_not_a_file());
/// assert_eq!(error.to_string(), "Cannot read: is a directory: assets");
/// ```
#[derive(Error, Debug)]
pub enum FsError {
    /// Path is neither a resource nor a prefix of any resource
    #[error("File not found: {path}")]
    NotFound {
        /// The path that was not found
        path: String,
    },

    /// Read or seek attempted on a directory handle
    #[error("Cannot read: is a directory: {path}")]
    NotAFile {
        /// The directory path
        path: String,
    },

    /// Directory listing attempted on a handle without children
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// The path that is not a directory
        path: String,
    },

    /// The resource group could not produce bytes for a path that resolved
    /// as an existing resource.
    #[error("Failed to fetch '{path}': {reason}")]
    FetchFailed {
        /// The resource path
        path: String,
        /// Why the resource group refused
        reason: String,
    },

    /// Resource path is empty or malformed
    #[error("Invalid path: {path:?}")]
    InvalidPath {
        /// The invalid path
        path: String,
    },

    /// Path is both a resource and a directory prefix under the strict
    /// collision policy
    #[error("Path is both a file and a directory: {path}")]
    OverlappingNamespace {
        /// The overlapping path
        path: String,
    },

    /// Seek target lies before the start of the content
    #[error("Invalid seek to negative or overflowing position: {offset}")]
    InvalidSeek {
        /// The requested offset relative to the seek origin
        offset: i64,
    },

    /// I/O failure while loading resources from a real directory
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration could not be parsed or failed validation
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl FsError {
    /// Returns `true` if this is a not-found error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::FsError;
    ///
    /// let error = FsError::NotFound {
    ///     path: "missing".to_string(),
    /// };
    ///
    /// assert!(error.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a read-on-directory error.
    #[must_use]
    pub const fn is_not_a_file(&self) -> bool {
        matches!(self, Self::NotAFile { .. })
    }

    /// Returns `true` if this is a not-a-directory error.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::FsError;
    ///
    /// let error = FsError::NotADirectory {
    ///     path: "file.txt".to_string(),
    /// };
    ///
    /// assert!(error.is_not_directory());
    /// ```
    #[must_use]
    pub const fn is_not_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }

    /// Returns `true` if the resource group failed to produce content.
    #[must_use]
    pub const fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    /// Returns `true` if this is an invalid path error.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns `true` if a path was rejected for being both a file and a
    /// directory.
    #[must_use]
    pub const fn is_overlapping(&self) -> bool {
        matches!(self, Self::OverlappingNamespace { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

impl From<FsError> for io::Error {
    fn from(error: FsError) -> Self {
        let kind = match &error {
            FsError::NotFound { .. } => io::ErrorKind::NotFound,
            FsError::NotAFile { .. } => io::ErrorKind::IsADirectory,
            FsError::NotADirectory { .. } => io::ErrorKind::NotADirectory,
            FsError::InvalidSeek { .. } | FsError::InvalidPath { .. } => {
                io::ErrorKind::InvalidInput
            }
            FsError::Io { source, .. } => source.kind(),
            FsError::FetchFailed { .. }
            | FsError::OverlappingNamespace { .. }
            | FsError::Config { .. } => io::ErrorKind::Other,
        };
        Self::new(kind, error)
    }
}

/// Type alias for resource filesystem results.
///
/// # Examples
///
/// ```
/// use bundle_fs::{FsError, Result};
///
/// fn require_leaf(exists: bool, path: &str) -> Result<()> {
///     if exists {
///         Ok(())
///     } else {
///         Err(FsError::NotAFile { path: path.to_string() })
///     }
/// }
///
/// assert!(require_leaf(false, "dir").is_err());
/// ```
pub type Result<T> = std::result::Result<T, FsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let error = FsError::NotFound {
            path: "a".to_string(),
        };
        assert!(error.is_not_found());
        assert!(!error.is_not_a_file());
        assert!(!error.is_not_directory());
    }

    #[test]
    fn test_error_is_not_a_file() {
        let error = FsError::NotAFile {
            path: "dir".to_string(),
        };
        assert!(error.is_not_a_file());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_error_is_fetch_failed() {
        let error = FsError::FetchFailed {
            path: "x".to_string(),
            reason: "gone".to_string(),
        };
        assert!(error.is_fetch_failed());
        assert_eq!(error.to_string(), "Failed to fetch 'x': gone");
    }

    #[test]
    fn test_io_error_kinds() {
        let cases = [
            (
                FsError::NotFound {
                    path: "a".to_string(),
                },
                io::ErrorKind::NotFound,
            ),
            (
                FsError::NotAFile {
                    path: "a".to_string(),
                },
                io::ErrorKind::IsADirectory,
            ),
            (
                FsError::NotADirectory {
                    path: "a".to_string(),
                },
                io::ErrorKind::NotADirectory,
            ),
            (FsError::InvalidSeek { offset: -1 }, io::ErrorKind::InvalidInput),
            (
                FsError::FetchFailed {
                    path: "a".to_string(),
                    reason: "missing".to_string(),
                },
                io::ErrorKind::Other,
            ),
        ];

        for (error, kind) in cases {
            let io_error: io::Error = error.into();
            assert_eq!(io_error.kind(), kind);
        }
    }

    #[test]
    fn test_io_error_preserves_source() {
        let io_error: io::Error = FsError::NotFound {
            path: "missing".to_string(),
        }
        .into();

        let inner = io_error
            .get_ref()
            .and_then(|e| e.downcast_ref::<FsError>())
            .unwrap();
        assert!(inner.is_not_found());
    }
}
