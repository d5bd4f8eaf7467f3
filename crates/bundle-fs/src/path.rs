//! Slash-separated resource path helpers.
//!
//! Resource paths are plain strings using `/` as separator on every
//! platform. A leading `/` is allowed but not required, and no other
//! normalization is applied: `a/./b` and `a/b` are different resources.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::path::{base_name, is_prefix_of, parent_dir};
//!
//! assert_eq!(base_name("assets/css/site.css"), "site.css");
//! assert_eq!(parent_dir("assets/css/site.css"), "assets/css");
//! assert!(is_prefix_of("assets", "assets/css/site.css"));
//! assert!(!is_prefix_of("assets", "assets-old/logo.png"));
//! ```

use crate::error::{FsError, Result};

/// Path separator used by every resource path.
pub const SEPARATOR: char = '/';

/// Returns `true` if `candidate` equals `path` or is a directory prefix of it.
///
/// A directory prefix must be followed by a separator, so `"a"` is a prefix
/// of `"a/b"` but not of `"ab"`.
///
/// # Examples
///
/// ```
/// use bundle_fs::path::is_prefix_of;
///
/// assert!(is_prefix_of("a", "a"));
/// assert!(is_prefix_of("a", "a/b/c"));
/// assert!(!is_prefix_of("a", "ab"));
/// ```
#[must_use]
pub fn is_prefix_of(candidate: &str, path: &str) -> bool {
    path == candidate || is_strict_prefix_of(candidate, path)
}

/// Returns `true` if `path` starts with `candidate` followed by a separator.
#[must_use]
pub fn is_strict_prefix_of(candidate: &str, path: &str) -> bool {
    path.strip_prefix(candidate)
        .is_some_and(|rest| rest.starts_with(SEPARATOR))
}

/// Returns the last element of a path.
///
/// Trailing separators are removed first. An empty path yields `"."` and a
/// path made only of separators yields `"/"`.
///
/// # Examples
///
/// ```
/// use bundle_fs::path::base_name;
///
/// assert_eq!(base_name("a/b.txt"), "b.txt");
/// assert_eq!(base_name("a/c/"), "c");
/// assert_eq!(base_name(""), ".");
/// assert_eq!(base_name("//"), "/");
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return "/";
    }
    trimmed
        .rfind(SEPARATOR)
        .map_or(trimmed, |idx| &trimmed[idx + 1..])
}

/// Returns everything before the last separator of a path.
///
/// A path without a separator lives in `"."`; a root-level absolute path
/// such as `"/a"` lives in `"/"`.
///
/// # Examples
///
/// ```
/// use bundle_fs::path::parent_dir;
///
/// assert_eq!(parent_dir("a/b/c.txt"), "a/b");
/// assert_eq!(parent_dir("a"), ".");
/// assert_eq!(parent_dir("/a"), "/");
/// ```
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        None => ".",
        Some(0) => "/",
        Some(idx) => &path[..idx],
    }
}

/// Validates a path before it is registered as a resource.
///
/// Rejects empty paths, a bare `"/"`, and paths with empty segments
/// (`"a//b"`, `"a/"`), since none of them can be reached through
/// [`is_prefix_of`]-based resolution.
///
/// # Errors
///
/// Returns [`FsError::InvalidPath`] when the path is malformed.
///
/// # Examples
///
/// ```
/// use bundle_fs::path::validate_resource_path;
///
/// assert!(validate_resource_path("a/b.txt").is_ok());
/// assert!(validate_resource_path("/a/b.txt").is_ok());
/// assert!(validate_resource_path("a//b.txt").is_err());
/// assert!(validate_resource_path("").is_err());
/// ```
pub fn validate_resource_path(path: &str) -> Result<()> {
    let body = path.strip_prefix(SEPARATOR).unwrap_or(path);
    if body.is_empty() || body.split(SEPARATOR).any(str::is_empty) {
        return Err(FsError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prefix_of_self() {
        assert!(is_prefix_of("a/b", "a/b"));
        assert!(!is_strict_prefix_of("a/b", "a/b"));
    }

    #[test]
    fn test_is_prefix_of_requires_separator() {
        assert!(is_prefix_of("a", "a/b"));
        assert!(!is_prefix_of("a", "ab/c"));
        assert!(!is_prefix_of("a/b", "a"));
    }

    #[test]
    fn test_is_prefix_of_leading_slash_is_significant() {
        assert!(!is_prefix_of("a", "/a/b"));
        assert!(is_prefix_of("/a", "/a/b"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("a"), "a");
        assert_eq!(base_name("a/b/c.txt"), "c.txt");
        assert_eq!(base_name("/a"), "a");
        assert_eq!(base_name("a/b//"), "b");
        assert_eq!(base_name(""), ".");
        assert_eq!(base_name("/"), "/");
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("a/b.txt"), "a");
        assert_eq!(parent_dir("a/c/d.txt"), "a/c");
        assert_eq!(parent_dir("x"), ".");
        assert_eq!(parent_dir("/x"), "/");
        assert_eq!(parent_dir(""), ".");
    }

    #[test]
    fn test_validate_resource_path() {
        assert!(validate_resource_path("index.html").is_ok());
        assert!(validate_resource_path("a/b/c").is_ok());
        assert!(validate_resource_path("/a").is_ok());

        for bad in ["", "/", "a/", "a//b", "//a"] {
            let err = validate_resource_path(bad).unwrap_err();
            assert!(err.is_invalid_path(), "{bad:?} should be rejected");
        }
    }
}
