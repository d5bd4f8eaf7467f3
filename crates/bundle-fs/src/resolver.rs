//! Path resolution over a flat namespace.
//!
//! The resource group only knows a flat list of paths. [`resolve`] projects
//! that list onto a directory tree for a single candidate path: it reports
//! whether the candidate is itself a resource and which resources live
//! beneath it. No tree is ever built or cached; every call scans the
//! namespace it is given.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::resolver::resolve;
//!
//! let namespace = ["a/b.txt", "a/c/d.txt"];
//!
//! let dir = resolve(namespace, "a").unwrap();
//! assert!(!dir.exists());
//! assert_eq!(dir.children(), ["a/b.txt", "a/c/d.txt"]);
//!
//! let leaf = resolve(namespace, "a/b.txt").unwrap();
//! assert!(leaf.exists());
//! assert!(leaf.children().is_empty());
//!
//! assert!(resolve(namespace, "missing").unwrap_err().is_not_found());
//! ```

use crate::error::{FsError, Result};
use crate::path::is_strict_prefix_of;

/// The classification of one candidate path against a namespace.
///
/// A resolution always denotes something: a resource (`exists`), a
/// directory (non-empty `children`), or both at once when a resource name is
/// also used as a directory prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    exists: bool,
    children: Vec<String>,
}

impl Resolution {
    /// Returns `true` if the candidate path is itself a registered resource.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// Every resource path beneath the candidate, direct and indirect, in
    /// namespace order.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns `true` if at least one resource lives beneath the candidate.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if the candidate is both a resource and a directory.
    #[must_use]
    pub fn is_overlapping(&self) -> bool {
        self.exists && self.is_dir()
    }

    /// Consumes the resolution, returning the existence flag and children.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.exists, self.children)
    }
}

/// Classifies `candidate` against `namespace` in a single linear pass.
///
/// An entry equal to `candidate` marks it as existing; an entry starting
/// with `candidate` followed by `/` is collected as a child.
///
/// # Errors
///
/// Returns [`FsError::NotFound`] if the candidate neither exists nor has
/// children.
pub fn resolve<I, S>(namespace: I, candidate: &str) -> Result<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut exists = false;
    let mut children = Vec::new();

    for entry in namespace {
        let entry = entry.as_ref();
        if entry == candidate {
            exists = true;
        } else if is_strict_prefix_of(candidate, entry) {
            children.push(entry.to_string());
        }
    }

    tracing::trace!(
        candidate,
        exists,
        children = children.len(),
        "resolved path"
    );

    if !exists && children.is_empty() {
        return Err(FsError::NotFound {
            path: candidate.to_string(),
        });
    }

    Ok(Resolution { exists, children })
}

/// Finds the first path in `namespace` that is both a resource and a
/// directory prefix of another resource.
///
/// Used by the strict collision policy to reject overlapping namespaces up
/// front.
///
/// # Examples
///
/// ```
/// use bundle_fs::resolver::find_overlap;
///
/// assert_eq!(find_overlap(["x", "x/y"]), Some("x".to_string()));
/// assert_eq!(find_overlap(["x/y", "x/z"]), None);
/// ```
#[must_use]
pub fn find_overlap<I, S>(namespace: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut paths: Vec<S> = namespace.into_iter().collect();
    paths.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    // After sorting, `p/...` entries follow `p` but may be preceded by
    // siblings like `p-x` or `p.x` that sort between them, so scan forward
    // past entries sharing `p` as a plain string prefix.
    for (i, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        for later in &paths[i + 1..] {
            let later = later.as_ref();
            if !later.starts_with(path) {
                break;
            }
            if is_strict_prefix_of(path, later) {
                return Some(path.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMESPACES: &[&[&str]] = &[
        &[],
        &["a"],
        &["a/b.txt", "a/c/d.txt"],
        &["x", "x/y"],
        &["a", "ab", "a/b", "a-b/c", "/a/b"],
        &["docs/index.html", "docs/css/site.css", "docs", "readme.md"],
    ];

    const CANDIDATES: &[&str] = &["", "a", "a/b", "a/c", "x", "docs", "/a", "ab", "missing"];

    #[test]
    fn test_exists_iff_member() {
        for namespace in NAMESPACES {
            for candidate in CANDIDATES {
                let member = namespace.contains(candidate);
                match resolve(namespace.iter(), candidate) {
                    Ok(resolution) => assert_eq!(resolution.exists(), member),
                    Err(err) => {
                        assert!(err.is_not_found());
                        assert!(!member);
                    }
                }
            }
        }
    }

    #[test]
    fn test_children_iff_strict_prefix() {
        for namespace in NAMESPACES {
            for candidate in CANDIDATES {
                let expected: Vec<String> = namespace
                    .iter()
                    .filter(|e| e.starts_with(&format!("{candidate}/")))
                    .map(ToString::to_string)
                    .collect();
                match resolve(namespace.iter(), candidate) {
                    Ok(resolution) => assert_eq!(resolution.children(), expected),
                    Err(_) => assert!(expected.is_empty()),
                }
            }
        }
    }

    #[test]
    fn test_directory_scenario() {
        let namespace = ["a/b.txt", "a/c/d.txt"];

        let a = resolve(namespace, "a").unwrap();
        assert!(!a.exists());
        assert!(a.is_dir());
        assert_eq!(a.children(), ["a/b.txt", "a/c/d.txt"]);

        let c = resolve(namespace, "a/c").unwrap();
        assert!(!c.exists());
        assert_eq!(c.children(), ["a/c/d.txt"]);

        let leaf = resolve(namespace, "a/b.txt").unwrap();
        assert!(leaf.exists());
        assert!(!leaf.is_dir());
    }

    #[test]
    fn test_missing_is_not_found() {
        let err = resolve(["a/b.txt"], "missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File not found: missing");
    }

    #[test]
    fn test_collision() {
        let resolution = resolve(["x", "x/y"], "x").unwrap();
        assert!(resolution.exists());
        assert!(resolution.is_dir());
        assert!(resolution.is_overlapping());
        assert_eq!(resolution.children(), ["x/y"]);
    }

    #[test]
    fn test_children_keep_namespace_order() {
        let resolution = resolve(["d/z", "d/a", "d/m/n"], "d").unwrap();
        assert_eq!(resolution.children(), ["d/z", "d/a", "d/m/n"]);
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_not_a_child() {
        let err = resolve(["ab/c"], "a").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_into_parts() {
        let (exists, children) = resolve(["a/b"], "a").unwrap().into_parts();
        assert!(!exists);
        assert_eq!(children, vec!["a/b".to_string()]);
    }

    #[test]
    fn test_find_overlap() {
        assert_eq!(find_overlap(["x/y", "x"]), Some("x".to_string()));
        assert_eq!(find_overlap(["a", "a-b/c", "a.txt", "a/b"]), Some("a".to_string()));
        assert_eq!(find_overlap(["a", "ab/c", "a-b"]), None);
        assert_eq!(find_overlap(Vec::<String>::new()), None);
    }
}
