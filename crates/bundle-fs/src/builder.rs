//! Builder pattern for constructing resource groups.
//!
//! Provides a fluent API for building [`MemoryGroup`] instances either by
//! adding resources programmatically or by loading a real directory tree,
//! which is how a bundle is usually served during development before it is
//! embedded.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::GroupBuilder;
//!
//! let group = GroupBuilder::new()
//!     .add_file("index.html", "<h1>Hello</h1>")
//!     .add_file("css/site.css", "body {}")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(group.len(), 2);
//! ```

use crate::error::{FsError, Result};
use crate::group::MemoryGroup;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const SEPARATOR_STR: &str = "/";

/// Builder for constructing a [`MemoryGroup`].
///
/// Invalid paths do not interrupt the chain; they are collected and the
/// first one is reported by [`GroupBuilder::build`].
///
/// # Examples
///
/// ```
/// use bundle_fs::GroupBuilder;
///
/// let result = GroupBuilder::new()
///     .add_file("ok.txt", "")
///     .add_file("bad//path.txt", "")
///     .build();
///
/// assert!(result.unwrap_err().is_invalid_path());
/// ```
#[derive(Debug, Default)]
pub struct GroupBuilder {
    group: MemoryGroup,
    errors: Vec<FsError>,
}

impl GroupBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated with every regular file beneath
    /// `root`.
    ///
    /// Files are keyed by their path relative to `root`, joined with `/` on
    /// every platform, and added in file-name order. Symbolic links are not
    /// followed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::{GroupBuilder, ResourceGroup};
    /// # use tempfile::TempDir;
    ///
    /// # let temp = TempDir::new().unwrap();
    /// # std::fs::create_dir(temp.path().join("css")).unwrap();
    /// # std::fs::write(temp.path().join("css/site.css"), "body {}").unwrap();
    /// let group = GroupBuilder::from_directory(temp.path()).build().unwrap();
    ///
    /// assert_eq!(group.entries(), vec!["css/site.css".to_string()]);
    /// ```
    #[must_use]
    pub fn from_directory(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut builder = Self::new();

        tracing::debug!(root = %root.display(), "loading resources from directory");

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                    builder.errors.push(FsError::Io {
                        path,
                        source: e.into(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match (resource_key(root, entry.path()), fs::read(entry.path())) {
                (Ok(key), Ok(content)) => builder = builder.add_file(key, content),
                (Err(e), _) => builder.errors.push(e),
                (_, Err(source)) => builder.errors.push(FsError::Io {
                    path: entry.path().display().to_string(),
                    source,
                }),
            }
        }

        builder
    }

    /// Adds a resource to the group being built.
    #[must_use]
    pub fn add_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        if let Err(e) = self.group.add_file(path, content) {
            self.errors.push(e);
        }
        self
    }

    /// Adds multiple resources to the group being built.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::GroupBuilder;
    ///
    /// let group = GroupBuilder::new()
    ///     .add_files([("a.txt", "1"), ("b/c.txt", "2")])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(group.len(), 2);
    /// ```
    #[must_use]
    pub fn add_files<P, C>(mut self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<Vec<u8>>,
    {
        for (path, content) in files {
            self = self.add_file(path, content);
        }
        self
    }

    /// Consumes the builder and returns the constructed group.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered while adding resources, if any.
    pub fn build(self) -> Result<MemoryGroup> {
        if let Some(error) = self.errors.into_iter().next() {
            tracing::warn!(%error, "resource group build failed");
            return Err(error);
        }
        tracing::debug!(resources = self.group.len(), "resource group built");
        Ok(self.group)
    }
}

/// Converts a file path beneath `root` into a `/`-separated resource key.
fn resource_key(root: &Path, path: &Path) -> Result<String> {
    let invalid = || FsError::InvalidPath {
        path: path.display().to_string(),
    };

    let relative = path.strip_prefix(root).map_err(|_| invalid())?;
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_str().ok_or_else(invalid))
        .collect::<Result<Vec<_>>>()?;

    Ok(segments.join(SEPARATOR_STR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ResourceGroup;
    use tempfile::TempDir;

    #[test]
    fn test_builder_new() {
        let group = GroupBuilder::new().build().unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn test_add_file() {
        let group = GroupBuilder::new()
            .add_file("test.txt", "content")
            .build()
            .unwrap();

        assert_eq!(group.len(), 1);
        assert_eq!(&*group.bytes_for("test.txt").unwrap(), b"content");
    }

    #[test]
    fn test_add_files() {
        let files = vec![("file1.txt", "content1"), ("dir/file2.txt", "content2")];

        let group = GroupBuilder::new().add_files(files).build().unwrap();

        assert_eq!(group.paths(), ["file1.txt", "dir/file2.txt"]);
    }

    #[test]
    fn test_error_collection() {
        let result = GroupBuilder::new()
            .add_file("valid.txt", "content")
            .add_file("", "content")
            .add_file("also/valid.txt", "content")
            .build();

        assert!(result.unwrap_err().is_invalid_path());
    }

    #[test]
    fn test_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("assets/img")).unwrap();
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();
        fs::write(temp.path().join("assets/app.js"), "run()").unwrap();
        fs::write(temp.path().join("assets/img/logo.png"), [0x89_u8, 0x50]).unwrap();

        let group = GroupBuilder::from_directory(temp.path()).build().unwrap();

        assert_eq!(
            group.entries(),
            vec!["assets/app.js", "assets/img/logo.png", "index.html"]
        );
        assert_eq!(&*group.bytes_for("assets/app.js").unwrap(), b"run()");
        assert_eq!(&*group.bytes_for("assets/img/logo.png").unwrap(), [0x89_u8, 0x50]);
    }

    #[test]
    fn test_from_directory_skips_empty_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();

        let group = GroupBuilder::from_directory(temp.path()).build().unwrap();
        assert!(group.is_empty());
    }

    #[test]
    fn test_from_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let err = GroupBuilder::from_directory(&missing).build().unwrap_err();
        assert!(matches!(err, FsError::Io { .. }));
    }

    #[test]
    fn test_from_directory_with_additional_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        let group = GroupBuilder::from_directory(temp.path())
            .add_file("generated/b.txt", "b")
            .build()
            .unwrap();

        assert_eq!(group.paths(), ["a.txt", "generated/b.txt"]);
    }

    #[test]
    fn test_resource_key() {
        let root = Path::new("/srv/bundle");
        let key = resource_key(root, &root.join("a").join("b.txt")).unwrap();
        assert_eq!(key, "a/b.txt");

        let err = resource_key(root, Path::new("/elsewhere/x")).unwrap_err();
        assert!(err.is_invalid_path());
    }
}
