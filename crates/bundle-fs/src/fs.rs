//! The resource filesystem facade.
//!
//! [`ResourceFs`] projects a flat [`ResourceGroup`] onto a directory tree.
//! Nothing is indexed up front: every [`FileSystem::open`] asks the group
//! for its current namespace and resolves the requested path against it.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::{File, FileSystem, GroupBuilder, ResourceFs};
//!
//! let group = GroupBuilder::new()
//!     .add_file("a/b.txt", "hello")
//!     .add_file("a/c/d.txt", "world")
//!     .build()
//!     .unwrap();
//! let fs = ResourceFs::new(group);
//!
//! let mut dir = fs.open("a").unwrap();
//! assert!(dir.is_dir());
//! assert_eq!(dir.stat().unwrap().size(), Some(0));
//!
//! assert_eq!(fs.read("a/b.txt").unwrap(), b"hello");
//! assert!(fs.open("missing").unwrap_err().is_not_found());
//! ```

use crate::config::{CollisionPolicy, FsConfig};
use crate::error::{FsError, Result};
use crate::handle::Handle;
use crate::resolver::find_overlap;
use crate::traits::{FileSystem, ResourceGroup};
use std::io::Read;
use std::sync::Arc;

/// A read-only hierarchical view of a [`ResourceGroup`].
///
/// Cloning is cheap: clones share the same group.
///
/// # Thread Safety
///
/// `ResourceFs<G>` is `Send` and `Sync` whenever `G` is.
#[derive(Debug)]
pub struct ResourceFs<G> {
    group: Arc<G>,
    config: FsConfig,
}

impl<G> Clone for ResourceFs<G> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            config: self.config.clone(),
        }
    }
}

impl<G: ResourceGroup> ResourceFs<G> {
    /// Creates a filesystem over `group` with the default configuration.
    #[must_use]
    pub fn new(group: G) -> Self {
        Self::from_shared(Arc::new(group), FsConfig::default())
    }

    /// Creates a filesystem over `group` with a custom configuration.
    ///
    /// With [`CollisionPolicy::Reject`] the group's current namespace is
    /// checked once here; later changes to the group are still caught when
    /// an overlapping path is opened.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::OverlappingNamespace`] if the policy is
    /// [`CollisionPolicy::Reject`] and some path is both a resource and a
    /// directory prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::{CollisionPolicy, FsConfig, GroupBuilder, ResourceFs};
    ///
    /// let group = GroupBuilder::new()
    ///     .add_file("x", "file")
    ///     .add_file("x/y", "child")
    ///     .build()
    ///     .unwrap();
    /// let strict = FsConfig::builder().collision(CollisionPolicy::Reject).build();
    ///
    /// let err = ResourceFs::with_config(group, strict).unwrap_err();
    /// assert!(err.is_overlapping());
    /// ```
    pub fn with_config(group: G, config: FsConfig) -> Result<Self> {
        if config.collision == CollisionPolicy::Reject
            && let Some(path) = find_overlap(group.entries())
        {
            tracing::warn!(%path, "namespace has a path that is both a file and a directory");
            return Err(FsError::OverlappingNamespace { path });
        }
        Ok(Self::from_shared(Arc::new(group), config))
    }

    /// Creates a filesystem over an already shared group without
    /// validating its namespace.
    #[must_use]
    pub const fn from_shared(group: Arc<G>, config: FsConfig) -> Self {
        Self { group, config }
    }

    /// The underlying resource group.
    #[must_use]
    pub fn group(&self) -> &G {
        &self.group
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FsConfig {
        &self.config
    }

    /// Returns `true` if `path` opens as a resource or a directory.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.open(path).is_ok()
    }

    /// Opens `path` and reads the whole resource.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] for unknown paths,
    /// [`FsError::NotAFile`] for directories, or the resource group's fetch
    /// error.
    pub fn read(&self, path: &str) -> Result<Vec<u8>> {
        let mut handle = self.open(path)?;
        let mut content = Vec::new();
        handle.read_to_end(&mut content).map_err(|e| unwrap_io(e, path))?;
        Ok(content)
    }
}

impl<G: ResourceGroup> FileSystem for ResourceFs<G> {
    type File = Handle<G>;

    fn open(&self, path: &str) -> Result<Handle<G>> {
        let path = self.config.resolve_path(path);
        tracing::debug!(path, "opening");

        let namespace = self.group.entries();
        Handle::resolve_in(
            Arc::clone(&self.group),
            self.config.collision,
            &namespace,
            path,
        )
    }
}

/// Recovers the [`FsError`] carried inside an I/O error raised by a handle.
fn unwrap_io(error: std::io::Error, path: &str) -> FsError {
    match error.into_inner() {
        Some(inner) => match inner.downcast::<FsError>() {
            Ok(fs_error) => *fs_error,
            Err(other) => FsError::FetchFailed {
                path: path.to_string(),
                reason: other.to_string(),
            },
        },
        None => FsError::FetchFailed {
            path: path.to_string(),
            reason: "read failed".to_string(),
        },
    }
}
