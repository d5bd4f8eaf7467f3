//! Capability traits at the seams of the resource filesystem.
//!
//! - [`ResourceGroup`] is what the filesystem needs from the bundle that
//!   owns the bytes.
//! - [`FileSystem`] is what callers use to open paths.
//! - [`File`] is the capability set of an open handle on top of
//!   [`std::io::Read`] and [`std::io::Seek`].
//!
//! # Examples
//!
//! Implementing a resource group over static data:
//!
//! ```
//! use bundle_fs::traits::ResourceGroup;
//! use bundle_fs::{FsError, Result};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Embedded;
//!
//! impl ResourceGroup for Embedded {
//!     fn entries(&self) -> Vec<String> {
//!         vec!["index.html".to_string()]
//!     }
//!
//!     fn bytes_for(&self, path: &str) -> Result<Arc<[u8]>> {
//!         match path {
//!             "index.html" => Ok(Arc::from(&b"<h1>hi</h1>"[..])),
//!             _ => Err(FsError::FetchFailed {
//!                 path: path.to_string(),
//!                 reason: "not embedded".to_string(),
//!             }),
//!         }
//!     }
//! }
//!
//! assert_eq!(Embedded.entries().len(), 1);
//! ```

use crate::error::Result;
use crate::metadata::Metadata;
use std::io::{Read, Seek};
use std::sync::Arc;

/// A flat collection of named byte resources.
///
/// Implementations own the namespace and the bytes. The filesystem asks for
/// the namespace again on every resolution, so a group whose contents change
/// is observed as-is on the next call.
pub trait ResourceGroup {
    /// Returns every resource path in the group.
    ///
    /// The order of the returned paths is the order directory listings
    /// report children in.
    fn entries(&self) -> Vec<String>;

    /// Returns the content of the resource registered at exactly `path`.
    ///
    /// # Errors
    ///
    /// Returns an error (typically [`FsError::FetchFailed`]) if `path` is not
    /// a registered resource.
    ///
    /// [`FsError::FetchFailed`]: crate::FsError::FetchFailed
    fn bytes_for(&self, path: &str) -> Result<Arc<[u8]>>;
}

impl<G: ResourceGroup + ?Sized> ResourceGroup for Arc<G> {
    fn entries(&self) -> Vec<String> {
        (**self).entries()
    }

    fn bytes_for(&self, path: &str) -> Result<Arc<[u8]>> {
        (**self).bytes_for(path)
    }
}

/// An open, read-only file or directory handle.
///
/// Reading and seeking come from [`Read`] and [`Seek`] and only succeed on
/// resources. [`File::read_dir`] only succeeds on directories.
pub trait File: Read + Seek {
    /// Releases any buffered content.
    ///
    /// The handle stays usable: metadata and listings keep working, and a
    /// later read or seek fetches the content again.
    fn close(&mut self);

    /// Returns a metadata snapshot of the handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the content size of a resource cannot be
    /// determined because the resource group failed to produce it.
    fn stat(&mut self) -> Result<Metadata>;

    /// Lists the entries beneath a directory handle.
    ///
    /// `count` is accepted for compatibility with count-limited listing
    /// APIs; every entry is always returned.
    ///
    /// Entries whose content cannot be fetched, or that have left the
    /// namespace since the directory was opened, are still listed with an
    /// inaccessible size.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotADirectory`] if the handle has no children.
    /// Under [`CollisionPolicy::Reject`], returns
    /// [`FsError::OverlappingNamespace`] if any listed entry is both a
    /// resource and a directory prefix.
    ///
    /// [`FsError::NotADirectory`]: crate::FsError::NotADirectory
    /// [`FsError::OverlappingNamespace`]: crate::FsError::OverlappingNamespace
    /// [`CollisionPolicy::Reject`]: crate::CollisionPolicy::Reject
    fn read_dir(&self, count: usize) -> Result<Vec<Metadata>>;
}

/// A hierarchical filesystem that can open paths.
pub trait FileSystem {
    /// The handle type returned by [`FileSystem::open`].
    type File: File;

    /// Opens a file or directory.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::NotFound`] if the path is neither a resource nor a
    /// directory.
    ///
    /// [`FsError::NotFound`]: crate::FsError::NotFound
    fn open(&self, path: &str) -> Result<Self::File>;
}
