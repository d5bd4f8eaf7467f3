//! Open file and directory handles.
//!
//! A [`Handle`] is bound to one resolved path. It records whether a
//! resource exists at that path and which resources live beneath it, and
//! fetches the resource bytes lazily on the first read, seek or stat. The
//! fetched bytes are owned by the handle until [`File::close`] or drop;
//! access after `close` simply fetches them again.
//!
//! A handle with children is a directory, even when a resource with the
//! same name also exists. Reading such a handle fails with
//! [`FsError::NotAFile`].

use crate::config::CollisionPolicy;
use crate::error::{FsError, Result};
use crate::metadata::Metadata;
use crate::path::{base_name, parent_dir};
use crate::resolver::{Resolution, resolve};
use crate::traits::{File, ResourceGroup};
use std::fmt;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;

/// An open handle on a resource or an implied directory.
///
/// # Examples
///
/// ```
/// use bundle_fs::{File, FileSystem, GroupBuilder, ResourceFs};
/// use std::io::Read;
///
/// let group = GroupBuilder::new()
///     .add_file("a/b.txt", "hello")
///     .add_file("a/c/d.txt", "world")
///     .build()
///     .unwrap();
/// let fs = ResourceFs::new(group);
///
/// let mut file = fs.open("a/b.txt").unwrap();
/// let mut content = String::new();
/// file.read_to_string(&mut content).unwrap();
/// assert_eq!(content, "hello");
///
/// let dir = fs.open("a").unwrap();
/// let names: Vec<_> = dir
///     .read_dir(0)
///     .unwrap()
///     .iter()
///     .map(|m| m.name().to_string())
///     .collect();
/// assert_eq!(names, ["b.txt", "d.txt"]);
/// ```
pub struct Handle<G> {
    group: Arc<G>,
    collision: CollisionPolicy,
    path: String,
    parent: String,
    exists: bool,
    children: Vec<String>,
    buffer: Option<Cursor<Arc<[u8]>>>,
}

impl<G: ResourceGroup> Handle<G> {
    /// Resolves `path` against `namespace` and binds a handle to the result.
    pub(crate) fn resolve_in(
        group: Arc<G>,
        collision: CollisionPolicy,
        namespace: &[String],
        path: &str,
    ) -> Result<Self> {
        let resolution = resolve(namespace, path)?;
        Self::from_resolution(group, collision, path, resolution)
    }

    fn from_resolution(
        group: Arc<G>,
        collision: CollisionPolicy,
        path: &str,
        resolution: Resolution,
    ) -> Result<Self> {
        if resolution.is_overlapping() {
            match collision {
                CollisionPolicy::PreferDirectory => {
                    tracing::debug!(path, "resource name is also a directory prefix");
                }
                CollisionPolicy::Reject => {
                    tracing::warn!(path, "rejecting path that is both a file and a directory");
                    return Err(FsError::OverlappingNamespace {
                        path: path.to_string(),
                    });
                }
            }
        }

        let (exists, children) = resolution.into_parts();
        Ok(Self {
            group,
            collision,
            path: path.to_string(),
            parent: parent_dir(path).to_string(),
            exists,
            children,
            buffer: None,
        })
    }

    /// The full path this handle was opened with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The directory containing this handle's path.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// Final path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        base_name(&self.path)
    }

    /// Returns `true` if a resource is registered at exactly this path.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// Every resource path beneath this handle, in namespace order.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns `true` if at least one resource lives beneath this path.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if the resource bytes are currently held.
    #[must_use]
    pub const fn is_buffered(&self) -> bool {
        self.buffer.is_some()
    }

    /// Returns the buffered content cursor, fetching it on first use.
    fn acquire(&mut self) -> Result<&mut Cursor<Arc<[u8]>>> {
        if !self.exists || self.is_dir() {
            return Err(FsError::NotAFile {
                path: self.path.clone(),
            });
        }

        let cursor = match self.buffer.take() {
            Some(cursor) => cursor,
            None => {
                let bytes = self.group.bytes_for(&self.path).inspect_err(|error| {
                    tracing::warn!(path = %self.path, %error, "resource fetch failed");
                })?;
                tracing::debug!(path = %self.path, bytes = bytes.len(), "fetched resource");
                Cursor::new(bytes)
            }
        };
        Ok(self.buffer.insert(cursor))
    }

    fn content_len(&mut self) -> Result<u64> {
        let len = self.acquire()?.get_ref().len();
        Ok(u64::try_from(len).unwrap_or(u64::MAX))
    }

    /// Metadata where a failed fetch shows up as an inaccessible size.
    fn metadata_lossy(&mut self) -> Metadata {
        if self.is_dir() {
            return Metadata::new(self.name(), Some(0), true);
        }
        let size = self.content_len().ok();
        Metadata::new(self.name(), size, false)
    }
}

impl<G: ResourceGroup> Read for Handle<G> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.acquire()?.read(buf)
    }
}

impl<G: ResourceGroup> Seek for Handle<G> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let cursor = self.acquire()?;
        let (base, offset) = match pos {
            SeekFrom::Start(target) => {
                cursor.set_position(target);
                return Ok(target);
            }
            SeekFrom::Current(offset) => (cursor.position(), offset),
            SeekFrom::End(offset) => (
                u64::try_from(cursor.get_ref().len()).unwrap_or(u64::MAX),
                offset,
            ),
        };

        let target = base
            .checked_add_signed(offset)
            .ok_or(FsError::InvalidSeek { offset })?;
        cursor.set_position(target);
        Ok(target)
    }
}

impl<G: ResourceGroup> File for Handle<G> {
    fn close(&mut self) {
        if self.buffer.take().is_some() {
            tracing::trace!(path = %self.path, "released resource buffer");
        }
    }

    fn stat(&mut self) -> Result<Metadata> {
        if self.is_dir() {
            return Ok(Metadata::new(self.name(), Some(0), true));
        }
        let size = self.content_len()?;
        Ok(Metadata::new(self.name(), Some(size), false))
    }

    fn read_dir(&self, _count: usize) -> Result<Vec<Metadata>> {
        if !self.is_dir() {
            return Err(FsError::NotADirectory {
                path: self.path.clone(),
            });
        }

        let namespace = self.group.entries();
        tracing::debug!(
            path = %self.path,
            children = self.children.len(),
            "listing directory"
        );

        let mut entries = Vec::with_capacity(self.children.len());
        for child in &self.children {
            match Self::resolve_in(Arc::clone(&self.group), self.collision, &namespace, child) {
                Ok(mut handle) => entries.push(handle.metadata_lossy()),
                Err(error) if error.is_not_found() => {
                    tracing::warn!(path = %child, "listed resource no longer in namespace");
                    entries.push(Metadata::new(base_name(child), None, false));
                }
                Err(error) => return Err(error),
            }
        }
        Ok(entries)
    }
}

impl<G> fmt::Debug for Handle<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("path", &self.path)
            .field("parent", &self.parent)
            .field("exists", &self.exists)
            .field("children", &self.children)
            .field("buffered", &self.buffer.is_some())
            .finish_non_exhaustive()
    }
}
