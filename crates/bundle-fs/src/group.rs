//! In-memory resource group.
//!
//! [`MemoryGroup`] is the reference [`ResourceGroup`]: a flat, ordered map
//! from resource path to bytes. Content is stored as `Arc<[u8]>` so that
//! handles share it without copying.
//!
//! # Examples
//!
//! ```
//! use bundle_fs::{MemoryGroup, ResourceGroup};
//!
//! let mut group = MemoryGroup::new();
//! group.add_file("static/app.js", "console.log('hi');").unwrap();
//!
//! assert_eq!(group.entries(), vec!["static/app.js".to_string()]);
//! assert_eq!(&*group.bytes_for("static/app.js").unwrap(), b"console.log('hi');");
//! ```

use crate::error::{FsError, Result};
use crate::path::validate_resource_path;
use crate::traits::ResourceGroup;
use std::collections::HashMap;
use std::sync::Arc;

/// A flat collection of resources held in memory.
///
/// Paths keep the order in which they were first added; that order is the
/// namespace order seen by the resolver and by directory listings.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, making it safe to share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MemoryGroup {
    order: Vec<String>,
    files: HashMap<String, Arc<[u8]>>,
}

impl MemoryGroup {
    /// Creates a new empty group.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::MemoryGroup;
    ///
    /// let group = MemoryGroup::new();
    /// assert!(group.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource to the group.
    ///
    /// If a resource already exists at the path, its content is replaced and
    /// it keeps its original position in the namespace.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::InvalidPath`] if the path is empty or has empty
    /// segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use bundle_fs::MemoryGroup;
    ///
    /// let mut group = MemoryGroup::new();
    /// group.add_file("a/b.txt", "first").unwrap();
    /// group.add_file("a/b.txt", "second").unwrap();
    ///
    /// assert_eq!(group.len(), 1);
    /// assert!(group.add_file("a//b.txt", "").is_err());
    /// ```
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Result<()> {
        let path = path.into();
        validate_resource_path(&path)?;

        let content: Arc<[u8]> = Arc::from(content.into());
        if self.files.insert(path.clone(), content).is_none() {
            self.order.push(path);
        }
        Ok(())
    }

    /// Returns `true` if a resource is registered at exactly `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the group holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns all resource paths in namespace order.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.order
    }
}

impl ResourceGroup for MemoryGroup {
    fn entries(&self) -> Vec<String> {
        self.order.clone()
    }

    fn bytes_for(&self, path: &str) -> Result<Arc<[u8]>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::FetchFailed {
                path: path.to_string(),
                reason: "no resource registered at this path".to_string(),
            })
    }
}
