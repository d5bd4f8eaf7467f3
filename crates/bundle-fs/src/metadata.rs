//! Metadata views of resources and directories.
//!
//! Resources are immutable and carry no stored timestamps or permissions,
//! so most of a [`Metadata`] is synthesized: the mode is always read-only,
//! the modification time is the moment the view was taken, and there is no
//! underlying OS object.

use std::any::Any;
use std::fmt;
use std::time::SystemTime;

/// File mode bits in the Unix layout.
///
/// Resources are always `0o444`; directories add the directory type bit.
/// Write and execute bits are never set.
///
/// # Examples
///
/// ```
/// use bundle_fs::FileMode;
///
/// assert_eq!(FileMode::file().permissions(), 0o444);
/// assert!(FileMode::dir().is_dir());
/// assert_eq!(FileMode::dir().to_string(), "dr--r--r--");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Directory type bit (`S_IFDIR`).
    pub const DIR_BIT: u32 = 0o040_000;

    /// Permission bits shared by every resource.
    pub const READ_ONLY: u32 = 0o444;

    const PERMISSION_MASK: u32 = 0o777;

    /// Mode of a plain resource.
    #[must_use]
    pub const fn file() -> Self {
        Self(Self::READ_ONLY)
    }

    /// Mode of a directory.
    #[must_use]
    pub const fn dir() -> Self {
        Self(Self::DIR_BIT | Self::READ_ONLY)
    }

    /// Permission bits only.
    #[must_use]
    pub const fn permissions(self) -> u32 {
        self.0 & Self::PERMISSION_MASK
    }

    /// Returns `true` if the directory bit is set.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        self.0 & Self::DIR_BIT != 0
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RWX: &[u8; 9] = b"rwxrwxrwx";

        let mut out = String::with_capacity(10);
        out.push(if self.is_dir() { 'd' } else { '-' });
        for (i, c) in RWX.iter().enumerate() {
            let bit = 1 << (8 - i);
            out.push(if self.0 & bit == 0 { '-' } else { char::from(*c) });
        }
        f.write_str(&out)
    }
}

/// A metadata snapshot of an open handle or a directory entry.
///
/// # Examples
///
/// ```
/// use bundle_fs::{FileSystem, File, MemoryGroup, ResourceFs};
///
/// let mut group = MemoryGroup::new();
/// group.add_file("a/b.txt", "hello").unwrap();
/// let fs = ResourceFs::new(group);
///
/// let meta = fs.open("a/b.txt").unwrap().stat().unwrap();
/// assert_eq!(meta.name(), "b.txt");
/// assert_eq!(meta.size(), Some(5));
/// assert!(!meta.is_dir());
/// assert!(meta.sys().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    size: Option<u64>,
    mode: FileMode,
    modified: SystemTime,
}

impl Metadata {
    pub(crate) fn new(name: impl Into<String>, size: Option<u64>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            size,
            mode: if is_dir {
                FileMode::dir()
            } else {
                FileMode::file()
            },
            modified: SystemTime::now(),
        }
    }

    /// Final path segment of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content length in bytes.
    ///
    /// `Some(0)` for directories, `None` when the content of a resource
    /// could not be fetched.
    #[must_use]
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Content length with `-1` standing in for an inaccessible resource.
    #[must_use]
    pub fn len(&self) -> i64 {
        self.size
            .map_or(-1, |size| i64::try_from(size).unwrap_or(i64::MAX))
    }

    /// Returns `true` if the entry has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == Some(0)
    }

    /// Synthesized mode bits.
    #[must_use]
    pub const fn mode(&self) -> FileMode {
        self.mode
    }

    /// The wall-clock time at which this snapshot was taken.
    #[must_use]
    pub const fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }

    /// Returns `true` for plain resources.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        !self.is_dir()
    }

    /// Underlying data source. Resources are never backed by an OS object.
    #[must_use]
    pub const fn sys(&self) -> Option<&dyn Any> {
        None
    }
}
