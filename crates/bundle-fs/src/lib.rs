//! Hierarchical, read-only filesystem over a flat resource bundle.
//!
//! Embedded resource bundles store their content as a flat mapping from
//! path string to bytes. This crate projects such a mapping onto a
//! conventional filesystem so that code written against open/read/seek/
//! stat/list can consume it unchanged, even though no directory tree
//! exists anywhere.
//!
//! # Features
//!
//! - **On-demand resolution**: directories are implied by path prefixes and
//!   derived from the bundle's current namespace on every call
//! - **Lazy content**: bytes are fetched on first read and released on close
//! - **Std I/O integration**: handles implement [`std::io::Read`] and
//!   [`std::io::Seek`]
//! - **Pluggable bundles**: anything implementing [`ResourceGroup`] can be
//!   served; [`MemoryGroup`] and [`GroupBuilder`] cover the common case
//!
//! # Examples
//!
//! ```
//! use bundle_fs::{File, FileSystem, GroupBuilder, ResourceFs};
//! use std::io::{Read, Seek, SeekFrom};
//!
//! let group = GroupBuilder::new()
//!     .add_file("site/index.html", "<h1>Hello</h1>")
//!     .add_file("site/css/main.css", "h1 { color: red }")
//!     .build()
//!     .unwrap();
//! let fs = ResourceFs::new(group);
//!
//! // Directories are implied by prefixes
//! let site = fs.open("site").unwrap();
//! assert!(site.is_dir());
//! assert_eq!(site.read_dir(0).unwrap().len(), 2);
//!
//! // Files read and seek like any other
//! let mut index = fs.open("site/index.html").unwrap();
//! index.seek(SeekFrom::Start(4)).unwrap();
//! let mut rest = String::new();
//! index.read_to_string(&mut rest).unwrap();
//! assert_eq!(rest, "Hello</h1>");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod config;
pub mod error;
pub mod fs;
pub mod group;
pub mod handle;
pub mod metadata;
pub mod path;
pub mod resolver;
pub mod traits;

// Re-export main types
pub use builder::GroupBuilder;
pub use config::{CollisionPolicy, FsConfig, FsConfigBuilder};
pub use error::{FsError, Result};
pub use fs::ResourceFs;
pub use group::MemoryGroup;
pub use handle::Handle;
pub use metadata::{FileMode, Metadata};
pub use traits::{File, FileSystem, ResourceGroup};
