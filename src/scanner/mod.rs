//! Scanner module for root listing and file hashing.
//!
//! This module provides functionality for:
//! - Listing the immediate entries of the folder being organized
//! - Content hashing with BLAKE3 over fixed-size reads
//!
//! # Architecture
//!
//! - [`walker`]: single-level directory listing
//! - [`hasher`]: BLAKE3 file hashing (streaming)
//!
//! # Example
//!
//! ```no_run
//! use dupesort::scanner::Walker;
//! use std::path::Path;
//!
//! let listing = Walker::new(Path::new(".")).list().unwrap();
//! for entry in listing.candidates() {
//!     println!("{}", entry.name);
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

pub use hasher::{hash_to_hex, Hash, Hasher, CHUNK_SIZE};
pub use walker::{Listing, Walker};

/// A regular file found directly inside the root folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file
    pub path: PathBuf,
    /// File name as stored on disk
    pub file_name: OsString,
    /// File name for display and extension parsing
    pub name: String,
}

impl FileEntry {
    /// Create a new entry from a full path.
    ///
    /// The file name is taken from the last path component; an empty name is
    /// used when the path has none.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let file_name = path.file_name().map(OsString::from).unwrap_or_default();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            path,
            file_name,
            name,
        }
    }

    /// Whether the name starts with a dot.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Extension as written: the text after the last `.`, without the dot.
    ///
    /// Returns `None` for names without a dot and `Some("")` for names ending
    /// in one.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.name)
    }
}

/// Extract the extension of a file name, preserving case.
///
/// A trailing dot yields an empty extension rather than none.
///
/// # Examples
///
/// ```
/// use dupesort::scanner::extension_of;
///
/// assert_eq!(extension_of("photo.JPG"), Some("JPG"));
/// assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
/// assert_eq!(extension_of("readme"), None);
/// assert_eq!(extension_of("trailing."), Some(""));
/// ```
#[must_use]
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Errors that can occur while listing the root folder.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing the folder.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while reading the folder.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl HashError {
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
