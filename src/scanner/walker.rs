//! Single-level directory listing using walkdir.
//!
//! # Overview
//!
//! [`Walker`] lists the entries that sit directly inside the root folder.
//! Sub-directories are never descended into. The listing is taken once and
//! serves both the file count and the processing loop, so the two always see
//! the same set of files.
//!
//! Entries are sorted by file name, which makes a run reproducible for a
//! given directory content.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Lists the immediate regular files of a folder.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
}

/// Result of listing the root folder.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Every regular file directly inside the root, hidden ones included.
    pub files: Vec<FileEntry>,
    /// Number of sub-directories skipped.
    pub skipped_dirs: usize,
    /// Number of entries that were neither regular files nor directories.
    pub skipped_other: usize,
}

impl Listing {
    /// Number of regular files, hidden ones included.
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    /// Files eligible for organizing: regular files not starting with `.`.
    pub fn candidates(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter().filter(|f| !f.is_hidden())
    }

    /// Number of hidden regular files.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_hidden()).count()
    }
}

impl Walker {
    /// Create a walker for the given folder.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// List the root's immediate entries.
    ///
    /// Symbolic links are not followed; a link is counted as "other".
    ///
    /// # Errors
    ///
    /// Returns [`ScanError`] if the root is missing, is not a directory, or
    /// an entry cannot be read.
    pub fn list(&self) -> Result<Listing, ScanError> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| self.map_io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut listing = Listing::default();
        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walk {
            let entry = entry.map_err(|e| self.map_walk_error(e))?;
            let file_type = entry.file_type();

            if file_type.is_file() {
                log::trace!("Found file: {}", entry.path().display());
                listing.files.push(FileEntry::new(entry.into_path()));
            } else if file_type.is_dir() {
                log::trace!("Skipping directory: {}", entry.path().display());
                listing.skipped_dirs += 1;
            } else {
                log::debug!("Skipping non-regular entry: {}", entry.path().display());
                listing.skipped_other += 1;
            }
        }

        log::debug!(
            "Listed {}: {} files, {} directories, {} other",
            self.root.display(),
            listing.files.len(),
            listing.skipped_dirs,
            listing.skipped_other
        );

        Ok(listing)
    }

    fn map_io(&self, path: &Path, err: io::Error) -> ScanError {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    fn map_walk_error(&self, err: walkdir::Error) -> ScanError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        match err.into_io_error() {
            Some(io_err) => self.map_io(&path, io_err),
            None => ScanError::Io {
                path,
                source: io::Error::other("filesystem loop detected"),
            },
        }
    }
}
