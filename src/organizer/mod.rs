//! Folder organizer: sort files by extension and set duplicates aside.
//!
//! # Overview
//!
//! An [`Organizer`] owns all state for one run over one folder:
//!
//! - the extension → folder memo ([`FolderResolver`])
//! - the content hash → first path index
//! - per-destination move counters and the ordered event log
//!
//! For every regular, non-hidden file directly inside the root it decides a
//! [`Placement`] and performs at most one rename:
//!
//! 1. No extension → left in place, recorded as skipped.
//! 2. Content already seen this run → moved to `Duplicates`, whatever the
//!    extension.
//! 3. Otherwise the hash is indexed and the file moves to `root/<ext>`,
//!    unless a same-named file already sits there. In that case the file is
//!    left in place without a report entry. A name ending in `.` has the
//!    empty extension, whose folder is the root, so it always stays put.
//!
//! # Example
//!
//! ```no_run
//! use dupesort::organizer::Organizer;
//!
//! let mut organizer = Organizer::new("/home/user/Downloads");
//! let stats = organizer.organize().unwrap();
//! println!("{} of {} files processed", stats.processed_files, stats.total_files);
//!
//! for line in organizer.report().summary {
//!     println!("{}", line);
//! }
//! ```

pub mod folders;
pub mod report;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use crate::progress::ProgressCallback;
use crate::scanner::{hash_to_hex, FileEntry, Hash, HashError, Hasher, ScanError, Walker};

pub use folders::FolderResolver;
pub use report::{Event, MoveCounts, Report};

/// Name of the folder duplicates are moved into.
pub const DUPLICATES_FOLDER_NAME: &str = "Duplicates";

/// Counts returned by [`Organizer::organize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrganizeStats {
    /// Regular files directly inside the root, hidden ones included.
    pub total_files: usize,
    /// Non-hidden regular files that went through classification.
    pub processed_files: usize,
}

/// Where a processed file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No extension; left at the root.
    NoExtension,
    /// Moved into the duplicates folder.
    Duplicate(PathBuf),
    /// Moved into its extension folder.
    Extension(PathBuf),
    /// A same-named file already exists in the extension folder; left at the root.
    NameCollision(PathBuf),
}

/// Errors that can occur while organizing a folder.
#[derive(thiserror::Error, Debug)]
pub enum OrganizeError {
    /// The provided path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A destination folder could not be created.
    #[error("Failed to create folder {path}: {source}")]
    CreateFolder {
        /// Folder that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file with the same name already exists at the destination.
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// A file could not be moved.
    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        /// Source path
        from: PathBuf,
        /// Intended destination path
        to: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The root could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file could not be hashed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Check that `path` exists and is a directory.
///
/// # Errors
///
/// Returns [`OrganizeError::PathNotFound`] or [`OrganizeError::NotADirectory`].
pub fn validate_root(path: &Path) -> Result<(), OrganizeError> {
    if !path.exists() {
        return Err(OrganizeError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(OrganizeError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Sorts the files of one folder into extension folders and a duplicates folder.
pub struct Organizer {
    root: PathBuf,
    duplicates_folder: PathBuf,
    folders: FolderResolver,
    content_index: HashMap<Hash, PathBuf>,
    move_counts: MoveCounts,
    events: Vec<Event>,
    hasher: Hasher,
    progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for Organizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Organizer")
            .field("root", &self.root)
            .field("duplicates_folder", &self.duplicates_folder)
            .field("folders", &self.folders)
            .field("indexed_hashes", &self.content_index.len())
            .field("move_counts", &self.move_counts)
            .field("events", &self.events.len())
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Organizer {
    /// Create an organizer for `root` with empty run state.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            duplicates_folder: root.join(DUPLICATES_FOLDER_NAME),
            folders: FolderResolver::new(&root),
            root,
            content_index: HashMap::new(),
            move_counts: MoveCounts::default(),
            events: Vec::new(),
            hasher: Hasher::new(),
            progress_callback: None,
        }
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Folder being organized.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/Duplicates`.
    #[must_use]
    pub fn duplicates_folder(&self) -> &Path {
        &self.duplicates_folder
    }

    /// Organize the root folder.
    ///
    /// Creates `Duplicates`, lists the root once, and classifies every
    /// non-hidden regular file in listing order.
    ///
    /// # Errors
    ///
    /// Any I/O failure aborts the run. Files moved before the failure stay
    /// where they were moved.
    pub fn organize(&mut self) -> Result<OrganizeStats, OrganizeError> {
        std::fs::create_dir_all(&self.duplicates_folder).map_err(|source| {
            OrganizeError::CreateFolder {
                path: self.duplicates_folder.clone(),
                source,
            }
        })?;

        let listing = Walker::new(&self.root).list()?;
        let candidates: Vec<&FileEntry> = listing.candidates().collect();
        let mut stats = OrganizeStats {
            total_files: listing.total_files(),
            processed_files: 0,
        };

        log::info!(
            "Organizing {}: {} files ({} hidden)",
            self.root.display(),
            stats.total_files,
            listing.hidden_count()
        );

        if let Some(ref cb) = self.progress_callback {
            cb.on_phase_start("organize", candidates.len());
        }

        for entry in candidates {
            let placement = self.process_file(entry)?;
            log::trace!("{} -> {:?}", entry.name, placement);
            stats.processed_files += 1;

            if let Some(ref cb) = self.progress_callback {
                cb.on_progress(stats.processed_files, &entry.path.to_string_lossy());
            }
        }

        if let Some(ref cb) = self.progress_callback {
            cb.on_phase_end("organize");
        }

        log::info!(
            "Processed {} of {} files, moved {}",
            stats.processed_files,
            stats.total_files,
            self.move_counts.total()
        );

        Ok(stats)
    }

    /// Classify one file and carry out the resulting move.
    fn process_file(&mut self, entry: &FileEntry) -> Result<Placement, OrganizeError> {
        let Some(ext) = entry.extension() else {
            log::debug!("{} has no extension", entry.name);
            self.events.push(Event::Skipped {
                name: entry.name.clone(),
            });
            return Ok(Placement::NoExtension);
        };

        let destination = self.folders.resolve(ext)?;
        let hash = self.hasher.full_hash(&entry.path)?;

        if let Some(first) = self.content_index.get(&hash).cloned() {
            log::debug!(
                "{} duplicates {} ({})",
                entry.name,
                first.display(),
                hash_to_hex(&hash)
            );
            let duplicates = self.duplicates_folder.clone();
            self.move_file(entry, &duplicates)?;
            return Ok(Placement::Duplicate(duplicates));
        }

        self.content_index.insert(hash, entry.path.clone());

        if destination.join(&entry.file_name).exists() {
            log::debug!(
                "{} already exists in {}, leaving it in place",
                entry.name,
                destination.display()
            );
            return Ok(Placement::NameCollision(destination));
        }

        self.move_file(entry, &destination)?;
        Ok(Placement::Extension(destination))
    }

    /// Rename `entry` into `folder` and record the move.
    fn move_file(&mut self, entry: &FileEntry, folder: &Path) -> Result<(), OrganizeError> {
        let target = folder.join(&entry.file_name);
        if target.exists() {
            return Err(OrganizeError::DestinationExists(target));
        }

        std::fs::rename(&entry.path, &target).map_err(|source| OrganizeError::Move {
            from: entry.path.clone(),
            to: target.clone(),
            source,
        })?;

        self.events.push(Event::Moved {
            name: entry.name.clone(),
            destination: folder.to_path_buf(),
        });
        self.move_counts.increment(folder);
        Ok(())
    }

    /// Summary and detail lines for everything done so far.
    #[must_use]
    pub fn report(&self) -> Report {
        Report::new(&self.move_counts, &self.events)
    }

    /// Recorded events in processing order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Per-destination move counters.
    #[must_use]
    pub fn move_counts(&self) -> &MoveCounts {
        &self.move_counts
    }

    /// Path first seen with the given content hash.
    #[must_use]
    pub fn first_seen(&self, hash: &Hash) -> Option<&Path> {
        self.content_index.get(hash).map(PathBuf::as_path)
    }

    /// Number of distinct contents indexed.
    #[must_use]
    pub fn indexed_hashes(&self) -> usize {
        self.content_index.len()
    }

    /// Extension folders resolved during this run.
    #[must_use]
    pub fn folders(&self) -> &FolderResolver {
        &self.folders
    }
}
