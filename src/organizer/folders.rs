//! Per-run memo of extension folders.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::OrganizeError;

/// Maps an extension to its folder under the root, creating it on first use.
///
/// Directory creation is attempted at most once per distinct extension.
#[derive(Debug, Clone)]
pub struct FolderResolver {
    root: PathBuf,
    folders: HashMap<String, PathBuf>,
}

impl FolderResolver {
    /// Create an empty resolver for `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            folders: HashMap::new(),
        }
    }

    /// Folder for `ext`, creating `root/<ext>` if this is its first use.
    ///
    /// The empty extension maps to the root itself.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::CreateFolder`] if the folder cannot be created.
    pub fn resolve(&mut self, ext: &str) -> Result<PathBuf, OrganizeError> {
        if let Some(folder) = self.folders.get(ext) {
            return Ok(folder.clone());
        }

        let folder = if ext.is_empty() {
            self.root.clone()
        } else {
            self.root.join(ext)
        };
        std::fs::create_dir_all(&folder).map_err(|source| OrganizeError::CreateFolder {
            path: folder.clone(),
            source,
        })?;
        log::debug!("Using folder {} for .{} files", folder.display(), ext);

        self.folders.insert(ext.to_string(), folder.clone());
        Ok(folder)
    }

    /// Folder already resolved for `ext`, if any.
    #[must_use]
    pub fn get(&self, ext: &str) -> Option<&Path> {
        self.folders.get(ext).map(PathBuf::as_path)
    }

    /// Number of distinct extensions resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Whether no extension has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
