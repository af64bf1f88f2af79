//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! [`Hasher`] reads a file in fixed-size blocks and feeds them to an
//! incremental BLAKE3 state, so memory use stays flat regardless of file size.
//! The file handle is dropped on every exit path, including read errors.
//!
//! # Example
//!
//! ```no_run
//! use dupesort::scanner::{hash_to_hex, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let hash = hasher.full_hash(Path::new("photo.jpg")).unwrap();
//! println!("{}", hash_to_hex(&hash));
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::HashError;

/// Size of each sequential read while hashing (8 KiB).
pub const CHUNK_SIZE: usize = 8 * 1024;

/// A 256-bit BLAKE3 content digest.
pub type Hash = [u8; 32];

/// Streaming content hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher that reads [`CHUNK_SIZE`] bytes at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom read size (clamped to at least 1 byte).
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Read size used for each block.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hash the entire content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or read.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        self.hash_reader(file)
            .map_err(|e| HashError::from_io(path, e))
    }

    /// Hash everything a reader yields until EOF.
    ///
    /// # Errors
    ///
    /// Propagates any read error other than `Interrupted`.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> io::Result<Hash> {
        let mut state = blake3::Hasher::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    state.update(&buffer[..n]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(*state.finalize().as_bytes())
    }
}

/// Convert a hash to its lowercase hexadecimal form (64 characters).
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    blake3::Hash::from(*hash).to_hex().to_string()
}
