//! Hash side files.
//!
//! Each example directory may contain `<id>.hash`, a two-line text file:
//!
//! ```text
//! <content hash>
//! <reference token>
//! ```
//!
//! The file is always rewritten in full; a refresh never appends.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::CacheRecord;

/// Extension of hash side files.
pub const HASH_FILE_EXTENSION: &str = "hash";

/// Error reading or writing a hash side file.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed hash file {}: expected hash and reference lines", path.display())]
    Malformed { path: PathBuf },
}

/// A hash side file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFile {
    path: PathBuf,
}

impl HashFile {
    /// Side file at an explicit path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Side file of example `id` inside `example_dir` (`<example_dir>/<id>.hash`).
    #[must_use]
    pub fn for_example(example_dir: &Path, id: &str) -> Self {
        Self::new(example_dir.join(format!("{id}.{HASH_FILE_EXTENSION}")))
    }

    /// Whether `path` names a hash side file.
    #[must_use]
    pub fn is_hash_file(path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == HASH_FILE_EXTENSION)
    }

    /// Path of the side file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, or `None` if the file does not exist.
    pub fn read(&self) -> Result<Option<CacheRecord>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => self.parse(&contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Parse side file contents: first line hash, second line reference.
    pub fn parse(&self, contents: &str) -> Result<CacheRecord, CacheError> {
        let mut lines = contents.lines().map(str::trim);
        match (lines.next(), lines.next()) {
            (Some(hash), Some(reference)) if !hash.is_empty() && !reference.is_empty() => {
                Ok(CacheRecord::new(hash, reference))
            }
            _ => Err(CacheError::Malformed {
                path: self.path.clone(),
            }),
        }
    }

    /// Overwrite the side file with `record`.
    pub fn write(&self, record: &CacheRecord) -> Result<(), CacheError> {
        let data = format!("{}\n{}\n", record.content_hash, record.reference);
        fs::write(&self.path, data).map_err(|source| CacheError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), "Wrote hash file");
        Ok(())
    }
}
