//! Manifest parsing.
//!
//! The manifest lists examples in page order, one `id|Title` per line.
//! Blank lines and lines starting with `#` are skipped. Any other line that
//! does not split into a non-empty id and title is fatal.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::SiteError;

/// Separator between identifier and title.
const SEPARATOR: char = '|';

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Stable slug used for directory names, URLs and output files.
    pub id: String,
    /// Display title.
    pub title: String,
}

impl ManifestEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Parse manifest contents into entries, preserving order.
///
/// The title is everything after the first separator, so titles may contain
/// `|`. Identifiers must be unique.
pub fn parse_manifest(contents: &str) -> Result<Vec<ManifestEntry>, SiteError> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason| SiteError::MalformedManifestEntry {
            line: idx + 1,
            content: line.to_owned(),
            reason,
        };

        let (id, title) = line
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("expected 'id|Title'"))?;
        let (id, title) = (id.trim(), title.trim());
        if id.is_empty() || title.is_empty() {
            return Err(malformed("empty id or title"));
        }
        if !seen.insert(id.to_owned()) {
            return Err(malformed("duplicate id"));
        }

        entries.push(ManifestEntry::new(id, title));
    }

    Ok(entries)
}

/// Read and parse the manifest file at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>, SiteError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SiteError::MissingSourceFile(path.to_path_buf()),
        _ => SiteError::io(path, e),
    })?;
    parse_manifest(&contents)
}
