//! Content-hash cache for external example references.
//!
//! Publishing an example's runnable source yields an opaque reference token
//! (a share link key). To avoid publishing unchanged sources on every build,
//! the token is persisted together with the hash of the exact source it was
//! obtained for:
//!
//! - [`content_hash`]: hex SHA-1 digest of a source snapshot
//! - [`CacheRecord`]: the persisted (hash, reference) pair
//! - [`check`]: decides whether the reference must be refreshed
//! - [`HashFile`]: two-line side file holding a [`CacheRecord`]
//!
//! A mismatch between the fresh hash and the persisted one is the only
//! trigger for a refresh, so rebuilding unchanged sources never publishes.
//!
//! # Example
//!
//! ```
//! use lit_cache::{CacheRecord, check};
//!
//! let source = "package main\n";
//! let first = check(None, source);
//! assert!(first.needs_refresh);
//!
//! let record = CacheRecord::new(first.hash, "abc123");
//! assert!(!check(Some(&record), source).needs_refresh);
//! ```

mod file;
pub use file::{CacheError, HashFile};

use sha1::{Digest, Sha1};

/// Compute the lower-case hex SHA-1 digest of `content`.
#[must_use]
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Persisted pair of a content hash and the reference obtained for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord {
    /// Hash of the source snapshot the reference was obtained for.
    pub content_hash: String,
    /// Opaque reference token returned by the publisher.
    pub reference: String,
}

impl CacheRecord {
    /// Create a record.
    #[must_use]
    pub fn new(content_hash: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            content_hash: content_hash.into(),
            reference: reference.into(),
        }
    }
}

/// Outcome of comparing a source snapshot against a prior record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheCheck {
    /// True when the prior reference cannot be reused.
    pub needs_refresh: bool,
    /// Hash of the current source.
    pub hash: String,
}

/// Decide whether the reference for `source` must be refreshed.
///
/// A refresh is needed when there is no prior record or its hash differs
/// from the hash of `source`.
#[must_use]
pub fn check(prior: Option<&CacheRecord>, source: &str) -> CacheCheck {
    let hash = content_hash(source);
    let needs_refresh = prior.is_none_or(|record| record.content_hash != hash);
    tracing::debug!(hash = %hash, needs_refresh, "Checked content hash");
    CacheCheck {
        needs_refresh,
        hash,
    }
}
