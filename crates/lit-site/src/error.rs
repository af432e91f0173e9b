//! Site error types.

use std::io;
use std::path::PathBuf;

use lit_cache::CacheError;
use lit_playground::PublishError;
use lit_renderer::UnsupportedLanguage;

/// Error building the example catalog.
///
/// Every variant is fatal: a build either completes or stops at the first
/// error, leaving no partial site behind.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A manifest line is not `id|Title`.
    #[error("malformed manifest entry on line {line}: {reason}: {content:?}")]
    MalformedManifestEntry {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The manifest, an example directory, or its sources do not exist.
    #[error("missing source: {}", .0.display())]
    MissingSourceFile(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Refreshing the playground reference failed.
    #[error("failed to publish example {id}: {source}")]
    Publish {
        id: String,
        #[source]
        source: PublishError,
    },

    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    /// Reading or writing a hash side file failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The hash file does not match the runnable source (verify mode only).
    #[error("hash file of example {id} is stale; run a build to refresh it")]
    StaleCacheRecord { id: String },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
