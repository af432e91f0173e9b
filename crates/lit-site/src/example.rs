//! Example record.

use lit_cache::CacheRecord;
use lit_segments::Segment;

/// One documentation unit: an example directory rendered as one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Example {
    /// Stable slug used for URLs and output filenames.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Concatenated source of the example's runnable-language files.
    pub runnable_source: String,
    /// Current (hash, reference) pair; `None` when nothing is runnable.
    pub record: Option<CacheRecord>,
    /// One segment list per source file, in file order.
    pub segments: Vec<Vec<Segment>>,
    /// Catalog index of the preceding example.
    pub previous: Option<usize>,
    /// Catalog index of the following example.
    pub next: Option<usize>,
}

impl Example {
    /// Create an example with no sources.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Playground reference token, if the example was published.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.reference.as_str())
    }

    /// Hash of the runnable source the reference belongs to.
    #[must_use]
    pub fn content_hash(&self) -> Option<&str> {
        self.record.as_ref().map(|r| r.content_hash.as_str())
    }
}
