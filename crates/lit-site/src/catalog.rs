//! Example catalog.

use std::path::Path;

use crate::assembler::ExampleAssembler;
use crate::error::SiteError;
use crate::example::Example;
use crate::manifest::{ManifestEntry, read_manifest};

/// All examples of a site in manifest order, linked to their neighbours.
#[derive(Debug, Default)]
pub struct Catalog {
    examples: Vec<Example>,
}

impl Catalog {
    /// Read the manifest at `path` and assemble every listed example.
    pub fn from_manifest(path: &Path, assembler: &ExampleAssembler<'_>) -> Result<Self, SiteError> {
        let entries = read_manifest(path)?;
        Self::build(&entries, assembler)
    }

    /// Assemble examples for `entries`, stopping at the first failure.
    pub fn build(
        entries: &[ManifestEntry],
        assembler: &ExampleAssembler<'_>,
    ) -> Result<Self, SiteError> {
        let total = entries.len();
        let mut examples = Vec::with_capacity(total);
        for (idx, entry) in entries.iter().enumerate() {
            tracing::info!(id = %entry.id, index = idx + 1, total, "Processing example");
            examples.push(assembler.assemble(entry)?);
        }
        Ok(Self::from_examples(examples))
    }

    /// Wrap already assembled examples and link neighbours by position.
    #[must_use]
    pub fn from_examples(mut examples: Vec<Example>) -> Self {
        let count = examples.len();
        for (idx, example) in examples.iter_mut().enumerate() {
            example.previous = idx.checked_sub(1);
            example.next = Some(idx + 1).filter(|&next| next < count);
        }
        Self { examples }
    }

    /// Examples in manifest order.
    #[must_use]
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Example> {
        self.examples.get(idx)
    }

    /// Look up an example by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    /// The example preceding `example`, if any.
    #[must_use]
    pub fn previous(&self, example: &Example) -> Option<&Example> {
        example.previous.and_then(|idx| self.examples.get(idx))
    }

    /// The example following `example`, if any.
    #[must_use]
    pub fn next(&self, example: &Example) -> Option<&Example> {
        example.next.and_then(|idx| self.examples.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
