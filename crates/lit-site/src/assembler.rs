//! Example assembly.
//!
//! Each example lives in `<source_dir>/<id>/`. Files are processed in glob
//! (alphabetical) order, which is also their order on the page:
//!
//! - `<id>.hash` provides the prior [`CacheRecord`]; other `*.hash` files
//!   are skipped
//! - every other file is segmented and rendered according to its language
//! - runnable-language sources are concatenated for hashing and publishing

use std::fs;
use std::path::{Path, PathBuf};

use lit_cache::{CacheRecord, HashFile, check};
use lit_playground::Publisher;
use lit_renderer::{Language, SegmentRenderer};
use lit_segments::{Segment, segment_source};

use crate::error::SiteError;
use crate::example::Example;
use crate::manifest::ManifestEntry;

/// What to do when an example's hash file is out of date.
#[derive(Clone, Copy)]
pub enum RefreshMode<'a> {
    /// Publish the new source and rewrite the hash file.
    Publish(&'a dyn Publisher),
    /// Report a stale hash file as an error; never publish or write.
    Verify,
}

/// Builds [`Example`]s from example source directories.
pub struct ExampleAssembler<'a> {
    source_dir: PathBuf,
    mode: RefreshMode<'a>,
}

impl<'a> ExampleAssembler<'a> {
    /// Create an assembler reading examples below `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>, mode: RefreshMode<'a>) -> Self {
        Self {
            source_dir: source_dir.into(),
            mode,
        }
    }

    /// Root directory containing one subdirectory per example.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Assemble the example named by a manifest entry.
    ///
    /// The returned example is not yet linked to its neighbours.
    pub fn assemble(&self, entry: &ManifestEntry) -> Result<Example, SiteError> {
        let example_dir = self.source_dir.join(&entry.id);
        if !example_dir.is_dir() {
            return Err(SiteError::MissingSourceFile(example_dir));
        }

        let mut segments: Vec<Vec<Segment>> = Vec::new();
        let mut runnable: Vec<String> = Vec::new();
        let prior = HashFile::for_example(&example_dir, &entry.id).read()?;

        for path in source_paths(&example_dir)? {
            if HashFile::is_hash_file(&path) {
                continue;
            }

            let language = Language::from_path(&path)?;
            let contents = fs::read_to_string(&path).map_err(|e| SiteError::io(&path, e))?;
            tracing::debug!(path = %path.display(), language = language.name(), "Segmenting file");

            let mut file = segment_source(&contents, language.entry_marker());
            SegmentRenderer::new(language).render(&mut file.segments);
            if language.is_runnable() {
                runnable.push(file.source);
            }
            segments.push(file.segments);
        }

        if segments.is_empty() {
            return Err(SiteError::MissingSourceFile(example_dir));
        }

        let runnable_source = runnable.join("\n");
        let record = self.refresh(&entry.id, &example_dir, prior, &runnable_source)?;

        Ok(Example {
            id: entry.id.clone(),
            title: entry.title.clone(),
            runnable_source,
            record,
            segments,
            previous: None,
            next: None,
        })
    }

    /// Reuse the prior record if it matches `source`, otherwise refresh it.
    fn refresh(
        &self,
        id: &str,
        example_dir: &Path,
        prior: Option<CacheRecord>,
        source: &str,
    ) -> Result<Option<CacheRecord>, SiteError> {
        // Nothing to run, so nothing to publish.
        if source.is_empty() {
            return Ok(None);
        }

        let checked = check(prior.as_ref(), source);
        if !checked.needs_refresh {
            return Ok(prior);
        }

        match self.mode {
            RefreshMode::Verify => Err(SiteError::StaleCacheRecord { id: id.to_owned() }),
            RefreshMode::Publish(publisher) => {
                tracing::info!(id, "Publishing example");
                let reference = publisher.share(source).map_err(|source| SiteError::Publish {
                    id: id.to_owned(),
                    source,
                })?;
                let record = CacheRecord::new(checked.hash, reference);
                HashFile::for_example(example_dir, id).write(&record)?;
                Ok(Some(record))
            }
        }
    }
}

/// Regular files directly inside `dir`, in alphabetical order.
fn source_paths(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let pattern = format!("{}/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            SiteError::io(path, e.into_error())
        })?;
        if !path.is_dir() {
            paths.push(path);
        }
    }
    Ok(paths)
}
