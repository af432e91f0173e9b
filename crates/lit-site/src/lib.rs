//! Example assembly and catalog construction.
//!
//! A site is driven by a manifest listing example identifiers and titles in
//! page order. For each entry the [`ExampleAssembler`] reads the example's
//! source directory, segments and renders every source file, and refreshes
//! the example's playground reference when its runnable source changed.
//! The [`Catalog`] holds the examples in manifest order and links each one
//! to its neighbours.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use lit_playground::{DEFAULT_PLAYGROUND_URL, DEFAULT_TIMEOUT, PlaygroundClient};
//! use lit_site::{Catalog, ExampleAssembler, RefreshMode};
//!
//! let client = PlaygroundClient::new(DEFAULT_PLAYGROUND_URL, DEFAULT_TIMEOUT);
//! let assembler = ExampleAssembler::new("examples", RefreshMode::Publish(&client));
//! let catalog = Catalog::from_manifest(Path::new("examples.txt"), &assembler)?;
//! for example in catalog.examples() {
//!     println!("{}: {} files", example.id, example.segments.len());
//! }
//! # Ok::<(), lit_site::SiteError>(())
//! ```

mod assembler;
mod catalog;
mod error;
mod example;
mod manifest;

pub use assembler::{ExampleAssembler, RefreshMode};
pub use catalog::Catalog;
pub use error::SiteError;
pub use example::Example;
pub use manifest::{ManifestEntry, parse_manifest, read_manifest};
