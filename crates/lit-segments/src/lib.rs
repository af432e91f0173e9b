//! Segmentation of annotated example sources.
//!
//! An example source file interleaves line comments (prose) with code. This
//! crate splits such a file into an ordered list of [`Segment`]s, each holding
//! either documentation or code, never both:
//!
//! - [`classify_line`]: decides whether one line is documentation, code, or blank
//! - [`segment_source`]: groups classified lines into alternating segments
//!
//! Rendering of the segments (markdown, syntax highlighting) lives in
//! `lit-renderer`; this crate is pure and does no I/O.
//!
//! # Example
//!
//! ```
//! use lit_segments::segment_source;
//!
//! let file = segment_source("// Print a greeting.\nfmt.Println(\"hi\")\n", Some("package main"));
//! assert_eq!(file.segments.len(), 2);
//! assert_eq!(file.segments[0].docs, "Print a greeting.");
//! assert_eq!(file.segments[1].code, "fmt.Println(\"hi\")");
//! ```

mod classify;
mod segment;
mod segmenter;

pub use classify::{LineKind, classify_line};
pub use segment::Segment;
pub use segmenter::{SegmentedFile, TAB_EXPANSION, expand_tabs, segment_source};
