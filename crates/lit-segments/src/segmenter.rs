//! Segmenter state machine.
//!
//! Lines are classified top to bottom while tracking which kind of line was
//! seen last. Consecutive lines of the same kind coalesce into one segment;
//! a kind switch or a blank line starts the next segment.

use crate::classify::{LineKind, classify_line};
use crate::segment::Segment;

/// Replacement for each tab character before classification.
pub const TAB_EXPANSION: &str = "    ";

/// Kind of the most recent non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastSeen {
    /// Start of file, or a blank line was just seen.
    Nothing,
    Docs,
    Code,
}

/// Result of segmenting one source file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SegmentedFile {
    /// Segments in document order.
    pub segments: Vec<Segment>,
    /// The original, unmodified file content (tabs preserved).
    pub source: String,
}

/// Expand tabs to spaces so that rendering widths are uniform.
#[must_use]
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', TAB_EXPANSION)
}

/// Split annotated source text into documentation and code segments.
///
/// `entry_marker` is the string marking a runnable program in this file's
/// language (e.g. `package main`); segments whose code contains it get
/// [`Segment::is_entry_point`] set. Pass `None` for languages without one.
#[must_use]
pub fn segment_source(input: &str, entry_marker: Option<&str>) -> SegmentedFile {
    let mut segments: Vec<Segment> = Vec::new();
    let mut last_seen = LastSeen::Nothing;

    for raw in input.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        let line = expand_tabs(raw);

        match classify_line(&line) {
            LineKind::Blank => {
                last_seen = LastSeen::Nothing;
            }
            LineKind::Docs(text) => {
                tracing::debug!(line = %line, "Docs line");
                match segments.last_mut() {
                    Some(current) if last_seen == LastSeen::Docs => {
                        current.docs.push('\n');
                        current.docs.push_str(text);
                    }
                    _ => {
                        tracing::debug!("New docs segment");
                        segments.push(Segment::docs(text));
                    }
                }
                last_seen = LastSeen::Docs;
            }
            LineKind::Code(text) => {
                tracing::debug!(line = %line, "Code line");
                match segments.last_mut() {
                    Some(current) if last_seen == LastSeen::Code => {
                        current.code.push('\n');
                        current.code.push_str(text);
                    }
                    _ => {
                        tracing::debug!("New code segment");
                        segments.push(Segment::code(text));
                    }
                }
                last_seen = LastSeen::Code;
            }
        }
    }

    let count = segments.len();
    for (idx, segment) in segments.iter_mut().enumerate() {
        segment.code_empty = segment.code.is_empty();
        segment.has_more = idx + 1 < count;
        segment.is_entry_point = entry_marker.is_some_and(|marker| segment.code.contains(marker));
    }

    SegmentedFile {
        segments,
        source: input.to_owned(),
    }
}
