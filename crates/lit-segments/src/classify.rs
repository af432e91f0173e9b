//! Line classification.
//!
//! A documentation line starts with optional whitespace followed by a comment
//! prefix (`//` or `#`) and a whitespace character, or consists solely of
//! `//` after optional indentation. Everything else that is not literally
//! empty is code.

use std::sync::LazyLock;

use regex::Regex;

/// Documentation marker, matched at line start.
static DOCS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(//|#)\s|\s*//$)").unwrap());

/// Classification of a single source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Literally empty line. Separates segments without belonging to one.
    Blank,
    /// Documentation line with its comment marker stripped.
    Docs(&'a str),
    /// Code line, unchanged.
    Code(&'a str),
}

/// Classify one line of (tab-expanded) source text.
///
/// Whitespace-only lines are not blank: they belong to code. Callers must
/// expand tabs first, since marker detection is whitespace-sensitive.
#[must_use]
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    match DOCS_RE.find(line) {
        Some(marker) => LineKind::Docs(&line[marker.end()..]),
        None => LineKind::Code(line),
    }
}
