//! Tree-sitter syntax highlighting for Go code.

use std::fmt::Write;
use std::sync::LazyLock;

use tree_sitter_highlight::{HighlightConfiguration, HighlightEvent, Highlighter};

use crate::escape::escape_html;

/// Capture names from the Go highlights query, in CSS class order.
/// The index into this array becomes the `Highlight` id.
const HIGHLIGHT_NAMES: &[&str] = &[
    "comment",
    "constant",
    "constant.builtin",
    "escape",
    "function",
    "function.builtin",
    "function.method",
    "keyword",
    "number",
    "operator",
    "property",
    "punctuation.bracket",
    "punctuation.delimiter",
    "string",
    "type",
    "type.builtin",
];

/// CSS class for a capture name: `hl-` prefix, dots become hyphens.
fn css_class(name: &str) -> String {
    format!("hl-{}", name.replace('.', "-"))
}

static CLASSES: LazyLock<Vec<String>> =
    LazyLock::new(|| HIGHLIGHT_NAMES.iter().map(|name| css_class(name)).collect());

/// `None` only if the bundled query fails to compile.
static CONFIG: LazyLock<Option<HighlightConfiguration>> = LazyLock::new(|| {
    let mut config = HighlightConfiguration::new(
        tree_sitter_go::LANGUAGE.into(),
        "go",
        tree_sitter_go::HIGHLIGHTS_QUERY,
        "", // no injections
        "", // no locals
    )
    .inspect_err(|e| tracing::warn!(error = %e, "Go highlight query failed to load"))
    .ok()?;
    config.configure(HIGHLIGHT_NAMES);
    Some(config)
});

/// Highlight Go source, returning inner HTML with `<span class="hl-*">` spans.
///
/// Falls back to escaped plain text if highlighting fails.
pub(super) fn highlight(code: &str) -> String {
    try_highlight(code).unwrap_or_else(|| escape_html(code))
}

fn try_highlight(code: &str) -> Option<String> {
    let config = CONFIG.as_ref()?;
    let mut highlighter = Highlighter::new();
    let events = highlighter
        .highlight(config, code.as_bytes(), None, |_| None)
        .ok()?;

    let mut html = String::with_capacity(code.len() * 2);
    for event in events {
        match event.ok()? {
            HighlightEvent::Source { start, end } => {
                html.push_str(&escape_html(code.get(start..end)?));
            }
            HighlightEvent::HighlightStart(h) => {
                write!(html, "<span class=\"{}\">", CLASSES[h.0]).unwrap();
            }
            HighlightEvent::HighlightEnd => html.push_str("</span>"),
        }
    }
    Some(html)
}
