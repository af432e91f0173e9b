//! Segment type.

/// One contiguous documentation-or-code block of a source file.
///
/// A segment is created by the segmenter with exactly one kind of raw
/// content. The rendered fields stay empty until `lit-renderer` fills them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment {
    /// Raw documentation text, comment markers stripped, lines joined with `\n`.
    pub docs: String,
    /// Rendered documentation markup.
    pub docs_rendered: String,
    /// Raw code text (tab-expanded), lines joined with `\n`.
    pub code: String,
    /// Highlighted code markup.
    pub code_rendered: String,
    /// Clipboard-ready code, set for runnable-language segments only.
    pub code_for_clipboard: String,
    /// True when the segment has no code text.
    pub code_empty: bool,
    /// True for every segment except the last one in its file.
    pub has_more: bool,
    /// True when the code contains the language's program entry marker.
    pub is_entry_point: bool,
}

impl Segment {
    /// Start a documentation segment.
    pub(crate) fn docs(text: &str) -> Self {
        Self {
            docs: text.to_owned(),
            ..Self::default()
        }
    }

    /// Start a code segment.
    pub(crate) fn code(text: &str) -> Self {
        Self {
            code: text.to_owned(),
            ..Self::default()
        }
    }

    /// Whether this segment holds documentation text.
    #[must_use]
    pub fn has_docs(&self) -> bool {
        !self.docs.is_empty()
    }

    /// Whether this segment holds code text.
    #[must_use]
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }
}
