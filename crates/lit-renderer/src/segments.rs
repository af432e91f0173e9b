//! Rendering of segment lists.

use lit_segments::Segment;

use crate::highlight::highlight;
use crate::language::Language;
use crate::markdown::render_markdown;

/// Fills the rendered fields of segments produced from one source file.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRenderer {
    language: Language,
}

impl SegmentRenderer {
    /// Create a renderer for segments of the given language.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Render prose and code of every segment in place.
    ///
    /// Segments without docs or code keep the corresponding rendered field
    /// empty. Clipboard copies are produced only for runnable languages.
    pub fn render(&self, segments: &mut [Segment]) {
        for segment in segments {
            if segment.has_docs() {
                segment.docs_rendered = render_markdown(&segment.docs);
            }
            if segment.has_code() {
                segment.code_rendered = highlight(&segment.code, self.language);
                if self.language.is_runnable() {
                    segment.code_for_clipboard = clipboard_code(&segment.code);
                }
            }
        }
    }
}

/// Code prepared for copying: surrounding newlines trimmed, one trailing newline.
#[must_use]
pub fn clipboard_code(code: &str) -> String {
    let mut out = code.trim_matches('\n').to_owned();
    out.push('\n');
    out
}
