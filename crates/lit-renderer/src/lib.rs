//! Rendering of example segments.
//!
//! Maps raw segment content to HTML:
//! - prose via [`render_markdown`] (CommonMark through pulldown-cmark)
//! - code via [`highlight`], selected by the file's [`Language`]
//!
//! [`SegmentRenderer`] applies both to the segments of one source file.
//!
//! # Example
//!
//! ```
//! use lit_renderer::{Language, SegmentRenderer};
//! use lit_segments::segment_source;
//!
//! let language = Language::Go;
//! let mut file = segment_source("// Say *hi*.\nprintln(\"hi\")", language.entry_marker());
//! SegmentRenderer::new(language).render(&mut file.segments);
//!
//! assert_eq!(file.segments[0].docs_rendered, "<p>Say <em>hi</em>.</p>\n");
//! assert!(file.segments[1].code_rendered.starts_with("<pre class=\"chroma\">"));
//! ```

mod escape;
mod highlight;
mod language;
mod markdown;
mod segments;

pub use escape::escape_html;
pub use highlight::{TokenClass, highlight};
pub use language::{Language, UnsupportedLanguage};
pub use markdown::render_markdown;
pub use segments::{SegmentRenderer, clipboard_code};
