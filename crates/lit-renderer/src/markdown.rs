//! Prose rendering.

use pulldown_cmark::{Options, Parser, html};

/// Render documentation prose (CommonMark with tables and strikethrough) to HTML.
#[must_use]
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(render_markdown("Hello *world*."), "<p>Hello <em>world</em>.</p>\n");
    }

    #[test]
    fn test_inline_code_and_links() {
        assert_eq!(
            render_markdown("Use `fmt` from [the docs](https://pkg.go.dev/fmt)."),
            "<p>Use <code>fmt</code> from <a href=\"https://pkg.go.dev/fmt\">the docs</a>.</p>\n"
        );
    }

    #[test]
    fn test_multiline_prose_joins_into_paragraph() {
        assert_eq!(render_markdown("one\ntwo"), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render_markdown("~~old~~"), "<p><del>old</del></p>\n");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
