//! Syntax highlighting.
//!
//! Go is highlighted with tree-sitter and produces `hl-*` classes named
//! after the grammar's captures. Console transcripts go through a small
//! lexer whose tokens are coalesced (adjacent tokens of the same class are
//! merged) and formatted with the Pygments-style `gp`/`go` classes. Both
//! are wrapped in `<pre class="chroma">`.

mod console;
mod go;

use std::fmt::Write;

use crate::escape::escape_html;
use crate::language::Language;

/// Console token classification, rendered as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    GenericPrompt,
    GenericOutput,
}

impl TokenClass {
    /// CSS class name.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::GenericPrompt => "gp",
            Self::GenericOutput => "go",
        }
    }
}

/// A lexed slice of the input. `None` class means plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub class: Option<TokenClass>,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub(crate) fn new(class: Option<TokenClass>, text: &'a str) -> Self {
        Self { class, text }
    }
}

/// Highlight code as HTML markup for the given language.
#[must_use]
pub fn highlight(code: &str, language: Language) -> String {
    let inner = match language {
        Language::Go => go::highlight(code),
        Language::Console => format_tokens(&coalesce(console::tokenize(code))),
    };
    format!("<pre class=\"chroma\">{inner}</pre>")
}

/// Merge adjacent tokens of the same class, dropping empty ones.
fn coalesce(tokens: Vec<Token<'_>>) -> Vec<(Option<TokenClass>, String)> {
    let mut merged: Vec<(Option<TokenClass>, String)> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.text.is_empty() {
            continue;
        }
        match merged.last_mut() {
            Some((class, text)) if *class == token.class => text.push_str(token.text),
            _ => merged.push((token.class, token.text.to_owned())),
        }
    }
    merged
}

fn format_tokens(tokens: &[(Option<TokenClass>, String)]) -> String {
    let mut out = String::new();
    for (class, text) in tokens {
        match class {
            Some(class) => {
                write!(
                    out,
                    "<span class=\"{}\">{}</span>",
                    class.css_class(),
                    escape_html(text)
                )
                .unwrap();
            }
            None => out.push_str(&escape_html(text)),
        }
    }
    out
}
