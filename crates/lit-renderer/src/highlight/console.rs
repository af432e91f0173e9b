//! Shell transcript lexer.
//!
//! Transcripts alternate prompt lines (`$ go run x.go`, or `>` continuation
//! lines) with the command's output. Three states:
//!
//! - `Root`: a prompt marker at line start opens a prompt, anything else is output
//! - `Prompt`: the command text up to the newline, which switches to `Output`
//! - `Output`: result lines until the next prompt marker, which returns to `Root`

use super::{Token, TokenClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Root,
    Prompt,
    Output,
}

/// Length of the prompt marker at the start of `line`, if any.
fn prompt_marker(line: &str) -> Option<usize> {
    (line.starts_with('$') || line.starts_with('>')).then_some(1)
}

/// Split off a trailing newline.
fn split_newline(line: &str) -> (&str, &str) {
    match line.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (line, ""),
    }
}

/// Emit a non-prompt line: empty lines are plain text, everything else output.
fn output_line<'a>(line: &'a str, tokens: &mut Vec<Token<'a>>) {
    if line == "\n" {
        tokens.push(Token::new(None, line));
    } else {
        tokens.push(Token::new(Some(TokenClass::GenericOutput), line));
    }
}

pub(super) fn tokenize(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut state = State::Root;

    for line in code.split_inclusive('\n') {
        let mut rest = line;
        loop {
            match state {
                State::Root => {
                    if let Some(len) = prompt_marker(rest) {
                        tokens.push(Token::new(Some(TokenClass::GenericPrompt), &rest[..len]));
                        rest = &rest[len..];
                        state = State::Prompt;
                        continue;
                    }
                    output_line(rest, &mut tokens);
                }
                State::Prompt => {
                    let (command, newline) = split_newline(rest);
                    tokens.push(Token::new(None, command));
                    if !newline.is_empty() {
                        tokens.push(Token::new(None, newline));
                        state = State::Output;
                    }
                }
                State::Output => {
                    if prompt_marker(rest).is_some() {
                        state = State::Root;
                        continue;
                    }
                    output_line(rest, &mut tokens);
                }
            }
            break;
        }
    }
    tokens
}
