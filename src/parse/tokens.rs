//! Token stream for syntax highlighting
//!
//! Classifies every character of a song sheet as chord, directive, comment
//! or lyrics. Classification is per line; the `\n` separators are emitted
//! as one-character lyrics tokens so that the stream covers the input
//! exactly.

use serde::{Deserialize, Serialize};

use super::scan::{has_pair, scan_pairs, source_lines, SourceLine};

/// Token types for highlighting
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Chord,
    Directive,
    Comment,
    Lyrics,
}

/// A classified span of the source text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Absolute char offset of the first char
    pub start: usize,
    /// Absolute char offset one past the last char
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: String, start: usize) -> Self {
        let end = start + text.chars().count();
        Self {
            kind,
            text,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Tokenize a whole document
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for line in source_lines(text) {
        tokenize_line(&line, &mut tokens);
        if !line.is_last {
            let newline_at = line.start + line.chars.len();
            tokens.push(Token::new(TokenKind::Lyrics, "\n".to_string(), newline_at));
        }
    }

    log::debug!("tokenize: {} tokens", tokens.len());
    tokens
}

/// Classify one line
///
/// Directive detection runs before chord detection, so a line holding both
/// a `{...}` and `[...]` keeps its chords inside lyrics tokens.
fn tokenize_line(line: &SourceLine, tokens: &mut Vec<Token>) {
    if line.chars.is_empty() {
        return;
    }

    if line.is_hash_comment() {
        tokens.push(Token::new(TokenKind::Comment, line.text(), line.start));
    } else if has_pair(&line.chars, '{', '}') {
        push_pairs(line, '{', '}', TokenKind::Directive, tokens);
    } else if has_pair(&line.chars, '[', ']') {
        push_pairs(line, '[', ']', TokenKind::Chord, tokens);
    } else {
        tokens.push(Token::new(TokenKind::Lyrics, line.text(), line.start));
    }
}

fn push_pairs(
    line: &SourceLine,
    open: char,
    close: char,
    kind: TokenKind,
    tokens: &mut Vec<Token>,
) {
    let scan = scan_pairs(&line.chars, open, close);
    let mut cursor = 0;

    for span in &scan.spans {
        if span.start > cursor {
            tokens.push(Token::new(
                TokenKind::Lyrics,
                line.slice(cursor, span.start),
                line.start + cursor,
            ));
        }
        tokens.push(Token::new(
            kind,
            line.slice(span.start, span.end),
            line.start + span.start,
        ));
        cursor = span.end;
    }

    if scan.tail < line.chars.len() {
        tokens.push(Token::new(
            TokenKind::Lyrics,
            line.slice(scan.tail, line.chars.len()),
            line.start + scan.tail,
        ));
    }
}
