//! Parsing module for ChordPro text
//!
//! `tokens` gives a flat token stream for highlighting, `document` builds
//! the structured song. Both share the line and bracket scanning in `scan`.

pub mod document;
pub mod scan;
pub mod tokens;

pub use document::{parse_document, ParseOptions};
pub use tokens::{tokenize, Token, TokenKind};
