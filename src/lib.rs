//! ChordPro WASM Module
//!
//! Tokenizer, parser and validator for ChordPro song sheets, exposed to the
//! editor through wasm-bindgen.

pub mod api;
pub mod diagnostics;
pub mod errors;
pub mod models;
pub mod parse;
pub mod renderers;
pub mod text;

// Re-export commonly used types
pub use diagnostics::{
    validate, DiagnosticKind, DiagnosticSeverity, ValidationConfig, ValidationError,
    ValidationResult,
};
pub use errors::ChordProError;
pub use models::{ChordPosition, Line, LineKind, Locale, ParsedDocument, Section, SectionKind};
pub use parse::{tokenize, ParseOptions, Token, TokenKind};
pub use renderers::ChordLyricSegment;

use wasm_bindgen::prelude::*;

/// Parse a document into metadata and sections
pub fn parse(text: &str, options: &ParseOptions) -> ParsedDocument {
    parse::parse_document(text, options)
}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("ChordPro WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        api::helpers::log_warn(&format!("Logger already initialized: {}", e));
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
