//! JavaScript-facing ChordPro functions
//!
//! Every function is stateless: text in, plain JS objects out.

use wasm_bindgen::prelude::*;

use crate::diagnostics::{self, ValidationConfig};
use crate::errors::ChordProError;
use crate::models::Line;
use crate::parse::{self, ParseOptions};
use crate::renderers::chord_lyrics;
use crate::{wasm_log, wasm_warn};

use super::helpers::{deserialize, deserialize_options, serialize};

/// Split raw text into chord, directive, comment and lyrics tokens
#[wasm_bindgen(js_name = tokenizeChordPro)]
pub fn tokenize_chordpro(text: &str) -> Result<JsValue, JsValue> {
    let tokens = parse::tokenize(text);
    wasm_log!("tokenizeChordPro: {} tokens", tokens.len());
    serialize(&tokens, "Failed to serialize tokens")
}

/// Parse text into metadata and sections
#[wasm_bindgen(js_name = parseChordPro)]
pub fn parse_chordpro(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options: ParseOptions = deserialize_options(options, ChordProError::InvalidOptions)?;
    let doc = parse::parse_document(text, &options);
    wasm_log!(
        "parseChordPro: {} sections, {} metadata entries",
        doc.sections.len(),
        doc.metadata.len()
    );
    serialize(&doc, "Failed to serialize document")
}

/// Validate text and return `{ errors, warnings }`
#[wasm_bindgen(js_name = validateChordPro)]
pub fn validate_chordpro(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config: ValidationConfig = deserialize_options(config, ChordProError::InvalidConfig)?;
    let result = diagnostics::validate(text, &config);
    if result.has_errors() {
        wasm_warn!("validateChordPro: {} errors", result.errors.len());
    }
    serialize(&result, "Failed to serialize validation result")
}

/// Split one parsed line into chord/lyric segments
#[wasm_bindgen(js_name = layoutChordLine)]
pub fn layout_chord_line(line: JsValue) -> Result<JsValue, JsValue> {
    let line: Line = deserialize(line, "Invalid line")?;
    serialize(&chord_lyrics::layout_line(&line), "Failed to serialize segments")
}

/// Render text as plain chords-over-lyrics
#[wasm_bindgen(js_name = renderChordProText)]
pub fn render_chordpro_text(text: &str) -> String {
    let doc = parse::parse_document(text, &ParseOptions::default());
    chord_lyrics::render_text(&doc)
}
