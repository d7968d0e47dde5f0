//! Chord diagnostics - invalid and empty `[...]` spans
//!
//! Uses the same pair extraction as the tokenizer. `#` comment lines are
//! skipped so commented-out chords are never reported.

use crate::models::chord_systems::{is_valid_chord, suggest_nearest_known_root};
use crate::parse::scan::{scan_pairs, SourceLine};

use super::{DiagnosticKind, MessageKey, ValidationContext, ValidationError};

/// Check every chord span in the document
pub fn check_chords(lines: &[SourceLine], ctx: &ValidationContext) -> Vec<ValidationError> {
    let mut marks = Vec::new();

    for line in lines.iter().filter(|line| !line.is_hash_comment()) {
        for span in scan_pairs(&line.chars, '[', ']').spans {
            let chord: String = line.chars[span.inner()].iter().collect();
            let start = line.start + span.start;
            let end = line.start + span.end;

            if chord.trim().is_empty() {
                marks.push(ctx.mark(DiagnosticKind::EmptyElement, MessageKey::EmptyChord, start, end));
            } else if !is_valid_chord(&chord, ctx.locale) {
                marks.push(
                    ctx.mark(DiagnosticKind::InvalidChord, MessageKey::InvalidChord, start, end)
                        .with_suggestion(suggest_nearest_known_root(&chord, ctx.locale)),
                );
            }
        }
    }

    marks
}
