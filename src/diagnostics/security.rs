//! Unsafe content diagnostics
//!
//! Song sheets end up rendered as HTML, so embedded markup that could run
//! script is rejected. This check ignores every config toggle.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{DiagnosticKind, MessageKey, ValidationContext, ValidationError};

static UNSAFE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)<script",
        r"(?i)<iframe",
        r"(?i)on\w+\s*=",
        r"(?i)javascript:",
    ]
    .iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Skipping unsafe-content pattern {}: {}", pattern, e);
            None
        }
    })
    .collect()
});

/// Report every match of every unsafe pattern
pub fn check_security(text: &str, ctx: &ValidationContext) -> Vec<ValidationError> {
    let mut marks = Vec::new();

    for pattern in UNSAFE_PATTERNS.iter() {
        for found in pattern.find_iter(text) {
            let start = ctx.index.char_offset(found.start());
            let end = ctx.index.char_offset(found.end());
            marks.push(ctx.mark(
                DiagnosticKind::UnsafeContent,
                MessageKey::UnsafeContent,
                start,
                end,
            ));
        }
    }

    marks
}
