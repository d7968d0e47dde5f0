//! Bracket balance diagnostics
//!
//! One pass over the whole document with an independent stack per bracket
//! type (square and curly):
//! - On an opener: push its offset
//! - On a closer: pop, if empty = unmatched closer
//! - After scan: anything left on a stack = unclosed opener

use super::{DiagnosticKind, MessageKey, ValidationContext, ValidationError};

/// Check bracket balance across the whole document
pub fn check_brackets(text: &str, ctx: &ValidationContext) -> Vec<ValidationError> {
    let mut marks = Vec::new();
    let mut square: Vec<usize> = Vec::new();
    let mut curly: Vec<usize> = Vec::new();

    for (offset, ch) in text.chars().enumerate() {
        let stack = match ch {
            '[' | ']' => &mut square,
            '{' | '}' => &mut curly,
            _ => continue,
        };

        match ch {
            '[' | '{' => stack.push(offset),
            _ => {
                if stack.pop().is_none() {
                    marks.push(ctx.mark(
                        DiagnosticKind::BracketMismatch,
                        MessageKey::UnmatchedClosingBracket,
                        offset,
                        offset + 1,
                    ));
                }
            }
        }
    }

    for offset in square.into_iter().chain(curly) {
        marks.push(ctx.mark(
            DiagnosticKind::BracketMismatch,
            MessageKey::UnclosedBracket,
            offset,
            offset + 1,
        ));
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ValidationConfig;

    fn check(text: &str) -> Vec<ValidationError> {
        let ctx = ValidationContext::new(text, &ValidationConfig::default());
        check_brackets(text, &ctx)
    }

    fn starts(marks: &[ValidationError]) -> Vec<usize> {
        marks.iter().map(|m| m.position.start).collect()
    }

    #[test]
    fn test_balanced() {
        assert!(check("{title: X}\n[C]la [G]la").is_empty());
    }

    #[test]
    fn test_unclosed_opener() {
        let marks = check("[C [G] text");
        assert_eq!(starts(&marks), vec![0]);
        assert_eq!(marks[0].kind, DiagnosticKind::BracketMismatch);
        assert_eq!(marks[0].message, "Opening bracket is never closed");
    }

    #[test]
    fn test_unmatched_closer() {
        let marks = check("la] la}");
        assert_eq!(starts(&marks), vec![2, 6]);
        assert_eq!(marks[0].message, "Closing bracket without matching opening bracket");
    }

    #[test]
    fn test_counters_are_independent() {
        // A curly closer does not close a square opener
        let marks = check("[}");
        assert_eq!(starts(&marks), vec![1, 0]);
    }

    #[test]
    fn test_brackets_may_span_lines() {
        assert!(check("[C\n]").is_empty());
    }

    #[test]
    fn test_positions_after_multibyte_text() {
        let marks = check("ñandú ]");
        assert_eq!(starts(&marks), vec![6]);
        assert_eq!(marks[0].position.column, 7);
    }
}
