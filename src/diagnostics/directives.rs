//! Directive diagnostics - unknown, unterminated and empty `{...}` spans

use crate::models::DirectiveCatalog;
use crate::parse::scan::{scan_pairs, SourceLine};

use super::{DiagnosticKind, DiagnosticSeverity, MessageKey, ValidationContext, ValidationError};

/// Check every directive span in the document
pub fn check_directives(lines: &[SourceLine], ctx: &ValidationContext) -> Vec<ValidationError> {
    let mut marks = Vec::new();
    let unknown_severity = if ctx.strict {
        DiagnosticSeverity::Error
    } else {
        DiagnosticSeverity::Warning
    };

    for line in lines.iter().filter(|line| !line.is_hash_comment()) {
        let scan = scan_pairs(&line.chars, '{', '}');

        for span in &scan.spans {
            let body: String = line.chars[span.inner()].iter().collect();
            let start = line.start + span.start;
            let end = line.start + span.end;

            if body.trim().is_empty() {
                marks.push(ctx.mark(
                    DiagnosticKind::EmptyElement,
                    MessageKey::EmptyDirective,
                    start,
                    end,
                ));
                continue;
            }

            let name = body.split(':').next().unwrap_or("").trim();
            if DirectiveCatalog::is_known(name) || DirectiveCatalog::is_section_marker(name) {
                continue;
            }

            marks.push(
                ctx.mark(
                    DiagnosticKind::UnknownDirective,
                    MessageKey::UnknownDirective,
                    start,
                    end,
                )
                .with_severity(unknown_severity)
                .with_suggestion(DirectiveCatalog::suggest(name)),
            );
        }

        if let Some(open_idx) = scan.unclosed {
            marks.push(ctx.mark(
                DiagnosticKind::UnterminatedDirective,
                MessageKey::UnterminatedDirective,
                line.start + open_idx,
                line.start + line.chars.len(),
            ));
        }
    }

    marks
}
