//! Diagnostics module for song sheet validation
//!
//! Runs the configured checks over raw ChordPro text and returns errors and
//! warnings in document order. Every check degrades to "report and keep
//! scanning"; nothing here fails.

pub mod brackets;
pub mod chords;
pub mod config;
pub mod directives;
pub mod messages;
pub mod security;

pub use config::ValidationConfig;
pub use messages::MessageKey;

use serde::{Deserialize, Serialize};

use crate::models::Locale;
use crate::parse::scan::source_lines;
use crate::text::PositionIndex;

/// Severity level for diagnostics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
}

/// What a diagnostic is about
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    InvalidChord,
    UnknownDirective,
    UnterminatedDirective,
    BracketMismatch,
    UnsafeContent,
    EmptyElement,
}

impl DiagnosticKind {
    /// Severity used unless a config option overrides it
    pub fn default_severity(self) -> DiagnosticSeverity {
        match self {
            DiagnosticKind::UnknownDirective | DiagnosticKind::EmptyElement => {
                DiagnosticSeverity::Warning
            }
            DiagnosticKind::InvalidChord
            | DiagnosticKind::UnterminatedDirective
            | DiagnosticKind::BracketMismatch
            | DiagnosticKind::UnsafeContent => DiagnosticSeverity::Error,
        }
    }
}

/// Where a diagnostic applies: 1-based line/column of `start`, plus the
/// absolute char range
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticPosition {
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
}

/// A single diagnostic
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: DiagnosticKind,
    pub severity: DiagnosticSeverity,
    /// Localized message
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub position: DiagnosticPosition,
}

impl ValidationError {
    pub fn with_suggestion(mut self, suggestion: Option<String>) -> Self {
        self.suggestion = suggestion;
        self
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Output of [`validate`]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Split marks by severity, each list sorted by start offset
    ///
    /// Info-level marks go with the warnings.
    pub fn from_marks(marks: Vec<ValidationError>) -> Self {
        let (mut errors, mut warnings): (Vec<_>, Vec<_>) = marks
            .into_iter()
            .partition(|mark| mark.severity == DiagnosticSeverity::Error);

        errors.sort_by_key(|mark| mark.position.start);
        warnings.sort_by_key(|mark| mark.position.start);

        Self { errors, warnings }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// All diagnostics of one kind, errors first
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &ValidationError> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .filter(move |mark| mark.kind == kind)
    }
}

/// Shared state for one validation run
pub struct ValidationContext<'a> {
    pub index: PositionIndex<'a>,
    pub locale: Locale,
    pub strict: bool,
}

impl<'a> ValidationContext<'a> {
    pub fn new(text: &'a str, config: &ValidationConfig) -> Self {
        Self {
            index: PositionIndex::new(text),
            locale: config.locale(),
            strict: config.strict,
        }
    }

    /// Build a diagnostic covering the absolute char range `start..end`
    pub fn mark(
        &self,
        kind: DiagnosticKind,
        key: MessageKey,
        start: usize,
        end: usize,
    ) -> ValidationError {
        let pos = self.index.locate(start);
        ValidationError {
            kind,
            severity: kind.default_severity(),
            message: messages::message(key, self.locale),
            suggestion: None,
            position: DiagnosticPosition {
                line: pos.line,
                column: pos.column,
                start,
                end: end.max(start + 1),
            },
        }
    }
}

/// Validate a document
///
/// Pure: the same text and config always give the same result. Every check
/// is a single pass over the text.
pub fn validate(text: &str, config: &ValidationConfig) -> ValidationResult {
    let ctx = ValidationContext::new(text, config);
    let lines = source_lines(text);
    let mut marks = Vec::new();

    if config.check_chord_syntax {
        marks.extend(chords::check_chords(&lines, &ctx));
    }
    if config.check_directives {
        marks.extend(directives::check_directives(&lines, &ctx));
    }
    if config.check_brackets {
        marks.extend(brackets::check_brackets(text, &ctx));
    }
    // Always on, regardless of toggles
    marks.extend(security::check_security(text, &ctx));

    let result = ValidationResult::from_marks(marks);
    log::debug!(
        "validate: {} errors, {} warnings ({} lines, locale {})",
        result.errors.len(),
        result.warnings.len(),
        lines.len(),
        ctx.locale.code()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severity() {
        assert_eq!(
            DiagnosticKind::UnknownDirective.default_severity(),
            DiagnosticSeverity::Warning
        );
        assert_eq!(
            DiagnosticKind::UnsafeContent.default_severity(),
            DiagnosticSeverity::Error
        );
    }

    #[test]
    fn test_mark_position() {
        let text = "line one\n[X] two";
        let ctx = ValidationContext::new(text, &ValidationConfig::default());
        let mark = ctx.mark(DiagnosticKind::InvalidChord, MessageKey::InvalidChord, 9, 12);

        assert_eq!(mark.position.line, 2);
        assert_eq!(mark.position.column, 1);
        assert_eq!(mark.position.start, 9);
        assert_eq!(mark.position.end, 12);
        assert_eq!(mark.message, "Invalid chord notation");
    }

    #[test]
    fn test_from_marks_sorts_and_partitions() {
        let text = "abcdefghij";
        let ctx = ValidationContext::new(text, &ValidationConfig::default());
        let marks = vec![
            ctx.mark(DiagnosticKind::BracketMismatch, MessageKey::UnclosedBracket, 7, 8),
            ctx.mark(DiagnosticKind::EmptyElement, MessageKey::EmptyChord, 5, 7),
            ctx.mark(DiagnosticKind::InvalidChord, MessageKey::InvalidChord, 2, 4),
            ctx.mark(DiagnosticKind::EmptyElement, MessageKey::EmptyChord, 0, 2)
                .with_severity(DiagnosticSeverity::Info),
        ];

        let result = ValidationResult::from_marks(marks);
        let error_starts: Vec<usize> = result.errors.iter().map(|m| m.position.start).collect();
        let warning_starts: Vec<usize> = result.warnings.iter().map(|m| m.position.start).collect();
        assert_eq!(error_starts, vec![2, 7]);
        assert_eq!(warning_starts, vec![0, 5]);
        assert!(result.has_errors());
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&DiagnosticKind::UnterminatedDirective).unwrap();
        assert_eq!(json, "\"unterminated-directive\"");
    }

    #[test]
    fn test_empty_document_is_clean() {
        assert!(validate("", &ValidationConfig::default()).is_empty());
    }
}
