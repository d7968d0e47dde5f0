//! Data models for ChordPro documents
//!
//! Parsed document structure, locales, chord grammar and the directive
//! catalog.

pub mod chord_systems;
pub mod directives;
pub mod document;
pub mod locale;

pub use directives::DirectiveCatalog;
pub use document::{ChordPosition, Line, LineKind, ParsedDocument, Section, SectionKind};
pub use locale::{ChordNotation, Locale};
