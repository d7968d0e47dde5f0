//! Structural document model
//!
//! Output of the structural parser: metadata plus ordered sections of lines,
//! with chord positions resolved against the chord-free lyric text.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section types recognised by `{start_of_X}`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Verse,
    Chorus,
    Bridge,
    #[default]
    Content,
}

impl SectionKind {
    /// Map a `start_of_<name>` suffix to a section kind
    pub fn from_name(name: &str) -> Self {
        match name {
            "verse" => SectionKind::Verse,
            "chorus" => SectionKind::Chorus,
            "bridge" => SectionKind::Bridge,
            _ => SectionKind::Content,
        }
    }
}

/// Line types inside a section
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Lyrics,
    Comment,
    Directive,
}

/// An inline chord attached to a lyric line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordPosition {
    /// Bracket interior, unvalidated
    pub chord: String,
    /// Char index into the owning line's `content`
    pub position: usize,
}

impl ChordPosition {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }
}

/// One source line after section and metadata extraction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub content: String,
    /// Only populated for lyrics lines
    #[serde(default)]
    pub chords: Vec<ChordPosition>,
}

impl Line {
    pub fn lyrics(content: impl Into<String>, chords: Vec<ChordPosition>) -> Self {
        Self {
            kind: LineKind::Lyrics,
            content: content.into(),
            chords,
        }
    }

    /// Empty lyrics line standing in for a blank source line
    pub fn blank() -> Self {
        Self::lyrics(String::new(), Vec::new())
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Comment,
            content: content.into(),
            chords: Vec::new(),
        }
    }

    pub fn directive(content: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Directive,
            content: content.into(),
            chords: Vec::new(),
        }
    }

    /// True for a lyrics line with neither text nor chords
    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Lyrics && self.content.is_empty() && self.chords.is_empty()
    }
}

/// A verse, chorus, bridge or untyped block of lines
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Section {
    pub kind: SectionKind,
    /// Raw directive suffix, e.g. "verse" for `{start_of_verse}`
    pub name: Option<String>,
    /// Text after `:` in `{start_of_verse: Verse 1}`
    pub label: Option<String>,
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(kind: SectionKind, name: Option<String>, label: Option<String>) -> Self {
        Self {
            kind,
            name,
            label,
            lines: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Result of structural parsing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    /// Metadata directives in order of first appearance
    pub metadata: IndexMap<String, String>,
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Song title from `{title: ...}` or its short form `{t: ...}`
    pub fn title(&self) -> Option<&str> {
        self.metadata
            .get("title")
            .or_else(|| self.metadata.get("t"))
            .map(String::as_str)
    }

    /// Distinct chord names in order of first appearance
    pub fn chords_used(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let chords = self
            .sections
            .iter()
            .flat_map(|section| section.lines.iter())
            .flat_map(|line| line.chords.iter());

        for chord in chords {
            if !seen.contains(&chord.chord.as_str()) {
                seen.push(chord.chord.as_str());
            }
        }
        seen
    }

    /// Iterate over every line of every section
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.sections.iter().flat_map(|section| section.lines.iter())
    }
}
