//! Chord-over-lyrics layout
//!
//! Splits a parsed lyric line into segments for a two-row display: each
//! chord owns a one-character slot of lyric text underneath it, and the
//! text between chords goes into chord-less segments.

use serde::{Deserialize, Serialize};

use crate::models::{Line, LineKind, ParsedDocument};

/// One column group of the two-row display
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordLyricSegment {
    /// Chord label drawn above `lyric`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
    pub lyric: String,
}

impl ChordLyricSegment {
    fn lyric(text: String) -> Self {
        Self { chord: None, lyric: text }
    }

    fn slot(chord: &str, text: String) -> Self {
        Self {
            chord: Some(chord.to_string()),
            lyric: text,
        }
    }
}

/// Lay out a line as chord/lyric segments
///
/// Walks the chords in position order: the gap since the previous slot
/// becomes a lyric-only segment, then the chord takes the character at its
/// position (a single space at end of line). A chord stacked on a position
/// whose character is already taken gets a space slot.
pub fn layout_line(line: &Line) -> Vec<ChordLyricSegment> {
    let chars: Vec<char> = line.content.chars().collect();
    let len = chars.len();
    let mut segments = Vec::with_capacity(line.chords.len() * 2 + 1);
    let mut cursor = 0;

    let mut chords: Vec<_> = line.chords.iter().collect();
    chords.sort_by_key(|chord| chord.position);

    for chord in chords {
        let position = chord.position.min(len);

        if position > cursor {
            segments.push(ChordLyricSegment::lyric(chars[cursor..position].iter().collect()));
            cursor = position;
        }

        if position == cursor && position < len {
            segments.push(ChordLyricSegment::slot(&chord.chord, chars[position].to_string()));
            cursor = position + 1;
        } else {
            segments.push(ChordLyricSegment::slot(&chord.chord, " ".to_string()));
        }
    }

    if cursor < len {
        segments.push(ChordLyricSegment::lyric(chars[cursor..].iter().collect()));
    }

    segments
}

/// Render segments as a chord row and a lyric row
///
/// Each chord sits above the first char of its slot. When a chord label is
/// wider than the lyric under it, the lyric row is padded so the next chord
/// still lines up with its own slot.
pub fn render_rows(segments: &[ChordLyricSegment]) -> (String, String) {
    let mut chord_row = String::new();
    let mut lyric_row = String::new();
    let mut chord_col = 0;
    let mut lyric_col = 0;

    for segment in segments {
        if let Some(chord) = &segment.chord {
            if chord_col > lyric_col {
                lyric_row.push_str(&" ".repeat(chord_col - lyric_col));
                lyric_col = chord_col;
            }
            chord_row.push_str(&" ".repeat(lyric_col - chord_col));
            chord_row.push_str(chord);
            chord_row.push(' ');
            chord_col = lyric_col + chord.chars().count() + 1;
        }
        lyric_row.push_str(&segment.lyric);
        lyric_col += segment.lyric.chars().count();
    }

    (chord_row.trim_end().to_string(), lyric_row)
}

/// Render a parsed document as plain chords-over-lyrics text
pub fn render_text(doc: &ParsedDocument) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(title) = doc.title() {
        out.push(title.to_string());
        out.push(String::new());
    }

    for section in &doc.sections {
        if let Some(header) = section.label.as_ref().or(section.name.as_ref()) {
            out.push(format!("{}:", header));
        }

        for line in &section.lines {
            match line.kind {
                LineKind::Lyrics if !line.chords.is_empty() => {
                    let (chords, lyrics) = render_rows(&layout_line(line));
                    out.push(chords);
                    out.push(lyrics);
                }
                LineKind::Lyrics | LineKind::Comment | LineKind::Directive => {
                    out.push(line.content.clone());
                }
            }
        }
    }

    out.join("\n")
}
