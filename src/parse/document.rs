//! Structural parser
//!
//! Turns raw ChordPro text into a [`ParsedDocument`]. A single forward pass
//! over the lines drives a small state machine whose only state is the
//! section currently being filled.

use serde::{Deserialize, Serialize};

use crate::errors::ChordProError;
use crate::models::{ChordPosition, Line, ParsedDocument, Section, SectionKind};

use super::scan::{scan_pairs, source_lines};

/// Caller-supplied parser options
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Also keep `{key: value}` directives as directive lines
    pub show_metadata_as_lines: bool,
}

impl ParseOptions {
    pub fn from_json(json: &str) -> Result<Self, ChordProError> {
        serde_json::from_str(json).map_err(|e| ChordProError::InvalidOptions(e.to_string()))
    }
}

/// A structural directive that opens or closes a section
#[derive(Debug, Clone, PartialEq, Eq)]
enum SectionMarker {
    Start { name: String, label: Option<String> },
    End,
}

/// Recognise `start_of_X`, `end_of_X` and their short forms
fn section_marker(body: &str) -> Option<SectionMarker> {
    let (head, label) = match body.split_once(':') {
        Some((head, rest)) => {
            let rest = rest.trim();
            (head.trim(), (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (body.trim(), None),
    };
    let head = head.to_lowercase();
    let head = head.as_str();

    if let Some(name) = head.strip_prefix("start_of_") {
        return Some(SectionMarker::Start {
            name: name.to_string(),
            label,
        });
    }
    if head.starts_with("end_of_") {
        return Some(SectionMarker::End);
    }

    let short = match head {
        "sov" => "verse",
        "soc" => "chorus",
        "sob" => "bridge",
        "sot" => "tab",
        "eov" | "eoc" | "eob" | "eot" => return Some(SectionMarker::End),
        _ => return None,
    };
    Some(SectionMarker::Start {
        name: short.to_string(),
        label,
    })
}

/// Parse a whole document into metadata and sections
pub fn parse_document(text: &str, options: &ParseOptions) -> ParsedDocument {
    let mut doc = ParsedDocument::new();
    let mut current = Section::default();

    for source in source_lines(text) {
        let mut chars = source.chars.as_slice();
        if let Some((&'\r', rest)) = chars.split_last() {
            chars = rest;
        }
        let raw: String = chars.iter().collect();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            current.lines.push(Line::blank());
            continue;
        }

        if trimmed.len() >= 2 && trimmed.starts_with('{') && trimmed.ends_with('}') {
            let body = &trimmed[1..trimmed.len() - 1];

            match section_marker(body) {
                Some(SectionMarker::Start { name, label }) => {
                    flush(&mut doc, &mut current);
                    current = Section::new(SectionKind::from_name(&name), Some(name), label);
                }
                Some(SectionMarker::End) => {
                    flush(&mut doc, &mut current);
                    current = Section::default();
                }
                None => match body.split_once(':') {
                    Some((key, value)) if !key.trim().is_empty() => {
                        doc.metadata
                            .insert(key.trim().to_lowercase(), value.trim().to_string());
                        if options.show_metadata_as_lines {
                            current.lines.push(Line::directive(trimmed));
                        }
                    }
                    _ => current.lines.push(Line::directive(trimmed)),
                },
            }
            continue;
        }

        if trimmed.starts_with('#') {
            current.lines.push(Line::comment(raw.as_str()));
            continue;
        }

        current.lines.push(lyric_line(chars));
    }

    flush(&mut doc, &mut current);

    log::debug!(
        "parse: {} metadata entries, {} sections",
        doc.metadata.len(),
        doc.sections.len()
    );
    doc
}

/// Push the section being filled unless it is empty
fn flush(doc: &mut ParsedDocument, current: &mut Section) {
    if !current.is_empty() {
        doc.sections.push(std::mem::take(current));
    }
}

/// Strip every `[chord]` from a content line, remembering where each chord
/// sat in the stripped text
///
/// `removed` counts the bracket chars deleted so far; subtracting it from a
/// chord's raw start gives its index in the stripped content.
fn lyric_line(chars: &[char]) -> Line {
    let scan = scan_pairs(chars, '[', ']');
    let mut content = String::with_capacity(chars.len());
    let mut chords = Vec::with_capacity(scan.spans.len());
    let mut removed = 0;
    let mut cursor = 0;

    for span in &scan.spans {
        content.extend(&chars[cursor..span.start]);
        let chord: String = chars[span.inner()].iter().collect();
        chords.push(ChordPosition::new(chord, span.start - removed));
        removed += span.end - span.start;
        cursor = span.end;
    }
    content.extend(&chars[cursor..]);

    Line::lyrics(content, chords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineKind;

    fn parse(text: &str) -> ParsedDocument {
        parse_document(text, &ParseOptions::default())
    }

    #[test]
    fn test_metadata_extraction() {
        let doc = parse("{title: Amazing Grace}\n{artist: John Newton}\n[C]Hi");
        assert_eq!(doc.metadata.get("title").map(String::as_str), Some("Amazing Grace"));
        assert_eq!(doc.metadata.get("artist").map(String::as_str), Some("John Newton"));
        assert_eq!(doc.sections.len(), 1);

        let section = &doc.sections[0];
        assert_eq!(section.kind, SectionKind::Content);
        assert_eq!(section.lines, vec![Line::lyrics("Hi", vec![ChordPosition::new("C", 0)])]);
    }

    #[test]
    fn test_metadata_order_and_last_write_wins() {
        let doc = parse("{key: G}\n{title: One}\n{key: A}");
        let keys: Vec<&str> = doc.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["key", "title"]);
        assert_eq!(doc.metadata["key"], "A");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_show_metadata_as_lines() {
        let options = ParseOptions {
            show_metadata_as_lines: true,
        };
        let doc = parse_document("{title: X}", &options);
        assert_eq!(doc.metadata["title"], "X");
        assert_eq!(doc.sections[0].lines, vec![Line::directive("{title: X}")]);
    }

    #[test]
    fn test_section_nesting() {
        let doc = parse("{start_of_chorus}\n[G]La\n{end_of_chorus}\n[C]Verse");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].kind, SectionKind::Chorus);
        assert_eq!(doc.sections[0].name.as_deref(), Some("chorus"));
        assert_eq!(doc.sections[0].lines.len(), 1);
        assert_eq!(doc.sections[1].kind, SectionKind::Content);
        assert_eq!(doc.sections[1].lines.len(), 1);
    }

    #[test]
    fn test_unknown_section_name_is_content() {
        let doc = parse("{start_of_tab}\ne|---|\n{end_of_tab}");
        assert_eq!(doc.sections[0].kind, SectionKind::Content);
        assert_eq!(doc.sections[0].name.as_deref(), Some("tab"));
    }

    #[test]
    fn test_short_form_and_label() {
        let doc = parse("{sov: Verse 1}\nline\n{eov}\n{soc}\nhook\n{eoc}");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].kind, SectionKind::Verse);
        assert_eq!(doc.sections[0].label.as_deref(), Some("Verse 1"));
        assert_eq!(doc.sections[1].kind, SectionKind::Chorus);
        assert_eq!(doc.sections[1].label, None);
    }

    #[test]
    fn test_directive_names_ignore_case() {
        let doc = parse("{Title: X}\n{START_OF_CHORUS: Hook}\n[C]la\n{END_OF_CHORUS}\n{SOV}\nv\n{EOV}");
        assert_eq!(doc.title(), Some("X"));
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].kind, SectionKind::Chorus);
        assert_eq!(doc.sections[0].label.as_deref(), Some("Hook"));
        assert_eq!(doc.sections[0].lines, vec![Line::lyrics("la", vec![ChordPosition::new("C", 0)])]);
        assert_eq!(doc.sections[1].kind, SectionKind::Verse);
    }

    #[test]
    fn test_empty_sections_are_dropped() {
        let doc = parse("{start_of_verse}\n{end_of_verse}\n{start_of_chorus}\n{end_of_chorus}");
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_simple_directive_and_comment_lines() {
        let doc = parse("{chorus}\n# remember the capo");
        let kinds: Vec<LineKind> = doc.sections[0].lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Directive, LineKind::Comment]);
        assert_eq!(doc.sections[0].lines[0].content, "{chorus}");
    }

    #[test]
    fn test_blank_lines_preserved() {
        let doc = parse("a\n\n   \nb");
        let lines = &doc.sections[0].lines;
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
    }

    #[test]
    fn test_chord_positions_account_for_removed_brackets() {
        let doc = parse("Amazing [G]grace how [C]sweet[G]");
        let line = &doc.sections[0].lines[0];
        assert_eq!(line.content, "Amazing grace how sweet");
        assert_eq!(
            line.chords,
            vec![
                ChordPosition::new("G", 8),
                ChordPosition::new("C", 18),
                ChordPosition::new("G", 23),
            ]
        );
    }

    #[test]
    fn test_stacked_chords_share_position() {
        let doc = parse("[C][G]Hi");
        let line = &doc.sections[0].lines[0];
        assert_eq!(line.content, "Hi");
        assert_eq!(line.chords[0].position, 0);
        assert_eq!(line.chords[1].position, 0);
    }

    #[test]
    fn test_unclosed_chord_stays_in_content() {
        let doc = parse("[C]la [G");
        let line = &doc.sections[0].lines[0];
        assert_eq!(line.content, "la [G");
        assert_eq!(line.chords.len(), 1);
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = parse("{title: X}\r\n[C]Hi\r\n");
        assert_eq!(doc.metadata["title"], "X");
        assert_eq!(doc.sections[0].lines[0].content, "Hi");
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("");
        assert!(doc.metadata.is_empty());
        // A single blank line still yields one content section
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.sections[0].lines[0].is_blank());
    }

    #[test]
    fn test_options_from_json() {
        let options = ParseOptions::from_json(r#"{"showMetadataAsLines": true}"#).unwrap();
        assert!(options.show_metadata_as_lines);
        assert_eq!(ParseOptions::from_json("{}").unwrap(), ParseOptions::default());
        assert!(ParseOptions::from_json("not json").is_err());
    }
}
