//! Chord grammar
//!
//! A chord is `ROOT QUALITY? ('/' BASS)?`. The root vocabulary depends on
//! the locale (letter names or solfège syllables); the quality vocabulary is
//! a fixed allow-list shared by every locale.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::models::locale::{ChordNotation, Locale};

pub mod solfege;
pub mod western;

pub use solfege::*;
pub use western::*;

/// Accidental attached to a root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Notation-independent chord root: scale degree 0 (C / Do) to 6 (B / Si)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChordRoot {
    pub degree: u8,
    pub accidental: Accidental,
}

impl ChordRoot {
    pub const fn new(degree: u8, accidental: Accidental) -> Self {
        Self { degree, accidental }
    }
}

/// Trait for root vocabularies
///
/// Each system lists its spellings longest first, so a prefix lookup always
/// yields the longest match.
pub trait RootSystem {
    fn patterns() -> &'static [(&'static str, ChordRoot)];

    fn spell(root: ChordRoot) -> String;

    /// Parse a root from the start of `input`
    ///
    /// Returns the root and the number of bytes consumed.
    fn parse_root(input: &str) -> Option<(ChordRoot, usize)> {
        Self::patterns()
            .iter()
            .find(|(pattern, _)| input.starts_with(pattern))
            .map(|(pattern, root)| (*root, pattern.len()))
    }

    /// Like `parse_root`, ignoring ASCII case. Only used for suggestions.
    fn parse_root_ignore_case(input: &str) -> Option<(ChordRoot, usize)> {
        Self::patterns()
            .iter()
            .find(|(pattern, _)| {
                input
                    .get(..pattern.len())
                    .map_or(false, |head| head.eq_ignore_ascii_case(pattern))
            })
            .map(|(pattern, root)| (*root, pattern.len()))
    }
}

lazy_static! {
    /// Qualities matched exactly as written
    static ref QUALITIES: HashSet<&'static str> = [
        "", "m", "M", "min", "maj", "mi", "-",
        "5", "6", "69", "6/9", "7", "9", "11", "13", "2", "4",
        "m6", "m69", "m7", "m9", "m11", "m13", "mi7", "-7",
        "maj7", "maj9", "maj11", "maj13", "M7", "M9", "Maj7", "Δ", "Δ7",
        "mmaj7", "mMaj7", "mM7", "m(maj7)",
        "sus", "sus2", "sus4", "7sus", "7sus2", "7sus4", "9sus4",
        "dim", "dim7", "°", "°7",
        "aug", "aug7", "+", "+7", "7+5", "7+",
        "ø", "ø7", "m7b5", "m7-5",
        "add2", "add4", "add9", "add11", "madd9", "madd11", "6add9",
        "7b5", "7#5", "7b9", "7#9", "7#11", "7b13", "9b5", "9#5", "9#11", "13b9", "13#11",
        "maj7#11", "maj7#5",
    ]
    .into_iter()
    .collect();

    /// Keyword qualities, compared after lower-casing
    static ref KEYWORD_QUALITIES: HashSet<&'static str> = [
        "min", "maj", "maj7", "maj9", "maj11", "maj13", "min7", "min9", "min6",
        "sus", "sus2", "sus4", "7sus4", "dim", "dim7", "aug", "aug7",
        "add2", "add4", "add9", "add11",
    ]
    .into_iter()
    .collect();
}

/// "No chord" markers accepted in every locale
const NO_CHORD: [&str; 2] = ["N.C.", "NC"];

/// True when `quality` is in the allow-list
pub fn is_quality(quality: &str) -> bool {
    QUALITIES.contains(quality) || KEYWORD_QUALITIES.contains(quality.to_lowercase().as_str())
}

/// Parse a root using the vocabulary of `notation`
pub fn parse_root(notation: ChordNotation, input: &str) -> Option<(ChordRoot, usize)> {
    match notation {
        ChordNotation::Western => WesternRoots::parse_root(input),
        ChordNotation::Solfege => SolfegeRoots::parse_root(input),
    }
}

fn parse_root_ignore_case(notation: ChordNotation, input: &str) -> Option<(ChordRoot, usize)> {
    match notation {
        ChordNotation::Western => WesternRoots::parse_root_ignore_case(input),
        ChordNotation::Solfege => SolfegeRoots::parse_root_ignore_case(input),
    }
}

/// Spell a root in the vocabulary of `notation`
pub fn spell_root(notation: ChordNotation, root: ChordRoot) -> String {
    match notation {
        ChordNotation::Western => WesternRoots::spell(root),
        ChordNotation::Solfege => SolfegeRoots::spell(root),
    }
}

/// Check a chord (bracket interior) against the grammar of `locale`
pub fn is_valid_chord(text: &str, locale: Locale) -> bool {
    is_valid_in(text.trim(), locale.notation())
}

fn is_valid_in(text: &str, notation: ChordNotation) -> bool {
    if NO_CHORD.contains(&text) {
        return true;
    }

    let Some((_, root_len)) = parse_root(notation, text) else {
        return false;
    };
    let rest = &text[root_len..];

    if is_quality(rest) {
        return true;
    }

    match rest.rsplit_once('/') {
        Some((quality, bass)) => is_quality(quality) && is_whole_root(notation, bass),
        None => false,
    }
}

fn is_whole_root(notation: ChordNotation, text: &str) -> bool {
    parse_root(notation, text).map_or(false, |(_, len)| len == text.len())
}

/// Propose a valid chord close to an invalid one
///
/// Tried in order: fixing the case of the root (`am` -> `Am`), translating a
/// root written in the other notation (`Do` -> `C`, `G7` -> `Sol7`), and the
/// German `H` for B. Returns `None` if the text is already valid or nothing
/// valid comes out.
pub fn suggest_nearest_known_root(text: &str, locale: Locale) -> Option<String> {
    let text = text.trim();
    let notation = locale.notation();

    if text.is_empty() || is_valid_in(text, notation) {
        return None;
    }

    let german = text
        .strip_prefix(&['H', 'h'][..])
        .and_then(|rest| respell(&format!("B{}", rest), ChordNotation::Western, notation));

    [
        respell(text, notation, notation),
        respell(text, notation.other(), notation),
        german,
    ]
    .into_iter()
    .flatten()
    .find(|candidate| is_valid_in(candidate, notation))
}

/// Rewrite root (and slash bass) from `from` spelling to `to` spelling,
/// ignoring the case of the original
fn respell(text: &str, from: ChordNotation, to: ChordNotation) -> Option<String> {
    let (root, root_len) = parse_root_ignore_case(from, text)?;
    let rest = &text[root_len..];

    let rest = match rest.rsplit_once('/') {
        Some((quality, bass)) => match parse_root_ignore_case(from, bass) {
            Some((bass_root, len)) if len == bass.len() => {
                format!("{}/{}", quality, spell_root(to, bass_root))
            }
            _ => rest.to_string(),
        },
        None => rest.to_string(),
    };

    Some(format!("{}{}", spell_root(to, root), rest))
}
