//! Western chord roots
//!
//! Letter names C-B with an optional `#` or `b`. Roots are upper case only;
//! a lower case `b` after the letter is always the flat sign.

use super::{Accidental, ChordRoot, RootSystem};

/// Western letter-name system
pub struct WesternRoots;

const LETTERS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Longest first so `C#` wins over `C`
static PATTERNS: [(&str, ChordRoot); 21] = [
    ("C#", ChordRoot::new(0, Accidental::Sharp)),
    ("D#", ChordRoot::new(1, Accidental::Sharp)),
    ("E#", ChordRoot::new(2, Accidental::Sharp)),
    ("F#", ChordRoot::new(3, Accidental::Sharp)),
    ("G#", ChordRoot::new(4, Accidental::Sharp)),
    ("A#", ChordRoot::new(5, Accidental::Sharp)),
    ("B#", ChordRoot::new(6, Accidental::Sharp)),
    ("Cb", ChordRoot::new(0, Accidental::Flat)),
    ("Db", ChordRoot::new(1, Accidental::Flat)),
    ("Eb", ChordRoot::new(2, Accidental::Flat)),
    ("Fb", ChordRoot::new(3, Accidental::Flat)),
    ("Gb", ChordRoot::new(4, Accidental::Flat)),
    ("Ab", ChordRoot::new(5, Accidental::Flat)),
    ("Bb", ChordRoot::new(6, Accidental::Flat)),
    ("C", ChordRoot::new(0, Accidental::Natural)),
    ("D", ChordRoot::new(1, Accidental::Natural)),
    ("E", ChordRoot::new(2, Accidental::Natural)),
    ("F", ChordRoot::new(3, Accidental::Natural)),
    ("G", ChordRoot::new(4, Accidental::Natural)),
    ("A", ChordRoot::new(5, Accidental::Natural)),
    ("B", ChordRoot::new(6, Accidental::Natural)),
];

impl RootSystem for WesternRoots {
    fn patterns() -> &'static [(&'static str, ChordRoot)] {
        &PATTERNS
    }

    fn spell(root: ChordRoot) -> String {
        format!("{}{}", LETTERS[root.degree as usize % 7], root.accidental.symbol())
    }
}
