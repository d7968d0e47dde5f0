//! Solfège chord roots
//!
//! Fixed-do syllables as used in Spanish, French, Italian and Portuguese
//! song books: Do Re Mi Fa Sol La Si, each with an optional `#` or `b`.

use super::{Accidental, ChordRoot, RootSystem};

/// Fixed-do syllable system
pub struct SolfegeRoots;

const SYLLABLES: [&str; 7] = ["Do", "Re", "Mi", "Fa", "Sol", "La", "Si"];

/// Longest first: `Sol#` before `Sol`, `Sib` before `Si`
static PATTERNS: [(&str, ChordRoot); 21] = [
    ("Sol#", ChordRoot::new(4, Accidental::Sharp)),
    ("Solb", ChordRoot::new(4, Accidental::Flat)),
    ("Do#", ChordRoot::new(0, Accidental::Sharp)),
    ("Re#", ChordRoot::new(1, Accidental::Sharp)),
    ("Mi#", ChordRoot::new(2, Accidental::Sharp)),
    ("Fa#", ChordRoot::new(3, Accidental::Sharp)),
    ("La#", ChordRoot::new(5, Accidental::Sharp)),
    ("Si#", ChordRoot::new(6, Accidental::Sharp)),
    ("Dob", ChordRoot::new(0, Accidental::Flat)),
    ("Reb", ChordRoot::new(1, Accidental::Flat)),
    ("Mib", ChordRoot::new(2, Accidental::Flat)),
    ("Fab", ChordRoot::new(3, Accidental::Flat)),
    ("Lab", ChordRoot::new(5, Accidental::Flat)),
    ("Sib", ChordRoot::new(6, Accidental::Flat)),
    ("Sol", ChordRoot::new(4, Accidental::Natural)),
    ("Do", ChordRoot::new(0, Accidental::Natural)),
    ("Re", ChordRoot::new(1, Accidental::Natural)),
    ("Mi", ChordRoot::new(2, Accidental::Natural)),
    ("Fa", ChordRoot::new(3, Accidental::Natural)),
    ("La", ChordRoot::new(5, Accidental::Natural)),
    ("Si", ChordRoot::new(6, Accidental::Natural)),
];

impl RootSystem for SolfegeRoots {
    fn patterns() -> &'static [(&'static str, ChordRoot)] {
        &PATTERNS
    }

    fn spell(root: ChordRoot) -> String {
        format!(
            "{}{}",
            SYLLABLES[root.degree as usize % 7],
            root.accidental.symbol()
        )
    }
}
