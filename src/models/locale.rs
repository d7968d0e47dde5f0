//! Locale selection
//!
//! A locale picks two things: the chord-root vocabulary and the message
//! table. Unknown languages fall back to English.

use serde::{Deserialize, Serialize};

/// How chord roots are spelled
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChordNotation {
    /// Letter names C D E F G A B
    Western,
    /// Fixed-do syllables Do Re Mi Fa Sol La Si
    Solfege,
}

impl ChordNotation {
    /// The notation a user most likely confused this one with
    pub fn other(self) -> Self {
        match self {
            ChordNotation::Western => ChordNotation::Solfege,
            ChordNotation::Solfege => ChordNotation::Western,
        }
    }
}

/// Supported languages
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    It,
    Pt,
}

impl Locale {
    /// Parse a locale tag such as `es`, `es-MX` or `pt_BR`
    ///
    /// Only the primary language subtag is considered; anything unknown is
    /// English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Locale::Es,
            "fr" => Locale::Fr,
            "it" => Locale::It,
            "pt" => Locale::Pt,
            _ => Locale::En,
        }
    }

    /// Key used in the message table
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Pt => "pt",
        }
    }

    pub fn notation(self) -> ChordNotation {
        match self {
            Locale::En => ChordNotation::Western,
            Locale::Es | Locale::Fr | Locale::It | Locale::Pt => ChordNotation::Solfege,
        }
    }
}
