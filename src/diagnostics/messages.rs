//! Localized diagnostic messages
//!
//! The table ships inside the binary as YAML and is decoded once, on first
//! use. Lookups fall back to English, then to the message key itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Locale;

const MESSAGES_YAML: &str = include_str!("messages.yaml");

/// Identifies one message in the table
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    InvalidChord,
    UnknownDirective,
    UnterminatedDirective,
    UnmatchedClosingBracket,
    UnclosedBracket,
    UnsafeContent,
    EmptyChord,
    EmptyDirective,
}

impl MessageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::InvalidChord => "invalid_chord",
            MessageKey::UnknownDirective => "unknown_directive",
            MessageKey::UnterminatedDirective => "unterminated_directive",
            MessageKey::UnmatchedClosingBracket => "unmatched_closing_bracket",
            MessageKey::UnclosedBracket => "unclosed_bracket",
            MessageKey::UnsafeContent => "unsafe_content",
            MessageKey::EmptyChord => "empty_chord",
            MessageKey::EmptyDirective => "empty_directive",
        }
    }
}

/// Messages keyed by locale code, then by message
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct MessageTable {
    locales: HashMap<String, HashMap<MessageKey, String>>,
}

impl MessageTable {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Message for `key` in `locale`, falling back to English
    pub fn lookup(&self, key: MessageKey, locale: Locale) -> &str {
        self.get(locale.code(), key)
            .or_else(|| self.get(Locale::En.code(), key))
            .unwrap_or_else(|| key.as_str())
    }

    fn get(&self, code: &str, key: MessageKey) -> Option<&str> {
        self.locales
            .get(code)
            .and_then(|messages| messages.get(&key))
            .map(String::as_str)
    }
}

static MESSAGES: Lazy<MessageTable> = Lazy::new(|| {
    MessageTable::from_yaml(MESSAGES_YAML).unwrap_or_else(|e| {
        log::warn!("Failed to load message table: {}", e);
        MessageTable::default()
    })
});

/// Localized text for a diagnostic
pub fn message(key: MessageKey, locale: Locale) -> String {
    MESSAGES.lookup(key, locale).to_string()
}
