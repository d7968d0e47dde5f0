//! Validation configuration
//!
//! Supplied by the editor on every call. Field names are camelCase on the
//! JavaScript side; anything omitted takes its default.

use serde::{Deserialize, Serialize};

use crate::errors::ChordProError;
use crate::models::Locale;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Report unknown directives as errors instead of warnings
    pub strict: bool,
    pub check_chord_syntax: bool,
    pub check_directives: bool,
    pub check_brackets: bool,
    /// Locale tag, e.g. "en", "es-MX"
    pub locale: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            check_chord_syntax: true,
            check_directives: true,
            check_brackets: true,
            locale: "en".to_string(),
        }
    }
}

impl ValidationConfig {
    pub fn from_json(json: &str) -> Result<Self, ChordProError> {
        serde_json::from_str(json).map_err(|e| ChordProError::InvalidConfig(e.to_string()))
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert!(!config.strict);
        assert!(config.check_chord_syntax);
        assert!(config.check_directives);
        assert!(config.check_brackets);
        assert_eq!(config.locale(), Locale::En);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ValidationConfig::from_json(r#"{"checkBrackets": false, "locale": "es"}"#).unwrap();
        assert!(!config.check_brackets);
        assert!(config.check_chord_syntax);
        assert_eq!(config.locale(), Locale::Es);
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = ValidationConfig::from_json(r#"{"strict": "yes"}"#).unwrap_err();
        assert!(matches!(err, ChordProError::InvalidConfig(_)));
    }
}
