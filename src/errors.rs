//! Error types for the API boundary
//!
//! Tokenizing, parsing and validating never fail. Errors only arise while
//! decoding caller-supplied options or encoding results for JavaScript.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordProError {
    /// Parser options could not be decoded
    #[error("Invalid parse options: {0}")]
    InvalidOptions(String),

    /// Validation config could not be decoded
    #[error("Invalid validation config: {0}")]
    InvalidConfig(String),

    /// A result could not be handed back to the caller
    #[error("Serialization failed: {0}")]
    Serialization(String),
}
