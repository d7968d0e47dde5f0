//! Plain text utilities
//!
//! Pure text positions with no ChordPro knowledge. Every other layer
//! reports locations through this module.

pub mod position;

pub use position::{PositionIndex, TextPos};
