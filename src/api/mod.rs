//! ChordPro WASM API
//!
//! - `helpers`: console logging, option decoding, result encoding
//! - `core`: the exported functions

pub mod helpers;
pub mod core;

pub use core::*;
