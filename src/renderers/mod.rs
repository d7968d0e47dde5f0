//! Renderers for parsed ChordPro documents

pub mod chord_lyrics;

pub use chord_lyrics::{layout_line, render_rows, render_text, ChordLyricSegment};
