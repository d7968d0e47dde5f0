//! Offset to (line, column) mapping
//!
//! Built once per document, then queried for every diagnostic.
//! All offsets count chars, not bytes.

use serde::{Deserialize, Serialize};

/// A position in text (1-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextPos {
    pub line: usize,
    pub column: usize,
}

impl TextPos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position of the first character of a document
    pub fn origin() -> Self {
        Self { line: 1, column: 1 }
    }
}

/// Line-start table for a single document
///
/// `line_starts[i]` is the char offset where line `i` (0-based) begins,
/// `byte_starts[i]` the matching byte offset.
#[derive(Debug, Clone)]
pub struct PositionIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
    byte_starts: Vec<usize>,
    len_chars: usize,
}

impl<'a> PositionIndex<'a> {
    /// Record every line start in a single pass over `text`
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut byte_starts = vec![0];
        let mut len_chars = 0;

        for (byte_idx, ch) in text.char_indices() {
            len_chars += 1;
            if ch == '\n' {
                line_starts.push(len_chars);
                byte_starts.push(byte_idx + 1);
            }
        }

        Self {
            text,
            line_starts,
            byte_starts,
            len_chars,
        }
    }

    /// Total number of chars in the document
    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    /// Number of lines (an empty document has one empty line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Map a char offset to a 1-based (line, column) pair
    ///
    /// Offsets past the end clamp to the position just after the last char.
    pub fn locate(&self, offset: usize) -> TextPos {
        let offset = offset.min(self.len_chars);
        // partition_point is >= 1 because line_starts[0] == 0 <= offset
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        TextPos::new(line_idx + 1, offset - self.line_starts[line_idx] + 1)
    }

    /// Convert a byte offset (e.g. from a regex match) into a char offset
    ///
    /// Only the prefix of the containing line is re-counted.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        let byte_offset = byte_offset.min(self.text.len());
        let line_idx = self.byte_starts.partition_point(|&start| start <= byte_offset) - 1;
        let line_byte_start = self.byte_starts[line_idx];
        let prefix = self
            .text
            .get(line_byte_start..byte_offset)
            .map(|s| s.chars().count())
            .unwrap_or(0);
        self.line_starts[line_idx] + prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let index = PositionIndex::new("hello\nworld");
        assert_eq!(index.locate(0), TextPos::new(1, 1));
        assert_eq!(index.locate(4), TextPos::new(1, 5));
        // The newline itself belongs to the line it terminates
        assert_eq!(index.locate(5), TextPos::new(1, 6));
    }

    #[test]
    fn test_locate_following_lines() {
        let index = PositionIndex::new("ab\ncd\n\nef");
        assert_eq!(index.locate(3), TextPos::new(2, 1));
        assert_eq!(index.locate(6), TextPos::new(3, 1));
        assert_eq!(index.locate(7), TextPos::new(4, 1));
        assert_eq!(index.locate(8), TextPos::new(4, 2));
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn test_locate_clamps_past_end() {
        let index = PositionIndex::new("ab\ncd");
        assert_eq!(index.locate(100), TextPos::new(2, 3));
    }

    #[test]
    fn test_empty_document() {
        let index = PositionIndex::new("");
        assert_eq!(index.len_chars(), 0);
        assert_eq!(index.locate(0), TextPos::origin());
        assert_eq!(index.locate(10), TextPos::origin());
    }

    #[test]
    fn test_multibyte_chars_count_once() {
        let text = "Señor\nñ[C]";
        let index = PositionIndex::new(text);
        assert_eq!(index.len_chars(), 10);
        assert_eq!(index.locate(6), TextPos::new(2, 1));
        assert_eq!(index.locate(7), TextPos::new(2, 2));

        let byte = text.find("[C]").unwrap();
        assert_eq!(index.char_offset(byte), 7);
    }
}
