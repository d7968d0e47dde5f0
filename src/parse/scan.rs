//! Line splitting and bracket-pair extraction
//!
//! The tokenizer, the structural parser and the validator all walk the
//! document line by line and pull `{...}` / `[...]` pairs out of each line
//! with the same loop, so they agree on what a chord or directive span is.

/// One physical line of the source, with its absolute char offset
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    /// Char offset of the first char of this line in the whole document
    pub start: usize,
    /// Chars of the line, without the terminating `\n`
    pub chars: Vec<char>,
    /// True for the final line (not followed by `\n`)
    pub is_last: bool,
}

impl SourceLine {
    /// Line text as an owned string
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// True when the trimmed line starts with `#`
    pub fn is_hash_comment(&self) -> bool {
        self.chars
            .iter()
            .find(|c| !c.is_whitespace())
            .map_or(false, |&c| c == '#')
    }

    /// Substring of the line by char range
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

/// Split text on `\n` into lines carrying absolute offsets
///
/// The running cursor advances by `line.len() + 1` for every line except the
/// last one. An empty document yields a single empty line.
pub fn source_lines(text: &str) -> Vec<SourceLine> {
    let raw: Vec<&str> = text.split('\n').collect();
    let count = raw.len();
    let mut cursor = 0;
    let mut lines = Vec::with_capacity(count);

    for (idx, line) in raw.into_iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let is_last = idx + 1 == count;
        lines.push(SourceLine {
            start: cursor,
            chars,
            is_last,
        });
        cursor += if is_last { len } else { len + 1 };
    }

    lines
}

/// A bracketed span within a line: `start` is the opener, `end` is one past
/// the closer (both line-local char indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketSpan {
    pub start: usize,
    pub end: usize,
}

impl BracketSpan {
    /// Range of the text between the brackets
    pub fn inner(&self) -> std::ops::Range<usize> {
        self.start + 1..self.end - 1
    }
}

/// Result of running the pair-extraction loop over one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairScan {
    /// Every complete pair, left to right
    pub spans: Vec<BracketSpan>,
    /// Index where the unpaired remainder of the line starts
    pub tail: usize,
    /// An opener in the remainder that never found its closer
    pub unclosed: Option<usize>,
}

/// Find the first `open`, then the first `close` after it, and repeat on the
/// remainder until no more pairs exist
pub fn scan_pairs(chars: &[char], open: char, close: char) -> PairScan {
    let mut spans = Vec::new();
    let mut cursor = 0;

    loop {
        let Some(open_idx) = find_from(chars, open, cursor) else {
            break;
        };
        let Some(close_idx) = find_from(chars, close, open_idx + 1) else {
            break;
        };
        spans.push(BracketSpan {
            start: open_idx,
            end: close_idx + 1,
        });
        cursor = close_idx + 1;
    }

    let unclosed = find_from(chars, open, cursor);
    PairScan {
        spans,
        tail: cursor,
        unclosed,
    }
}

/// True when the line holds an `open` followed somewhere by a `close`
pub fn has_pair(chars: &[char], open: char, close: char) -> bool {
    find_from(chars, open, 0)
        .and_then(|open_idx| find_from(chars, close, open_idx + 1))
        .is_some()
}

fn find_from(chars: &[char], needle: char, from: usize) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == needle)
        .map(|idx| idx + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_source_lines_offsets() {
        let lines = source_lines("ab\n\ncde");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].start, 0);
        assert_eq!(lines[1].start, 3);
        assert_eq!(lines[2].start, 4);
        assert!(lines[2].is_last);
        assert!(!lines[0].is_last);
    }

    #[test]
    fn test_source_lines_trailing_newline() {
        let lines = source_lines("ab\n");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].chars.is_empty());
        assert_eq!(lines[1].start, 3);
    }

    #[test]
    fn test_scan_pairs_multiple() {
        let scan = scan_pairs(&chars("[C]Hello [G]world"), '[', ']');
        assert_eq!(
            scan.spans,
            vec![BracketSpan { start: 0, end: 3 }, BracketSpan { start: 9, end: 12 }]
        );
        assert_eq!(scan.tail, 12);
        assert_eq!(scan.unclosed, None);
    }

    #[test]
    fn test_scan_pairs_unclosed_opener() {
        let scan = scan_pairs(&chars("[C] and [G"), '[', ']');
        assert_eq!(scan.spans.len(), 1);
        assert_eq!(scan.tail, 3);
        assert_eq!(scan.unclosed, Some(8));
    }

    #[test]
    fn test_scan_pairs_pairs_first_opener_with_first_closer() {
        let scan = scan_pairs(&chars("[C [G] x"), '[', ']');
        assert_eq!(scan.spans, vec![BracketSpan { start: 0, end: 6 }]);
    }

    #[test]
    fn test_has_pair_requires_order() {
        assert!(has_pair(&chars("a {b} c"), '{', '}'));
        assert!(!has_pair(&chars("a } b {"), '{', '}'));
        assert!(!has_pair(&chars("no brackets"), '{', '}'));
    }

    #[test]
    fn test_hash_comment_detection() {
        let lines = source_lines("   # note\nnot # a comment");
        assert!(lines[0].is_hash_comment());
        assert!(!lines[1].is_hash_comment());
    }
}
