//! Directive catalog
//!
//! Allow-list of directive names the editor understands, plus a
//! "did you mean" lookup for misspelled names.

/// Known directive names, in the order suggestions prefer them
pub const KNOWN_DIRECTIVES: &[&str] = &[
    "title",
    "t",
    "subtitle",
    "st",
    "artist",
    "composer",
    "lyricist",
    "arranger",
    "album",
    "year",
    "key",
    "capo",
    "tempo",
    "time",
    "duration",
    "copyright",
    "comment",
    "c",
    "comment_italic",
    "ci",
    "comment_box",
    "cb",
    "highlight",
    "chorus",
    "start_of_verse",
    "end_of_verse",
    "sov",
    "eov",
    "start_of_chorus",
    "end_of_chorus",
    "soc",
    "eoc",
    "start_of_bridge",
    "end_of_bridge",
    "sob",
    "eob",
    "start_of_tab",
    "end_of_tab",
    "sot",
    "eot",
    "new_page",
    "np",
    "column_break",
    "colb",
    "define",
    "chord",
    "meta",
];

/// Largest edit distance still worth suggesting
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Catalog lookups
pub struct DirectiveCatalog;

impl DirectiveCatalog {
    /// True for a catalog entry (case-insensitive)
    pub fn is_known(name: &str) -> bool {
        let name = name.trim().to_lowercase();
        KNOWN_DIRECTIVES.contains(&name.as_str())
    }

    /// True for `start_of_*` / `end_of_*`, which accept any section name
    pub fn is_section_marker(name: &str) -> bool {
        let name = name.trim().to_lowercase();
        name.starts_with("start_of_") || name.starts_with("end_of_")
    }

    /// Closest catalog entry to a misspelled name
    ///
    /// The distance must be at most 2 and smaller than the name itself, so
    /// one-letter typos do not get matched to unrelated one-letter entries.
    /// Ties go to the entry listed first.
    pub fn suggest(name: &str) -> Option<String> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        let len = name.chars().count();

        let mut best: Option<(&str, usize)> = None;
        for &candidate in KNOWN_DIRECTIVES {
            let distance = edit_distance(&name, candidate);
            if distance > MAX_SUGGESTION_DISTANCE || distance >= len {
                continue;
            }
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((candidate, distance));
            }
        }

        best.map(|(candidate, _)| candidate.to_string())
    }
}

/// Optimal string alignment distance: Levenshtein plus adjacent transposition
///
/// `titel` -> `title` costs 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Three rolling rows: i-2, i-1 and i
    let mut before_prev: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut value = (prev[j] + 1)
                .min(current[j - 1] + 1)
                .min(prev[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                value = value.min(before_prev[j - 2] + 1);
            }
            current[j] = value;
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
