use chordpro_wasm::{tokenize, Token, TokenKind};
use proptest::prelude::*;

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_chord_line_tokens() {
    let tokens = tokenize("[C]Hello [G]world");
    let summary: Vec<(TokenKind, &str, usize, usize)> = tokens
        .iter()
        .map(|t| (t.kind, t.text.as_str(), t.start, t.end))
        .collect();

    assert_eq!(
        summary,
        vec![
            (TokenKind::Chord, "[C]", 0, 3),
            (TokenKind::Lyrics, "Hello ", 3, 9),
            (TokenKind::Chord, "[G]", 9, 12),
            (TokenKind::Lyrics, "world", 12, 17),
        ]
    );
}

#[test]
fn test_mixed_document() {
    let text = "{title: Song}\n# note\n[Am]la\n\nplain";
    let tokens = tokenize(text);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Directive,
            TokenKind::Lyrics,
            TokenKind::Comment,
            TokenKind::Lyrics,
            TokenKind::Chord,
            TokenKind::Lyrics,
            TokenKind::Lyrics,
            TokenKind::Lyrics,
            TokenKind::Lyrics,
        ]
    );
    assert_eq!(joined(&tokens), text);
}

#[test]
fn test_directive_wins_over_chords_on_same_line() {
    let tokens = tokenize("{c: intro} [G]");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Chord));
    assert_eq!(tokens[0].kind, TokenKind::Directive);
    assert_eq!(joined(&tokens), "{c: intro} [G]");
}

#[test]
fn test_offsets_are_in_chars() {
    let tokens = tokenize("ñ[D]é");
    assert_eq!(tokens[1].text, "[D]");
    assert_eq!((tokens[1].start, tokens[1].end), (1, 4));
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
}

proptest! {
    #[test]
    fn prop_round_trip(text in "[\\[\\]{}#a-zA-Z ñé\n\r:]{0,64}") {
        let tokens = tokenize(&text);
        prop_assert_eq!(joined(&tokens), text);
    }

    #[test]
    fn prop_tokens_are_contiguous(text in "[\\[\\]{}#a-z \n]{0,64}") {
        let tokens = tokenize(&text);
        let mut expected = 0;
        for token in &tokens {
            prop_assert_eq!(token.start, expected);
            prop_assert_eq!(token.end - token.start, token.text.chars().count());
            expected = token.end;
        }
        prop_assert_eq!(expected, text.chars().count());
    }
}
