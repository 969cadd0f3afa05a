use pretty_assertions::assert_eq;

use super::*;

fn lexemes(layout: &[(TokenType, usize)]) -> std::vec::IntoIter<Lexeme> {
    layout.iter()
        .map(|&(kind, len)| Lexeme::new(kind, len))
        .collect::<Vec<_>>()
        .into_iter()
}

/// `"x = 1\n  y"` split by hand.
const SIMPLE: &[(TokenType, usize)] = &[
    (TokenType::Name, 1),
    (TokenType::Whitespace, 1),
    (TokenType::Operator, 1),
    (TokenType::Whitespace, 1),
    (TokenType::NumberInteger, 1),
    (TokenType::Whitespace, 3),
    (TokenType::Name, 1),
];

#[test]
fn tokens_slice_and_position() {
    let src = "x = 1\n  y";
    let tokens: Vec<_> = Tokens::new(lexemes(SIMPLE), src, 0, &LexerConfig::default()).collect();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0], Token::new(TokenType::Name, "x", 1, 1));
    assert_eq!(tokens[4], Token::new(TokenType::NumberInteger, "1", 1, 5));
    assert_eq!(tokens[5], Token::new(TokenType::Whitespace, "\n  ", 1, 6));
    assert_eq!(tokens[6], Token::new(TokenType::Name, "y", 2, 3));
    let rebuilt: String = tokens.iter().map(|t| t.value).collect();
    assert_eq!(rebuilt, src);
}

#[test]
fn fast_tokens_match_positioned_values() {
    let src = "x = 1\n  y";
    let fast: Vec<_> = FastTokens::new(lexemes(SIMPLE), src, 0).collect();
    let slow: Vec<_> = Tokens::new(lexemes(SIMPLE), src, 0, &LexerConfig::default())
        .map(|t| (t.kind, t.value))
        .collect();
    assert_eq!(fast, slow);
}

#[test]
fn range_offsets_are_absolute() {
    let src = "ignored foo";
    let tokens: Vec<_> = Tokens::new(
        lexemes(&[(TokenType::Name, 3)]),
        src,
        8,
        &LexerConfig::default(),
    )
    .collect();
    assert_eq!(tokens, vec![Token::new(TokenType::Name, "foo", 1, 1)]);
}

#[test]
fn zero_length_lexemes_are_skipped() {
    let src = "ab";
    let tokens: Vec<_> = Tokens::new(
        lexemes(&[(TokenType::Name, 0), (TokenType::Name, 2)]),
        src,
        0,
        &LexerConfig::default(),
    )
    .collect();
    assert_eq!(tokens, vec![Token::new(TokenType::Name, "ab", 1, 1)]);
}

// === Whitespace stripping ===

fn stripped<'a>(src: &'a str, layout: &[(TokenType, usize)]) -> Vec<Token<'a>> {
    let config = LexerConfig {
        strip_whitespace: true,
        ..LexerConfig::default()
    };
    Tokens::new(lexemes(layout), src, 0, &config).collect()
}

#[test]
fn strip_drops_spaces_before_newline() {
    let src = "a  \n  b";
    let tokens = stripped(src, &[(TokenType::Name, 1), (TokenType::Whitespace, 5), (TokenType::Name, 1)]);
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Name, "a", 1, 1),
            Token::new(TokenType::Whitespace, "\n", 1, 4),
            Token::new(TokenType::Whitespace, "  ", 2, 1),
            Token::new(TokenType::Name, "b", 2, 3),
        ]
    );
}

#[test]
fn strip_keeps_crlf_together() {
    let src = "a \r\nb";
    let tokens = stripped(src, &[(TokenType::Name, 1), (TokenType::Whitespace, 3), (TokenType::Name, 1)]);
    assert_eq!(tokens[1], Token::new(TokenType::Whitespace, "\r\n", 1, 3));
    assert_eq!(tokens[2], Token::new(TokenType::Name, "b", 2, 1));
}

#[test]
fn strip_handles_blank_lines() {
    let src = "a \n \n b";
    let tokens = stripped(src, &[(TokenType::Name, 1), (TokenType::Whitespace, 5), (TokenType::Name, 1)]);
    let values: Vec<_> = tokens.iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a", "\n", "\n", " ", "b"]);
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[4], Token::new(TokenType::Name, "b", 3, 2));
}

#[test]
fn strip_drops_trailing_whitespace_at_end() {
    let src = "a   ";
    let tokens = stripped(src, &[(TokenType::Name, 1), (TokenType::Whitespace, 3)]);
    assert_eq!(tokens, vec![Token::new(TokenType::Name, "a", 1, 1)]);
}

#[test]
fn strip_drops_spaces_before_separate_line_break() {
    let src = "a  \nb";
    let tokens = stripped(
        src,
        &[
            (TokenType::Text, 1),
            (TokenType::Whitespace, 2),
            (TokenType::Whitespace, 1),
            (TokenType::Text, 1),
        ],
    );
    let values: Vec<_> = tokens.iter().map(|t| t.value).collect();
    assert_eq!(values, vec!["a", "\n", "b"]);
    assert_eq!(tokens[1], Token::new(TokenType::Whitespace, "\n", 1, 4));
}

#[test]
fn strip_keeps_inner_whitespace() {
    let src = "a b";
    let tokens = stripped(src, &[(TokenType::Name, 1), (TokenType::Whitespace, 1), (TokenType::Name, 1)]);
    assert_eq!(tokens.len(), 3);
}
