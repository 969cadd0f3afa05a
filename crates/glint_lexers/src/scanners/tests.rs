use glint_lexer_core::charset::IDENT_CONTINUE;
use glint_lexer_core::{ByteSet, TokenType};
use pretty_assertions::assert_eq;

use super::*;

// === Words ===

#[test]
fn ascii_identifiers() {
    assert_eq!(scan_identifier("foo_bar1 x", 0), Some(8));
    assert_eq!(scan_identifier("_x", 0), Some(2));
    assert_eq!(scan_identifier("1abc", 0), None);
    assert_eq!(scan_identifier("", 0), None);
}

#[test]
fn unicode_identifiers() {
    let code = "größe = 1";
    assert_eq!(scan_identifier(code, 0), Some("größe".len()));
    assert_eq!(scan_identifier("π2", 0), Some("π2".len()));
    // Non-alphabetic characters do not start or continue words.
    assert_eq!(scan_identifier("→x", 0), None);
    assert_eq!(scan_word("a→", 0, &IDENT_CONTINUE), 1);
}

#[test]
fn dollar_identifiers() {
    assert!(is_word_start("$el", 0, &IDENT_START_DOLLAR));
    assert_eq!(scan_word("$el.x", 0, &IDENT_CONTINUE_DOLLAR), 3);
    assert!(!is_word_start("$el", 0, &glint_lexer_core::charset::IDENT_START));
}

#[test]
fn markup_names() {
    assert_eq!(scan_word("data-id=1", 0, &MARKUP_NAME), 7);
    assert_eq!(scan_word("xml:lang>", 0, &MARKUP_NAME), 8);
}

// === Punctuation ===

#[test]
fn punctuation_is_one_byte() {
    const SET: ByteSet = ByteSet::new(b"()");
    assert_eq!(
        try_punctuation(&SET, "((", 0),
        Some(Scanned::new(TokenType::Punctuation, 1))
    );
    assert_eq!(try_punctuation(&SET, "x", 0), None);
    assert_eq!(try_punctuation(&SET, "(", 1), None);
}

#[test]
fn scanned_lexeme_covers_span() {
    let lexeme = Scanned::new(TokenType::Name, 7).lexeme(3);
    assert_eq!(lexeme.kind, TokenType::Name);
    assert_eq!(lexeme.len, 4);
}
