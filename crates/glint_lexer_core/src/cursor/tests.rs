use super::*;
use crate::charset::{DIGITS, WHITESPACE};

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc", 0);
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc", 0);
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_clamps_to_end() {
    let mut cursor = Cursor::new("abc", 0);
    cursor.advance_n(10);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn starts_mid_source() {
    let cursor = Cursor::new("hello world", 6);
    assert_eq!(cursor.current(), b'w');
    assert_eq!(cursor.rest(), "world");
}

// === Peek ===

#[test]
fn peek_returns_following_bytes() {
    let cursor = Cursor::new("abc", 0);
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
    assert_eq!(cursor.peek_at(3), 0);
}

#[test]
fn reads_past_bound_return_zero() {
    let code = "abcdef";
    let cursor = Cursor::new(&code[..2], 1);
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(), 0);
}

// === EOF and interior nulls ===

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("", 0);
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new("\0x", 0);
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Characters ===

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("日本", 0);
    assert_eq!(cursor.current_char(), Some('日'));
    cursor.advance_char();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current_char(), Some('本'));
    cursor.advance_char();
    assert!(cursor.is_eof());
    cursor.advance_char();
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn advance_char_handles_four_byte_emoji() {
    let mut cursor = Cursor::new("😀!", 0);
    cursor.advance_char();
    assert_eq!(cursor.current(), b'!');
}

// === Slicing ===

#[test]
fn slice_from_returns_consumed_text() {
    let mut cursor = Cursor::new("let x", 0);
    cursor.advance_n(3);
    assert_eq!(cursor.slice_from(0), "let");
    assert_eq!(cursor.slice(4, 5), "x");
}

// === Prefixes ===

#[test]
fn starts_with_checks_rest() {
    let cursor = Cursor::new("x === y", 2);
    assert!(cursor.starts_with("==="));
    assert!(!cursor.starts_with("!=="));
}

#[test]
fn starts_with_ignore_case() {
    let cursor = Cursor::new("<!doctype html>", 0);
    assert!(cursor.starts_with_ignore_case("<!DOCTYPE"));
    assert!(!cursor.starts_with_ignore_case("<!DOCTYPE html> and more"));
}

#[test]
fn eat_consumes_only_matching_byte() {
    let mut cursor = Cursor::new("ab", 0);
    assert!(!cursor.eat(b'b'));
    assert!(cursor.eat(b'a'));
    assert_eq!(cursor.pos(), 1);
}

// === Bulk scanning ===

#[test]
fn eat_while_and_until() {
    let mut cursor = Cursor::new("123  abc\nrest", 0);
    cursor.eat_while(&DIGITS);
    assert_eq!(cursor.pos(), 3);
    cursor.eat_while(&WHITESPACE);
    assert_eq!(cursor.pos(), 5);
    cursor.eat_until(&WHITESPACE);
    assert_eq!(cursor.pos(), 8);
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("// note\nnext", 0);
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_reaches_eof() {
    let mut cursor = Cursor::new("// note", 0);
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}
