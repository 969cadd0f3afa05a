//! JSON.
//!
//! The grammar is small enough that every construct is matched inline.
//! Object keys are told apart from string values by looking past the string
//! for a `:`.

use glint_lexer_core::charset::DIGITS;
use glint_lexer_core::scan::{scan_string, scan_while};
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};

use crate::scanners::try_punctuation;

const WHITESPACE: ByteSet = ByteSet::new(b" \t\n\r");
const PUNCTUATION: ByteSet = ByteSet::new(b"{}[]:,");

/// JSON scanner over `code[..end]`.
pub struct JsonScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> JsonScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
        }
    }

    fn scan_kind(&mut self, start: usize) -> TokenType {
        let code = self.cursor.source();
        match self.cursor.current() {
            c if WHITESPACE.contains(c) => {
                self.cursor.eat_while(&WHITESPACE);
                TokenType::Whitespace
            }
            b'"' => {
                let end = scan_string(code, start + 1, b'"', true, false);
                self.cursor.set_pos(end);
                // A key is followed by optional whitespace and a colon.
                let after = scan_while(code, end, &WHITESPACE);
                if code.as_bytes().get(after) == Some(&b':') {
                    TokenType::NameTag
                } else {
                    TokenType::String
                }
            }
            b'-' | b'0'..=b'9' => match scan_number(code, start) {
                Some((end, kind)) => {
                    self.cursor.set_pos(end);
                    kind
                }
                None => {
                    self.cursor.advance();
                    TokenType::Error
                }
            },
            b't' if self.cursor.starts_with("true") => self.constant(4),
            b'f' if self.cursor.starts_with("false") => self.constant(5),
            b'n' if self.cursor.starts_with("null") => self.constant(4),
            _ => {
                if let Some(scanned) = try_punctuation(&PUNCTUATION, code, start) {
                    self.cursor.set_pos(scanned.end);
                    return scanned.kind;
                }
                self.cursor.advance_char();
                TokenType::Error
            }
        }
    }

    fn constant(&mut self, len: usize) -> TokenType {
        self.cursor.advance_n(len);
        TokenType::KeywordConstant
    }
}

impl Iterator for JsonScanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = self.scan_kind(start);
        Some(Lexeme::span(kind, start, self.cursor.pos()))
    }
}

/// `-? digits (. digits)? ([eE] [+-]? digits)?`; `None` for a `-` without
/// digits.
fn scan_number(code: &str, pos: usize) -> Option<(usize, TokenType)> {
    let bytes = code.as_bytes();
    let digits_at = if bytes.get(pos) == Some(&b'-') { pos + 1 } else { pos };
    let mut end = scan_while(code, digits_at, &DIGITS);
    if end == digits_at {
        return None;
    }
    let mut kind = TokenType::NumberInteger;

    if bytes.get(end) == Some(&b'.') {
        let fraction = scan_while(code, end + 1, &DIGITS);
        if fraction > end + 1 {
            end = fraction;
            kind = TokenType::NumberFloat;
        }
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = scan_while(code, exponent, &DIGITS);
        if exponent_end > exponent {
            end = exponent_end;
            kind = TokenType::NumberFloat;
        }
    }

    Some((end, kind))
}

#[cfg(test)]
mod tests {
    use glint_lexer_core::FastTokens;
    use pretty_assertions::assert_eq;

    use super::*;

    fn lex(code: &str) -> Vec<(TokenType, &str)> {
        FastTokens::new(JsonScanner::new(code, 0), code, 0).collect()
    }

    #[test]
    fn object_keys_and_values() {
        assert_eq!(
            lex(r#"{"a" : "b", "n":null}"#),
            vec![
                (TokenType::Punctuation, "{"),
                (TokenType::NameTag, r#""a""#),
                (TokenType::Whitespace, " "),
                (TokenType::Punctuation, ":"),
                (TokenType::Whitespace, " "),
                (TokenType::String, r#""b""#),
                (TokenType::Punctuation, ","),
                (TokenType::Whitespace, " "),
                (TokenType::NameTag, r#""n""#),
                (TokenType::Punctuation, ":"),
                (TokenType::KeywordConstant, "null"),
                (TokenType::Punctuation, "}"),
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(lex("42"), vec![(TokenType::NumberInteger, "42")]);
        assert_eq!(lex("-3.5e+2"), vec![(TokenType::NumberFloat, "-3.5e+2")]);
        assert_eq!(lex("1E5"), vec![(TokenType::NumberFloat, "1E5")]);
        assert_eq!(
            lex("1."),
            vec![(TokenType::NumberInteger, "1"), (TokenType::Error, ".")]
        );
    }

    #[test]
    fn lone_minus_is_an_error() {
        assert_eq!(
            lex("- 1"),
            vec![
                (TokenType::Error, "-"),
                (TokenType::Whitespace, " "),
                (TokenType::NumberInteger, "1"),
            ]
        );
    }

    #[test]
    fn constants_by_prefix() {
        assert_eq!(
            lex("[true,false]"),
            vec![
                (TokenType::Punctuation, "["),
                (TokenType::KeywordConstant, "true"),
                (TokenType::Punctuation, ","),
                (TokenType::KeywordConstant, "false"),
                (TokenType::Punctuation, "]"),
            ]
        );
        assert_eq!(
            lex("nul"),
            vec![
                (TokenType::Error, "n"),
                (TokenType::Error, "u"),
                (TokenType::Error, "l"),
            ]
        );
    }

    #[test]
    fn strings_stop_at_newline() {
        assert_eq!(
            lex("\"ab\ncd\""),
            vec![
                (TokenType::String, "\"ab"),
                (TokenType::Whitespace, "\n"),
                (TokenType::Error, "c"),
                (TokenType::Error, "d"),
                (TokenType::String, "\""),
            ]
        );
    }

    #[test]
    fn escapes_in_strings() {
        assert_eq!(lex(r#""a\"b""#), vec![(TokenType::String, r#""a\"b""#)]);
    }
}
