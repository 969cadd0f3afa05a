//! Quoted string literals: plain, triple-quoted, prefixed, hashed raw and
//! raw backtick strings.
//!
//! Interpolated strings (template literals, f-strings) produce several
//! lexemes and live in [`super::interpolation`].

use glint_lexer_core::scan::{scan_string, scan_triple_string, scan_while};
use glint_lexer_core::{ByteSet, TokenType};
use memchr::memchr;

use super::Scanned;

const HASHES: ByteSet = ByteSet::new(b"#");

/// String syntax of a language.
#[derive(Clone, Copy, Debug)]
pub struct StringConfig {
    /// `'...'` is a string (not a character literal).
    pub single: bool,
    pub double: bool,
    /// `"""..."""` and `'''...'''`.
    pub triple: bool,
    /// Quoted strings may contain raw newlines.
    pub multiline: bool,
    pub escapes: bool,
    /// Letters that may prefix a quote (`b"..."`, `r'...'`).
    pub prefix_chars: &'static [u8],
    pub max_prefix: usize,
    /// `r#"..."#` with any number of hashes; `r` prefixes disable escapes.
    pub hashed_raw: bool,
    /// `` `...` `` spans lines and has no escapes.
    pub raw_backtick: bool,
    pub kind: TokenType,
    pub triple_kind: TokenType,
    pub backtick_kind: TokenType,
}

impl StringConfig {
    pub const C_STYLE: StringConfig = StringConfig {
        single: true,
        double: true,
        triple: false,
        multiline: false,
        escapes: true,
        prefix_chars: &[],
        max_prefix: 0,
        hashed_raw: false,
        raw_backtick: false,
        kind: TokenType::String,
        triple_kind: TokenType::String,
        backtick_kind: TokenType::StringBacktick,
    };

    /// Length of the string prefix at `pos` when a quote follows it.
    ///
    /// Returns `Some(0)` for an unprefixed quote.
    pub fn prefix_len(&self, code: &str, pos: usize) -> Option<usize> {
        let bytes = code.as_bytes();
        let mut open = pos;
        while open - pos < self.max_prefix
            && bytes.get(open).is_some_and(|b| self.prefix_chars.contains(b))
        {
            open += 1;
        }
        match bytes.get(open) {
            Some(b'"') if self.double => Some(open - pos),
            Some(b'\'') if self.single => Some(open - pos),
            Some(b'#') if self.hashed_raw && open > pos => Some(open - pos),
            _ => None,
        }
    }

    pub fn try_string(&self, code: &str, pos: usize) -> Option<Scanned> {
        let bytes = code.as_bytes();
        if self.raw_backtick && bytes.get(pos) == Some(&b'`') {
            let end = scan_string(code, pos + 1, b'`', false, true);
            return Some(Scanned::new(self.backtick_kind, end));
        }

        let open = pos + self.prefix_len(code, pos)?;
        let raw = bytes[pos..open].iter().any(|b| matches!(b, b'r' | b'R'));
        let quote = bytes[open];

        if quote == b'#' {
            if !raw {
                return None;
            }
            let hashes = scan_while(code, open, &HASHES) - open;
            if bytes.get(open + hashes) != Some(&b'"') {
                return None;
            }
            let end = scan_hashed_raw(code, open + hashes + 1, hashes);
            return Some(Scanned::new(self.kind, end));
        }

        if self.triple && bytes[open..].starts_with(&[quote; 3]) {
            let end = scan_triple_string(code, open + 3, quote);
            return Some(Scanned::new(self.triple_kind, end));
        }

        let escapes = self.escapes && !(raw && self.hashed_raw);
        let end = scan_string(code, open + 1, quote, escapes, self.multiline);
        Some(Scanned::new(self.kind, end))
    }
}

/// Body of `r#"..."#`; `pos` is just past the opening quote.
fn scan_hashed_raw(code: &str, pos: usize, hashes: usize) -> usize {
    let bytes = code.as_bytes();
    let mut pos = pos;
    loop {
        let Some(offset) = bytes.get(pos..).and_then(|rest| memchr(b'"', rest)) else {
            return bytes.len();
        };
        pos += offset + 1;
        let closing = bytes[pos..]
            .iter()
            .take(hashes)
            .take_while(|&&b| b == b'#')
            .count();
        if closing == hashes {
            return pos + hashes;
        }
    }
}

/// Single-quoted character literal (`'a'`, `'\n'`); `pos` is at the quote.
pub fn scan_char_literal(code: &str, pos: usize) -> Scanned {
    Scanned::new(
        TokenType::StringChar,
        scan_string(code, pos + 1, b'\'', true, false),
    )
}
