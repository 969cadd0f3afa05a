//! Numeric literals.
//!
//! Handles decimal integers, `0x`/`0o`/`0b` radix prefixes, fractions,
//! exponents and language-specific suffixes. A suffix only counts when the
//! whole identifier run after the digits is one of the configured
//! spellings, so `1if` scans as `1` followed by the keyword `if`.

use glint_lexer_core::charset::{
    BIN_DIGITS, DIGITS, HEX_DIGITS, IDENT_CONTINUE, IDENT_START, OCT_DIGITS,
};
use glint_lexer_core::{ByteSet, TokenType};

use super::{is_word_start, scan_word, Scanned};

/// Number syntax of a language.
#[derive(Clone, Copy, Debug)]
pub struct NumberConfig {
    pub hex: bool,
    pub octal: bool,
    pub binary: bool,
    /// `_` digit separators.
    pub underscores: bool,
    /// Floats may start with a dot (`.5`).
    pub leading_dot: bool,
    pub integer_suffixes: &'static [&'static str],
    /// Suffixes that make any decimal literal a float (`f32`).
    pub float_suffixes: &'static [&'static str],
    /// Imaginary suffixes (`j`, `i`); the literal becomes [`TokenType::Number`].
    pub imaginary_suffixes: &'static [&'static str],
}

impl NumberConfig {
    pub const C_STYLE: NumberConfig = NumberConfig {
        hex: true,
        octal: true,
        binary: true,
        underscores: true,
        leading_dot: true,
        integer_suffixes: &[],
        float_suffixes: &[],
        imaginary_suffixes: &[],
    };

    pub fn try_number(&self, code: &str, pos: usize) -> Option<Scanned> {
        let bytes = code.as_bytes();
        let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
        let first = at(pos);

        if first == b'.' {
            if !(self.leading_dot && at(pos + 1).is_ascii_digit()) {
                return None;
            }
            let end = self.digits(code, pos + 1, &DIGITS);
            let end = self.exponent(code, end);
            return Some(self.suffixed(code, end, TokenType::NumberFloat));
        }
        if !first.is_ascii_digit() {
            return None;
        }

        if first == b'0' {
            let radix = match at(pos + 1) {
                b'x' | b'X' if self.hex => Some((HEX_DIGITS, TokenType::NumberHex)),
                b'o' | b'O' if self.octal => Some((OCT_DIGITS, TokenType::NumberOct)),
                b'b' | b'B' if self.binary => Some((BIN_DIGITS, TokenType::NumberBin)),
                _ => None,
            };
            if let Some((set, kind)) = radix {
                let end = self.digits(code, pos + 2, &set);
                return Some(self.suffixed(code, end, kind));
            }
        }

        let mut end = self.digits(code, pos, &DIGITS);
        let mut kind = TokenType::NumberInteger;
        if at(end) == b'.' {
            let next = at(end + 1);
            if next.is_ascii_digit() {
                end = self.digits(code, end + 1, &DIGITS);
                kind = TokenType::NumberFloat;
            } else if next != b'.' && !is_word_start(code, end + 1, &IDENT_START) {
                // `1.` is a float; `1..2` and `1.max()` are not.
                end += 1;
                kind = TokenType::NumberFloat;
            }
        }
        let exponent_end = self.exponent(code, end);
        if exponent_end != end {
            end = exponent_end;
            kind = TokenType::NumberFloat;
        }
        Some(self.suffixed(code, end, kind))
    }

    fn digits(&self, code: &str, pos: usize, set: &ByteSet) -> usize {
        let bytes = code.as_bytes();
        let mut end = pos;
        while let Some(&b) = bytes.get(end) {
            if set.contains(b) || (self.underscores && b == b'_') {
                end += 1;
            } else {
                break;
            }
        }
        end
    }

    /// `e`/`E`, an optional sign, then at least one digit; else nothing.
    fn exponent(&self, code: &str, pos: usize) -> usize {
        let bytes = code.as_bytes();
        let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
        if !matches!(at(pos), b'e' | b'E') {
            return pos;
        }
        let mut digits_at = pos + 1;
        if matches!(at(digits_at), b'+' | b'-') {
            digits_at += 1;
        }
        if at(digits_at).is_ascii_digit() {
            self.digits(code, digits_at, &DIGITS)
        } else {
            pos
        }
    }

    fn suffixed(&self, code: &str, end: usize, kind: TokenType) -> Scanned {
        let suffix_end = scan_word(code, end, &IDENT_CONTINUE);
        if suffix_end == end {
            return Scanned::new(kind, end);
        }
        let suffix = &code[end..suffix_end];
        let decimal = matches!(kind, TokenType::NumberInteger | TokenType::NumberFloat);
        if decimal && self.imaginary_suffixes.contains(&suffix) {
            Scanned::new(TokenType::Number, suffix_end)
        } else if decimal && self.float_suffixes.contains(&suffix) {
            Scanned::new(TokenType::NumberFloat, suffix_end)
        } else if kind != TokenType::NumberFloat && self.integer_suffixes.contains(&suffix) {
            Scanned::new(kind, suffix_end)
        } else {
            Scanned::new(kind, end)
        }
    }
}
