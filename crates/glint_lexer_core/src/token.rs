//! Positioned tokens and the raw lexemes scanners produce.

use crate::TokenType;

/// A classified slice of the input.
///
/// `value` borrows the original source, so a token stream never copies text.
/// `line` and `column` are 1-based and describe where `value` starts;
/// columns count characters, with tabs expanded to the configured tab stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    pub kind: TokenType,
    pub value: &'a str,
    pub line: u32,
    pub column: u32,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenType, value: &'a str, line: u32, column: u32) -> Self {
        Self {
            kind,
            value,
            line,
            column,
        }
    }
}

/// Raw scanner output: a token type and the number of bytes it covers.
///
/// Lexemes carry no position. They are contiguous, so a consumer recovers
/// each lexeme's text by keeping a running offset (see [`crate::Tokens`]).
/// Scanners never produce a zero-length lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenType,
    pub len: usize,
}

impl Lexeme {
    #[inline]
    pub const fn new(kind: TokenType, len: usize) -> Self {
        Self { kind, len }
    }

    /// Lexeme covering `start..end`.
    #[inline]
    pub fn span(kind: TokenType, start: usize, end: usize) -> Self {
        debug_assert!(end > start, "empty lexeme {kind} at {start}");
        Self {
            kind,
            len: end - start,
        }
    }
}
