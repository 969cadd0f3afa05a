//! Scanner fragments shared by the language state machines.
//!
//! Each fragment is a plain `const` configuration value with a `try_*`
//! method. A `try_*` method inspects the text at `pos` and either returns
//! the construct it recognized (its type and end offset) or `None` when the
//! construct does not start there. Language scanners call the fragments
//! they need in priority order:
//!
//! whitespace → comments → strings → numbers → identifiers → operators →
//! punctuation → one-character error fallback.

mod comments;
mod interpolation;
mod numbers;
mod operators;
mod strings;

pub use comments::CommentConfig;
pub use interpolation::{Interpolation, TemplateStyle};
pub use numbers::NumberConfig;
pub use operators::OperatorConfig;
pub use strings::{scan_char_literal, StringConfig};

use glint_lexer_core::charset::{ASCII_LETTERS, DIGITS, IDENT_CONTINUE, IDENT_START};
use glint_lexer_core::{ByteSet, Lexeme, TokenType};

/// A construct recognized by a scanner fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanned {
    pub kind: TokenType,
    /// Offset one past the construct.
    pub end: usize,
}

impl Scanned {
    #[inline]
    pub const fn new(kind: TokenType, end: usize) -> Self {
        Self { kind, end }
    }

    /// Lexeme for this construct when it started at `start`.
    #[inline]
    pub fn lexeme(self, start: usize) -> Lexeme {
        Lexeme::span(self.kind, start, self.end)
    }
}

// ─── Identifiers ───

/// Identifier continue bytes for languages that allow `$` (JavaScript).
pub const IDENT_CONTINUE_DOLLAR: ByteSet = IDENT_CONTINUE.with(ByteSet::new(b"$"));
pub const IDENT_START_DOLLAR: ByteSet = IDENT_START.with(ByteSet::new(b"$"));
/// HTML tag and attribute names.
pub const MARKUP_NAME: ByteSet = ASCII_LETTERS.with(DIGITS).with(ByteSet::new(b"-_:."));

#[inline]
fn char_at(code: &str, pos: usize) -> Option<char> {
    code.get(pos..).and_then(|rest| rest.chars().next())
}

/// Whether a word starts at `pos`: an ASCII byte in `start`, or any
/// non-ASCII alphabetic character.
pub fn is_word_start(code: &str, pos: usize, start: &ByteSet) -> bool {
    match code.as_bytes().get(pos) {
        Some(&b) if b.is_ascii() => start.contains(b),
        Some(_) => char_at(code, pos).is_some_and(char::is_alphabetic),
        None => false,
    }
}

/// Advance over a word: ASCII bytes in `continue_set` and non-ASCII
/// alphanumeric characters.
pub fn scan_word(code: &str, pos: usize, continue_set: &ByteSet) -> usize {
    let bytes = code.as_bytes();
    let mut end = pos;
    while let Some(&b) = bytes.get(end) {
        if b.is_ascii() {
            if !continue_set.contains(b) {
                break;
            }
            end += 1;
        } else {
            match char_at(code, end) {
                Some(c) if c.is_alphanumeric() => end += c.len_utf8(),
                _ => break,
            }
        }
    }
    end
}

/// Identifier with the usual `[A-Za-z_][A-Za-z0-9_]*` shape plus Unicode
/// letters; `None` when no identifier starts at `pos`.
#[inline]
pub fn scan_identifier(code: &str, pos: usize) -> Option<usize> {
    is_word_start(code, pos, &IDENT_START).then(|| scan_word(code, pos, &IDENT_CONTINUE))
}

// ─── Punctuation ───

/// One-byte punctuation from `set`.
#[inline]
pub fn try_punctuation(set: &ByteSet, code: &str, pos: usize) -> Option<Scanned> {
    let &b = code.as_bytes().get(pos)?;
    set.contains(b)
        .then_some(Scanned::new(TokenType::Punctuation, pos + 1))
}

#[cfg(test)]
mod tests;
