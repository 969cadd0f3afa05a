//! Byte cursor over a bounded slice of the source.
//!
//! The cursor borrows the source text already cut at the end of the range
//! being tokenized, so every read is bounds-checked against that end and
//! returns `0x00` past it. Interior null bytes also read as `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to tell them apart.
//!
//! Positions are absolute byte offsets into the original text, which makes
//! range tokenization zero-copy: a scanner over `code[..end]` starting at
//! `start` reports the same offsets as one over the whole input.

use crate::charset::ByteSet;
use crate::scan::{next_char_boundary, scan_line_comment, scan_until, scan_while};

/// Copyable scanning position over `&str`.
///
/// # Invariant
///
/// `pos` is always a UTF-8 character boundary of `src` and `pos <= src.len()`.
/// Byte-wise advances ([`advance`](Self::advance),
/// [`advance_n`](Self::advance_n)) are only valid over ASCII bytes; use
/// [`advance_char`](Self::advance_char) otherwise.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos` over `src`.
    pub fn new(src: &'a str, pos: usize) -> Self {
        debug_assert!(pos <= src.len(), "cursor start {pos} past end {}", src.len());
        debug_assert!(src.is_char_boundary(pos), "cursor start {pos} inside a character");
        Self { src, pos }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.src.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Byte at the current position, or `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one past the current position, or `0x00`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two past the current position, or `0x00`.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte `n` past the current position, or `0x00`.
    #[inline]
    pub fn peek_at(&self, n: usize) -> u8 {
        self.byte_at(self.pos + n)
    }

    /// The character at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.src.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Advance by one ASCII byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "byte advance over non-ASCII");
        self.pos = (self.pos + 1).min(self.src.len());
    }

    /// Advance by `n` ASCII bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.src.len());
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.pos = next_char_boundary(self.src, self.pos);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `pos`, which a scanning primitive returned.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor moved backwards: {} -> {pos}", self.pos);
        self.pos = pos.min(self.src.len());
    }

    /// The whole bounded source.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Offset one past the last readable byte.
    #[inline]
    pub fn end(&self) -> usize {
        self.src.len()
    }

    /// Text from the current position to the end.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    /// Text between two offsets previously produced by this cursor.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().as_bytes().starts_with(prefix.as_bytes())
    }

    /// ASCII case-insensitive prefix test (`<!DOCTYPE`, `</script`).
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Consume `byte` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while the current byte is in `set`.
    #[inline]
    pub fn eat_while(&mut self, set: &ByteSet) {
        self.pos = scan_while(self.src, self.pos, set);
    }

    /// Advance until the current byte is in `set`.
    #[inline]
    pub fn eat_until(&mut self, set: &ByteSet) {
        self.pos = scan_until(self.src, self.pos, set);
    }

    /// Advance to the next `\n` (not consumed) or the end.
    #[inline]
    pub fn eat_until_newline_or_eof(&mut self) {
        self.pos = scan_line_comment(self.src, self.pos);
    }
}

#[cfg(test)]
mod tests;
