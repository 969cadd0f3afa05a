//! Turning raw lexemes into tokens.
//!
//! Scanners yield [`Lexeme`]s: a type and a byte length, nothing else.
//! [`Tokens`] walks them with a running offset, slices the source and
//! attaches line/column through a [`LineTracker`]. [`FastTokens`] skips
//! position tracking entirely for callers that only need `(type, text)`.

use memchr::memchr;

use crate::config::LexerConfig;
use crate::position::LineTracker;
use crate::{Lexeme, Token, TokenType};

/// Positioned token stream over a lexeme source.
pub struct Tokens<'a, S> {
    lexemes: S,
    src: &'a str,
    pos: usize,
    lines: LineTracker<'a>,
    strip_whitespace: bool,
    /// Unemitted rest of a whitespace lexeme being stripped.
    pending: Option<(usize, usize)>,
}

impl<'a, S: Iterator<Item = Lexeme>> Tokens<'a, S> {
    /// `src` ends where the scanned range ends; `start` is the range start.
    pub fn new(lexemes: S, src: &'a str, start: usize, config: &LexerConfig) -> Self {
        Self {
            lexemes,
            src,
            pos: start,
            lines: LineTracker::new(src, start, config.tab_size),
            strip_whitespace: config.strip_whitespace,
            pending: None,
        }
    }

    fn make(&mut self, kind: TokenType, start: usize, end: usize) -> Token<'a> {
        let (line, column) = self.lines.position(start);
        self.lines.consume(start, end);
        Token::new(kind, &self.src[start..end], line, column)
    }

    /// Next piece of a whitespace span with line-ending runs removed.
    ///
    /// A piece is either a line break (with the horizontal whitespace in
    /// front of it dropped) or the indentation after the last break.
    fn next_stripped(&mut self, start: usize, end: usize) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();
        let Some(newline) = memchr(b'\n', &bytes[start..end]).map(|offset| start + offset) else {
            // The line break may be the next lexeme (Markdown scans it alone).
            let rest = &bytes[end..];
            if rest.is_empty() || rest.starts_with(b"\n") || rest.starts_with(b"\r\n") {
                return None;
            }
            return Some(self.make(TokenType::Whitespace, start, end));
        };
        let break_start = if newline > start && bytes[newline - 1] == b'\r' {
            newline - 1
        } else {
            newline
        };
        if newline + 1 < end {
            self.pending = Some((newline + 1, end));
        }
        Some(self.make(TokenType::Whitespace, break_start, newline + 1))
    }
}

impl<'a, S: Iterator<Item = Lexeme>> Iterator for Tokens<'a, S> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some((start, end)) = self.pending.take() {
                match self.next_stripped(start, end) {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }
            let lexeme = self.lexemes.next()?;
            let start = self.pos;
            let end = (start + lexeme.len).min(self.src.len());
            self.pos = end;
            if end == start {
                continue;
            }
            if self.strip_whitespace && lexeme.kind == TokenType::Whitespace {
                match self.next_stripped(start, end) {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }
            return Some(self.make(lexeme.kind, start, end));
        }
    }
}

/// `(type, text)` stream with no position tracking.
pub struct FastTokens<'a, S> {
    lexemes: S,
    src: &'a str,
    pos: usize,
}

impl<'a, S: Iterator<Item = Lexeme>> FastTokens<'a, S> {
    pub fn new(lexemes: S, src: &'a str, start: usize) -> Self {
        Self {
            lexemes,
            src,
            pos: start,
        }
    }
}

impl<'a, S: Iterator<Item = Lexeme>> Iterator for FastTokens<'a, S> {
    type Item = (TokenType, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let lexeme = self.lexemes.next()?;
            let start = self.pos;
            let end = (start + lexeme.len).min(self.src.len());
            self.pos = end;
            if end > start {
                return Some((lexeme.kind, &self.src[start..end]));
            }
        }
    }
}

#[cfg(test)]
mod tests;
