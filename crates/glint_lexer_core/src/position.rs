//! Incremental line/column tracking.
//!
//! Tokens are positioned in source order, so the tracker only ever moves
//! forward: line numbers advance by counting `\n` inside each emitted token
//! value, and the column of a token start is computed from the last known
//! column on the same line. Every byte is examined a constant number of
//! times over a whole tokenize call, including very long lines.

use memchr::{memchr_iter, memrchr};

/// Line/column state for one tokenize call.
#[derive(Clone, Debug)]
pub struct LineTracker<'a> {
    bytes: &'a [u8],
    tab_size: u32,
    line: u32,
    /// Offset whose column is `col`; always on the current line.
    col_pos: usize,
    col: u32,
}

impl<'a> LineTracker<'a> {
    /// Start tracking at `start`, which is line 1, column 1.
    pub fn new(src: &'a str, start: usize, tab_size: u32) -> Self {
        Self {
            bytes: src.as_bytes(),
            tab_size: tab_size.max(1),
            line: 1,
            col_pos: start,
            col: 1,
        }
    }

    /// Line and column of offset `pos`.
    ///
    /// `pos` must not precede the previous call's offset on the same line.
    pub fn position(&mut self, pos: usize) -> (u32, u32) {
        let skipped = self.bytes.get(self.col_pos..pos).unwrap_or_default();
        for &b in skipped {
            if b == b'\t' {
                let tab = self.tab_size;
                self.col = ((self.col - 1) / tab + 1).saturating_mul(tab).saturating_add(1);
            } else if b & 0xC0 != 0x80 {
                // Count leading bytes only, so multi-byte characters are one column.
                self.col = self.col.saturating_add(1);
            }
        }
        self.col_pos = self.col_pos.max(pos);
        (self.line, self.col)
    }

    /// Account for the newlines inside `start..end`, which was just emitted.
    pub fn consume(&mut self, start: usize, end: usize) {
        let Some(text) = self.bytes.get(start..end) else {
            return;
        };
        let Some(last) = memrchr(b'\n', text) else {
            return;
        };
        let newlines = u32::try_from(memchr_iter(b'\n', text).count()).unwrap_or(u32::MAX);
        self.line = self.line.saturating_add(newlines);
        self.col_pos = start + last + 1;
        self.col = 1;
    }

    /// Current line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}
