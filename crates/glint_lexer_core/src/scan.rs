//! Position-advancing scanning primitives.
//!
//! Every function takes the source text and a byte offset and returns the
//! offset just past what it matched. The text is already cut at the end of
//! the range being tokenized, so no primitive ever reads beyond it.
//!
//! Guarantees shared by all primitives:
//! - the returned position is `>= pos` and `<= code.len()`;
//! - the returned position is a UTF-8 character boundary whenever `pos` is;
//! - each byte is inspected a bounded number of times (memchr-accelerated),
//!   so a scan is linear in the bytes it covers.

use memchr::{memchr, memchr2, memchr3, memmem};

use crate::charset::ByteSet;

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// Continuation and invalid leading bytes count as width 1.
#[inline]
pub const fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Position after the character starting at `pos`, clamped to the input.
#[inline]
pub fn next_char_boundary(code: &str, pos: usize) -> usize {
    match code.as_bytes().get(pos) {
        Some(&b) => (pos + utf8_char_width(b)).min(code.len()),
        None => pos,
    }
}

/// Advance while the current byte is in `set`.
#[inline]
pub fn scan_while(code: &str, pos: usize, set: &ByteSet) -> usize {
    let bytes = code.as_bytes();
    let mut end = pos;
    while end < bytes.len() && set.contains(bytes[end]) {
        end += 1;
    }
    end
}

/// Advance until the current byte is in `set` (or end of input).
#[inline]
pub fn scan_until(code: &str, pos: usize, set: &ByteSet) -> usize {
    let bytes = code.as_bytes();
    let mut end = pos;
    while end < bytes.len() && !set.contains(bytes[end]) {
        end += 1;
    }
    end
}

/// Scan the body of a quoted string; `pos` is just past the opening quote.
///
/// Returns the position after the closing quote. With `allow_escape`, a
/// backslash and the whole character after it form one unit; a backslash
/// that is the last byte of the input is an ordinary character. Without
/// `allow_multiline`, a raw newline ends the string unterminated and the
/// returned position points *at* the newline. An unterminated string
/// otherwise runs to the end of the input.
pub fn scan_string(
    code: &str,
    pos: usize,
    quote: u8,
    allow_escape: bool,
    allow_multiline: bool,
) -> usize {
    let bytes = code.as_bytes();
    let len = bytes.len();
    let mut pos = pos;
    loop {
        let Some(rest) = bytes.get(pos..) else {
            return len;
        };
        let found = match (allow_escape, allow_multiline) {
            (true, false) => memchr3(quote, b'\\', b'\n', rest),
            (true, true) => memchr2(quote, b'\\', rest),
            (false, false) => memchr2(quote, b'\n', rest),
            (false, true) => memchr(quote, rest),
        };
        let Some(offset) = found else {
            return len;
        };
        pos += offset;
        let b = bytes[pos];
        if b == quote {
            return pos + 1;
        }
        if b == b'\n' {
            // Only searched for when newlines terminate.
            return pos;
        }
        // Backslash escape.
        if pos + 1 >= len {
            return len;
        }
        pos = (pos + 1 + utf8_char_width(bytes[pos + 1])).min(len);
    }
}

/// Scan the body of a triple-quoted string; `pos` is just past the opening
/// three quotes. Runs to the end of the input when never closed.
pub fn scan_triple_string(code: &str, pos: usize, quote: u8) -> usize {
    let bytes = code.as_bytes();
    let len = bytes.len();
    let closing = [quote; 3];
    let mut pos = pos;
    loop {
        let Some(rest) = bytes.get(pos..) else {
            return len;
        };
        let Some(offset) = memchr2(quote, b'\\', rest) else {
            return len;
        };
        pos += offset;
        if bytes[pos] == quote {
            if bytes[pos..].starts_with(&closing) {
                return pos + 3;
            }
            pos += 1;
            continue;
        }
        if pos + 1 >= len {
            return len;
        }
        pos = (pos + 1 + utf8_char_width(bytes[pos + 1])).min(len);
    }
}

/// Scan to the next newline, which is not consumed.
#[inline]
pub fn scan_line_comment(code: &str, pos: usize) -> usize {
    let bytes = code.as_bytes();
    match bytes.get(pos..).and_then(|rest| memchr(b'\n', rest)) {
        Some(offset) => pos + offset,
        None => bytes.len().max(pos),
    }
}

/// Scan past the first occurrence of `end_marker`, or to the end of input.
///
/// `pos` is just past the opening marker.
pub fn scan_block_comment(code: &str, pos: usize, end_marker: &str) -> usize {
    let bytes = code.as_bytes();
    match bytes
        .get(pos..)
        .and_then(|rest| memmem::find(rest, end_marker.as_bytes()))
    {
        Some(offset) => pos + offset + end_marker.len(),
        None => bytes.len().max(pos),
    }
}

/// Depth-counted block comment; `pos` is just past the first `open`.
///
/// Every `open` increases the depth and every `close` decreases it; the
/// comment ends when the depth returns to zero. There is no depth limit,
/// and an unterminated comment at any depth runs to the end of input.
pub fn scan_nested_block_comment(code: &str, pos: usize, open: &str, close: &str) -> usize {
    let bytes = code.as_bytes();
    let len = bytes.len();
    let (open, close) = (open.as_bytes(), close.as_bytes());
    let (Some(&open_first), Some(&close_first)) = (open.first(), close.first()) else {
        return len;
    };
    let mut depth = 1usize;
    let mut pos = pos;
    loop {
        let Some(rest) = bytes.get(pos..) else {
            return len;
        };
        let Some(offset) = memchr2(open_first, close_first, rest) else {
            return len;
        };
        pos += offset;
        let rest = &bytes[pos..];
        if rest.starts_with(close) {
            pos += close.len();
            depth -= 1;
            if depth == 0 {
                return pos;
            }
        } else if rest.starts_with(open) {
            pos += open.len();
            depth += 1;
        } else {
            pos += 1;
        }
    }
}
