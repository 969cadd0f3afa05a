//! Strings with embedded expressions: JavaScript template literals and
//! Python f-strings.
//!
//! An interpolated string is several lexemes: literal text chunks, the
//! field delimiters (`${`/`{` and `}`), and the tokens of each embedded
//! expression, which the owning language scans normally. A stack of
//! frames records where the scanner is, so nesting (a template inside a
//! field inside a template) needs no recursion and has no depth limit.
//!
//! Delimiters are [`TokenType::StringInterpol`]; literal text uses the kind
//! the language passes in.

use glint_lexer_core::scan::utf8_char_width;
use glint_lexer_core::{Cursor, Lexeme, TokenType};
use memchr::{memchr, memchr3};
use smallvec::SmallVec;

/// Delimiters of one interpolated string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateStyle {
    pub quote: u8,
    pub triple: bool,
    /// Fields open with `${` (JavaScript) rather than `{` (Python).
    pub dollar: bool,
    /// Literal text may contain raw newlines.
    pub multiline: bool,
    /// Literal text kind.
    pub kind: TokenType,
}

impl TemplateStyle {
    /// Single-line text ends at a newline; so does a field inside it.
    fn single_line(self) -> bool {
        !(self.multiline || self.triple)
    }
}

#[derive(Clone, Copy, Debug)]
enum Frame {
    /// Inside literal text.
    Text(TemplateStyle),
    /// Inside a replacement field with `depth` unclosed brackets.
    Field { style: TemplateStyle, depth: u32 },
    /// Inside a format spec (`{value:>10}`).
    Spec(TemplateStyle),
}

/// Why a literal text scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextStop {
    /// At a field opener, which is not consumed.
    Field,
    /// Past the closing quote(s).
    Closed,
    /// At a newline ending single-line text, or at the end of input.
    Unterminated,
}

/// Nesting state of the interpolated strings open at the cursor.
#[derive(Clone, Debug, Default)]
pub struct Interpolation {
    frames: SmallVec<[Frame; 4]>,
}

impl Interpolation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cursor is inside an embedded expression (or outside any
    /// interpolated string): the language scans code normally there.
    pub fn in_code(&self) -> bool {
        matches!(self.frames.last(), None | Some(Frame::Field { .. }))
    }

    /// Start an interpolated string whose prefix and opening quotes are
    /// `opener_len` bytes at the cursor. Returns the first text chunk,
    /// which includes the opener.
    pub fn open(&mut self, cursor: &mut Cursor<'_>, opener_len: usize, style: TemplateStyle) -> Lexeme {
        let start = cursor.pos();
        cursor.advance_n(opener_len);
        let (end, stop) = scan_text(cursor.source(), cursor.pos(), style);
        if stop == TextStop::Field {
            self.frames.push(Frame::Text(style));
        }
        cursor.set_pos(end);
        Lexeme::span(style.kind, start, end)
    }

    /// Scan literal text or a format spec at the cursor.
    ///
    /// Call only when [`in_code`](Self::in_code) is false. Returns `None`
    /// when the string ended without further text (the frame is popped and
    /// the caller should continue scanning).
    pub fn scan_literal(&mut self, cursor: &mut Cursor<'_>) -> Option<Lexeme> {
        let start = cursor.pos();
        match self.frames.last().copied()? {
            Frame::Text(style) => {
                if let Some(opener) = field_opener(cursor, style) {
                    cursor.advance_n(opener);
                    self.frames.push(Frame::Field { style, depth: 0 });
                    return Some(Lexeme::span(TokenType::StringInterpol, start, cursor.pos()));
                }
                let (end, stop) = scan_text(cursor.source(), start, style);
                if stop != TextStop::Field {
                    self.frames.pop();
                }
                cursor.set_pos(end);
                (end > start).then(|| Lexeme::span(style.kind, start, end))
            }
            Frame::Spec(style) => match cursor.current() {
                b'{' if !cursor.is_eof() => {
                    cursor.advance();
                    self.frames.push(Frame::Field { style, depth: 0 });
                    Some(Lexeme::span(TokenType::StringInterpol, start, cursor.pos()))
                }
                b'}' => {
                    cursor.advance();
                    self.frames.pop();
                    Some(Lexeme::span(TokenType::StringInterpol, start, cursor.pos()))
                }
                _ => {
                    let end = scan_spec(cursor.source(), start, style);
                    if end == start {
                        // Quote, newline or end of input: the text frame below decides.
                        self.frames.pop();
                        return None;
                    }
                    cursor.set_pos(end);
                    Some(Lexeme::span(style.kind, start, end))
                }
            },
            Frame::Field { .. } => None,
        }
    }

    /// Inspect a code byte inside a replacement field before the language
    /// scans it. Returns a lexeme when the byte closes the field or starts
    /// a format spec; otherwise only updates bracket depth.
    pub fn field_delimiter(&mut self, cursor: &mut Cursor<'_>) -> Option<Lexeme> {
        let Some(Frame::Field { style, depth }) = self.frames.last_mut() else {
            return None;
        };
        let start = cursor.pos();
        match cursor.current() {
            b'{' | b'(' | b'[' => *depth += 1,
            b')' | b']' => *depth = depth.saturating_sub(1),
            b'}' if *depth > 0 => *depth -= 1,
            b'}' => {
                self.frames.pop();
                cursor.advance();
                return Some(Lexeme::span(TokenType::StringInterpol, start, cursor.pos()));
            }
            b':' if *depth == 0 && !style.dollar => {
                let style = *style;
                self.frames.pop();
                self.frames.push(Frame::Spec(style));
                cursor.advance();
                return Some(Lexeme::span(TokenType::StringInterpol, start, cursor.pos()));
            }
            b' ' | b'\t' | b'\r' | b'\n' if style.single_line() => {
                // A single-line string cannot continue past a newline.
                let crosses_line = cursor
                    .rest()
                    .bytes()
                    .take_while(u8::is_ascii_whitespace)
                    .any(|b| b == b'\n');
                if crosses_line {
                    self.end_line();
                }
            }
            _ => {}
        }
        None
    }

    /// Close every single-line construct on top of the stack at a newline.
    fn end_line(&mut self) {
        while let Some(frame) = self.frames.last() {
            if !frame.style().single_line() {
                break;
            }
            self.frames.pop();
        }
    }
}

impl Frame {
    fn style(&self) -> TemplateStyle {
        match *self {
            Frame::Text(style) | Frame::Field { style, .. } | Frame::Spec(style) => style,
        }
    }
}

/// Length of the field opener at the cursor, if any.
fn field_opener(cursor: &Cursor<'_>, style: TemplateStyle) -> Option<usize> {
    if cursor.is_eof() {
        return None;
    }
    match (style.dollar, cursor.current(), cursor.peek()) {
        (true, b'$', b'{') => Some(2),
        (false, b'{', next) if next != b'{' => Some(1),
        _ => None,
    }
}

/// End of the single-line limit starting at `pos`.
fn line_limit(bytes: &[u8], pos: usize, style: TemplateStyle) -> usize {
    if style.single_line() {
        memchr(b'\n', &bytes[pos..]).map_or(bytes.len(), |offset| pos + offset)
    } else {
        bytes.len()
    }
}

/// Scan literal text up to a field opener, the closing quote(s), or the
/// end of the text.
fn scan_text(code: &str, pos: usize, style: TemplateStyle) -> (usize, TextStop) {
    let bytes = code.as_bytes();
    let quote = style.quote;
    let opener = if style.dollar { b'$' } else { b'{' };
    let mut limit = line_limit(bytes, pos, style);
    let mut i = pos;
    while let Some(offset) = memchr3(quote, b'\\', opener, &bytes[i..limit]) {
        i += offset;
        let b = bytes[i];
        if b == b'\\' {
            if i + 1 >= bytes.len() {
                return (bytes.len(), TextStop::Unterminated);
            }
            if i + 1 == limit {
                // Escaped newline continues single-line text.
                limit = line_limit(bytes, i + 2, style);
            }
            i = (i + 1 + utf8_char_width(bytes[i + 1])).min(bytes.len());
        } else if b == quote {
            if !style.triple {
                return (i + 1, TextStop::Closed);
            }
            if bytes[i..].starts_with(&[quote; 3]) {
                return (i + 3, TextStop::Closed);
            }
            i += 1;
        } else {
            let next = bytes.get(i + 1).copied().unwrap_or(0);
            match (style.dollar, next) {
                (true, b'{') => return (i, TextStop::Field),
                (false, b'{') => i += 2,
                (false, _) => return (i, TextStop::Field),
                (true, _) => i += 1,
            }
        }
        i = i.min(limit);
    }
    (limit, TextStop::Unterminated)
}

/// Scan format spec text up to `{`, `}`, the quote or the line limit.
fn scan_spec(code: &str, pos: usize, style: TemplateStyle) -> usize {
    let bytes = code.as_bytes();
    let limit = line_limit(bytes, pos, style);
    memchr3(b'{', b'}', style.quote, &bytes[pos..limit]).map_or(limit, |offset| pos + offset)
}
