//! Markdown.
//!
//! Block constructs (headings, quotes, lists, rules, code blocks) are only
//! recognized at the start of a line, meaning nothing but spaces and tabs
//! precede them. Inline constructs are recognized anywhere. Everything else
//! is text; Markdown has no error tokens.

use glint_lexer_core::charset::DIGITS;
use glint_lexer_core::scan::{scan_line_comment, scan_until, scan_while};
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};
use memchr::memchr_iter;

const TEXT_STOP: ByteSet = ByteSet::new(b"\n`*_[]!#>-+");
const SPACE_OR_TAB: ByteSet = ByteSet::new(b" \t");
const LIST_MARKERS: ByteSet = ByteSet::new(b"-*+");
const RULE_MARKERS: ByteSet = ByteSet::new(b"-*_");
const HASHES: ByteSet = ByteSet::new(b"#");
const CODE_SPAN_END: ByteSet = ByteSet::new(b"`\n");
const ALT_TEXT_END: ByteSet = ByteSet::new(b"]\n");

/// Markdown scanner over `code[..end]`.
pub struct MarkdownScanner<'a> {
    cursor: Cursor<'a>,
    at_line_start: bool,
}

impl<'a> MarkdownScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
            at_line_start: true,
        }
    }

    fn scan_kind(&mut self, start: usize) -> TokenType {
        let c = self.cursor.current();
        if c == b'\n' {
            self.cursor.advance();
            self.at_line_start = true;
            return TokenType::Whitespace;
        }

        if self.at_line_start {
            if let Some(kind) = self.scan_block(start, c) {
                self.at_line_start = false;
                return kind;
            }
        }

        if let Some(kind) = self.scan_inline(start, c) {
            self.at_line_start = false;
            return kind;
        }

        let end = scan_until(self.cursor.source(), start, &TEXT_STOP);
        if end > start {
            self.cursor.set_pos(end);
            let text = self.cursor.slice_from(start);
            if text.bytes().all(|b| SPACE_OR_TAB.contains(b)) {
                return TokenType::Whitespace;
            }
            self.at_line_start = false;
            return TokenType::Text;
        }

        self.cursor.advance_char();
        self.at_line_start = false;
        TokenType::Text
    }

    fn scan_block(&mut self, start: usize, c: u8) -> Option<TokenType> {
        let code = self.cursor.source();
        let bytes = code.as_bytes();
        let at = |i: usize| bytes.get(i).copied().unwrap_or(0);

        if self.cursor.starts_with("```") || self.cursor.starts_with("~~~") {
            let fence = &code[start..start + 3];
            self.cursor.set_pos(scan_fenced_block(code, start, fence));
            return Some(TokenType::String);
        }

        if self.cursor.starts_with("    ") || c == b'\t' {
            self.cursor.eat_until_newline_or_eof();
            return Some(TokenType::String);
        }

        match c {
            b'#' => {
                let hashes = scan_while(code, start, &HASHES);
                if SPACE_OR_TAB.contains(at(hashes)) {
                    self.cursor.eat_until_newline_or_eof();
                    return Some(TokenType::GenericHeading);
                }
                self.cursor.set_pos(hashes);
                return Some(TokenType::Text);
            }
            b'>' => {
                self.cursor.eat_until_newline_or_eof();
                return Some(TokenType::GenericOutput);
            }
            _ if LIST_MARKERS.contains(c) && SPACE_OR_TAB.contains(at(start + 1)) => {
                self.cursor.advance();
                return Some(TokenType::Punctuation);
            }
            b'0'..=b'9' => {
                let digits = scan_while(code, start, &DIGITS);
                if at(digits) == b'.' && SPACE_OR_TAB.contains(at(digits + 1)) {
                    self.cursor.set_pos(digits + 1);
                    return Some(TokenType::Punctuation);
                }
                self.cursor.set_pos(digits);
                return Some(TokenType::Text);
            }
            _ => {}
        }

        if RULE_MARKERS.contains(c) {
            let rule = ByteSet::new(&[c, b' ', b'\t']);
            let end = scan_while(code, start, &rule);
            let markers = bytes[start..end].iter().filter(|&&b| b == c).count();
            if markers >= 3 && (end == bytes.len() || bytes[end] == b'\n') {
                self.cursor.set_pos(end);
                return Some(TokenType::Punctuation);
            }
        }
        None
    }

    fn scan_inline(&mut self, start: usize, c: u8) -> Option<TokenType> {
        let code = self.cursor.source();
        let bytes = code.as_bytes();
        let at = |i: usize| bytes.get(i).copied().unwrap_or(0);

        match c {
            b'`' => {
                let end = scan_until(code, start + 1, &CODE_SPAN_END);
                self.cursor.set_pos(if at(end) == b'`' { end + 1 } else { end });
                Some(TokenType::String)
            }
            b'*' | b'_' => {
                let end = scan_while(code, start, &ByteSet::new(&[c]));
                self.cursor.set_pos(end);
                Some(match end - start {
                    1 => TokenType::GenericEmph,
                    2 | 3 => TokenType::GenericStrong,
                    _ => TokenType::Text,
                })
            }
            b'[' => {
                self.cursor.set_pos(scan_link(code, start));
                Some(TokenType::NameLabel)
            }
            b'!' if at(start + 1) == b'[' => {
                self.cursor.set_pos(scan_image(code, start));
                Some(TokenType::NameLabel)
            }
            _ => None,
        }
    }
}

impl Iterator for MarkdownScanner<'_> {
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

/// Fenced code block from the opening fence through the end of the closing
/// fence's line (newline excluded), or the end of the input.
fn scan_fenced_block(code: &str, start: usize, fence: &str) -> usize {
    let bytes = code.as_bytes();
    let info_end = scan_line_comment(code, start);
    memchr_iter(b'\n', &bytes[info_end..])
        .map(|i| info_end + i + 1)
        .find(|&line| bytes[line..].starts_with(fence.as_bytes()))
        .map_or(bytes.len(), |line| scan_line_comment(code, line))
}

/// `[text]`, `[text](url)` or `[text][ref]`; brackets in the text nest.
/// Stops at a newline.
fn scan_link(code: &str, start: usize) -> usize {
    let bytes = code.as_bytes();
    let mut pos = start + 1;
    let mut depth = 1u32;
    while depth > 0 {
        match bytes.get(pos) {
            Some(b'[') => depth += 1,
            Some(b']') => depth -= 1,
            Some(b'\n') | None => break,
            Some(_) => {}
        }
        pos += 1;
    }
    if depth > 0 || pos >= bytes.len() {
        return pos;
    }
    match bytes[pos] {
        b'(' => close_on_line(code, pos + 1, b')'),
        b'[' => close_on_line(code, pos + 1, b']'),
        _ => pos,
    }
}

/// `![alt]` optionally followed by `(url)`.
fn scan_image(code: &str, start: usize) -> usize {
    let bytes = code.as_bytes();
    let pos = scan_until(code, start + 2, &ALT_TEXT_END);
    if bytes.get(pos) != Some(&b']') {
        return pos;
    }
    if bytes.get(pos + 1) == Some(&b'(') {
        close_on_line(code, pos + 2, b')')
    } else {
        pos + 1
    }
}

/// Up to and including `close`, or up to the end of the line.
fn close_on_line(code: &str, pos: usize, close: u8) -> usize {
    let end = scan_until(code, pos, &ByteSet::new(&[close, b'\n']));
    if code.as_bytes().get(end) == Some(&close) {
        end + 1
    } else {
        end
    }
}
