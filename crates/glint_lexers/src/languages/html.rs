//! HTML.
//!
//! An explicit state machine: content, the name after `<`, the attributes
//! of an open tag, and the raw bodies of `<script>` and `<style>`. Script
//! bodies are scanned by [`JavaScriptScanner`] over the same buffer, cut at
//! the closing `</script`, so the handoff copies nothing.

use glint_lexer_core::charset::{ASCII_LETTERS, DIGITS, WHITESPACE};
use glint_lexer_core::scan::scan_while;
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};
use memchr::{memchr, memchr2, memchr_iter, memmem};

use super::JavaScriptScanner;
use crate::scanners::{scan_word, MARKUP_NAME};

const ATTRIBUTE_START: ByteSet = ASCII_LETTERS.with(ByteSet::new(b"_:@"));
const ATTRIBUTE_NAME: ByteSet = MARKUP_NAME.with(ByteSet::new(b"@"));
const UNQUOTED_VALUE_END: ByteSet = ByteSet::new(b" \t\n\r>\"'");
const ENTITY_NAME: ByteSet = ASCII_LETTERS.with(DIGITS);

/// Element whose body is not markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RawText {
    Script,
    Style,
}

enum State<'a> {
    Content,
    /// After `<` or `</`.
    TagName { closing: bool },
    /// Between the tag name and `>`; `after_eq` while a value is expected.
    Tag { raw: Option<RawText>, after_eq: bool },
    /// Inside `<script>`; the inner scanner stops before `</script`.
    Script(Box<JavaScriptScanner<'a>>),
    /// Inside `<style>` up to `end`.
    Style { end: usize },
}

/// HTML scanner over `code[..end]`.
pub struct HtmlScanner<'a> {
    cursor: Cursor<'a>,
    state: State<'a>,
}

impl<'a> HtmlScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
            state: State::Content,
        }
    }

    fn scan_content(&mut self, start: usize) -> TokenType {
        let cursor = &mut self.cursor;
        let code = cursor.source();
        let bytes = code.as_bytes();

        match cursor.current() {
            b'<' if cursor.starts_with("<!--") => {
                let end = memmem::find(&bytes[start + 4..], b"-->")
                    .map_or(bytes.len(), |i| start + 4 + i + 3);
                cursor.set_pos(end);
                TokenType::CommentMultiline
            }
            b'<' if cursor.starts_with_ignore_case("<!DOCTYPE") || cursor.starts_with("<?") => {
                let end = memchr(b'>', &bytes[start..]).map_or(bytes.len(), |i| start + i + 1);
                cursor.set_pos(end);
                TokenType::CommentPreproc
            }
            b'<' if cursor.starts_with("<![CDATA[") => {
                let end = memmem::find(&bytes[start + 9..], b"]]>")
                    .map_or(bytes.len(), |i| start + 9 + i + 3);
                cursor.set_pos(end);
                TokenType::String
            }
            b'<' => {
                cursor.advance();
                let closing = cursor.eat(b'/');
                if ASCII_LETTERS.contains(cursor.current()) {
                    self.state = State::TagName { closing };
                    TokenType::Punctuation
                } else {
                    TokenType::Text
                }
            }
            b'&' => {
                cursor.set_pos(scan_entity(code, start));
                if cursor.pos() > start + 1 {
                    TokenType::NameEntity
                } else {
                    TokenType::Text
                }
            }
            _ => {
                let end = memchr2(b'<', b'&', &bytes[start..]).map_or(bytes.len(), |i| start + i);
                cursor.set_pos(end);
                text_or_whitespace(cursor.slice_from(start))
            }
        }
    }

    fn scan_tag_name(&mut self, start: usize, closing: bool) -> TokenType {
        let end = scan_word(self.cursor.source(), start, &MARKUP_NAME);
        self.cursor.set_pos(end);
        let name = self.cursor.slice_from(start);
        let raw = if closing {
            None
        } else if name.eq_ignore_ascii_case("script") {
            Some(RawText::Script)
        } else if name.eq_ignore_ascii_case("style") {
            Some(RawText::Style)
        } else {
            None
        };
        self.state = State::Tag {
            raw,
            after_eq: false,
        };
        TokenType::NameTag
    }

    fn scan_tag(&mut self, start: usize, raw: Option<RawText>, after_eq: bool) -> TokenType {
        let cursor = &mut self.cursor;
        let code = cursor.source();
        let bytes = code.as_bytes();

        // `a = b` is legal, so whitespace keeps a pending value.
        let mut value_pending = false;
        let kind = match cursor.current() {
            c if WHITESPACE.contains(c) => {
                cursor.eat_while(&WHITESPACE);
                value_pending = after_eq;
                TokenType::Whitespace
            }
            b'>' => {
                cursor.advance();
                self.state = match raw {
                    Some(raw) => raw_body(code, cursor.pos(), raw),
                    None => State::Content,
                };
                return TokenType::Punctuation;
            }
            b'/' if cursor.peek() == b'>' => {
                cursor.advance_n(2);
                self.state = State::Content;
                return TokenType::Punctuation;
            }
            quote @ (b'"' | b'\'') => {
                let end = memchr(quote, &bytes[start + 1..])
                    .map_or(bytes.len(), |i| start + 1 + i + 1);
                cursor.set_pos(end);
                TokenType::String
            }
            c if !after_eq && ATTRIBUTE_START.contains(c) => {
                cursor.set_pos(scan_word(code, start, &ATTRIBUTE_NAME));
                TokenType::NameAttribute
            }
            b'=' if !after_eq => {
                cursor.advance();
                value_pending = true;
                TokenType::Operator
            }
            _ => {
                cursor.advance_char();
                cursor.eat_until(&UNQUOTED_VALUE_END);
                TokenType::String
            }
        };
        self.state = State::Tag {
            raw,
            after_eq: value_pending,
        };
        kind
    }
}

impl Iterator for HtmlScanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        loop {
            if let State::Script(script) = &mut self.state {
                if let Some(lexeme) = script.next() {
                    self.cursor.advance_n(lexeme.len);
                    return Some(lexeme);
                }
                self.state = State::Content;
            }
            if self.cursor.is_eof() {
                return None;
            }
            let start = self.cursor.pos();
            let kind = match self.state {
                State::Content | State::Script(_) => self.scan_content(start),
                State::TagName { closing } => self.scan_tag_name(start, closing),
                State::Tag { raw, after_eq } => self.scan_tag(start, raw, after_eq),
                State::Style { end } => {
                    self.state = State::Content;
                    if end == start {
                        continue;
                    }
                    self.cursor.set_pos(end);
                    TokenType::Text
                }
            };
            return Some(Lexeme::span(kind, start, self.cursor.pos()));
        }
    }
}

/// State for the body of a raw text element starting at `pos`.
fn raw_body(code: &str, pos: usize, raw: RawText) -> State<'_> {
    match raw {
        RawText::Script => {
            let end = find_closing_tag(code, pos, "</script");
            State::Script(Box::new(JavaScriptScanner::new(&code[..end], pos)))
        }
        RawText::Style => State::Style {
            end: find_closing_tag(code, pos, "</style"),
        },
    }
}

/// Offset of the case-insensitive `closing` prefix at or after `pos`, or
/// the end of the input.
fn find_closing_tag(code: &str, pos: usize, closing: &str) -> usize {
    let bytes = code.as_bytes();
    memchr_iter(b'<', &bytes[pos..])
        .map(|i| pos + i)
        .find(|&i| {
            bytes
                .get(i..i + closing.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(closing.as_bytes()))
        })
        .unwrap_or(bytes.len())
}

/// `&name;`, `&#123;` or `&#x7f;` at `pos`; returns `pos + 1` when no
/// well-formed entity starts there.
fn scan_entity(code: &str, pos: usize) -> usize {
    let bytes = code.as_bytes();
    let mut end = pos + 1;
    if bytes.get(end) == Some(&b'#') {
        end += 1;
        if matches!(bytes.get(end), Some(b'x' | b'X')) {
            end += 1;
        }
    }
    let name_end = scan_while(code, end, &ENTITY_NAME);
    if name_end > end && bytes.get(name_end) == Some(&b';') {
        name_end + 1
    } else {
        pos + 1
    }
}

fn text_or_whitespace(text: &str) -> TokenType {
    if text.bytes().all(|b| WHITESPACE.contains(b)) {
        TokenType::Whitespace
    } else {
        TokenType::Text
    }
}
