//! Rust.

use glint_lexer_core::charset::WHITESPACE;
use glint_lexer_core::scan::utf8_char_width;
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};

use crate::scanners::{
    scan_char_literal, scan_identifier, try_punctuation, CommentConfig, NumberConfig,
    OperatorConfig, StringConfig,
};

const COMMENTS: CommentConfig = CommentConfig::NESTED_C_STYLE;

const STRINGS: StringConfig = StringConfig {
    single: false,
    multiline: true,
    prefix_chars: b"bcr",
    max_prefix: 2,
    hashed_raw: true,
    ..StringConfig::C_STYLE
};

const NUMBERS: NumberConfig = NumberConfig {
    leading_dot: false,
    integer_suffixes: &[
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    ],
    float_suffixes: &["f32", "f64"],
    ..NumberConfig::C_STYLE
};

const OPERATORS: OperatorConfig = OperatorConfig {
    four: &[],
    three: &["<<=", ">>=", "...", "..="],
    two: &[
        "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "^=", "&=", "|=", "<<",
        ">>", "->", "=>", "::", "..",
    ],
    one: b"+-*/%^!&|=<>@?~",
};

// `#` and `$` appear bare inside `macro_rules!`.
const PUNCTUATION: ByteSet = ByteSet::new(b"()[]{};,.:#$");

/// Rust scanner over `code[..end]`.
pub struct RustScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RustScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
        }
    }

    fn scan_kind(&mut self, start: usize) -> TokenType {
        let code = self.cursor.source();
        let c = self.cursor.current();

        if WHITESPACE.contains(c) {
            self.cursor.eat_while(&WHITESPACE);
            return TokenType::Whitespace;
        }

        if let Some(scanned) = COMMENTS.try_comment(code, start) {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if c == b'\'' {
            return self.scan_quote(start);
        }
        if c == b'b' && self.cursor.peek() == b'\'' {
            let scanned = scan_char_literal(code, start + 1);
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if let Some(scanned) = STRINGS.try_string(code, start) {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        // Raw identifier.
        if self.cursor.starts_with("r#") {
            if let Some(end) = scan_identifier(code, start + 2) {
                self.cursor.set_pos(end);
                return TokenType::Name;
            }
        }

        if let Some(scanned) = NUMBERS.try_number(code, start) {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if c == b'#' {
            if let Some(end) = scan_attribute_start(code, start) {
                self.cursor.set_pos(end);
                return TokenType::NameDecorator;
            }
        }

        if let Some(end) = scan_identifier(code, start) {
            self.cursor.set_pos(end);
            let word = self.cursor.slice_from(start);
            // Macro invocation, not `x != y`.
            if self.cursor.current() == b'!' && self.cursor.peek() != b'=' && !is_keyword(word) {
                self.cursor.advance();
                return TokenType::NameFunctionMagic;
            }
            return classify(word);
        }

        if let Some(scanned) = OPERATORS
            .try_operator(code, start)
            .or_else(|| try_punctuation(&PUNCTUATION, code, start))
        {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        self.cursor.advance_char();
        TokenType::Error
    }

    /// `'x'`, `'\n'` or a lifetime `'a`.
    fn scan_quote(&mut self, start: usize) -> TokenType {
        let code = self.cursor.source();
        let bytes = code.as_bytes();
        let next = self.cursor.peek();
        let is_char = next == b'\\'
            || bytes
                .get(start + 1)
                .is_some_and(|&b| bytes.get(start + 1 + utf8_char_width(b)) == Some(&b'\''));
        if is_char {
            let scanned = scan_char_literal(code, start);
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }
        if let Some(end) = scan_identifier(code, start + 1) {
            self.cursor.set_pos(end);
            return TokenType::NameLabel;
        }
        self.cursor.advance();
        TokenType::Error
    }
}

impl Iterator for RustScanner<'_> {
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

/// `#[path` or `#![path`, where `path` may contain `::`.
fn scan_attribute_start(code: &str, pos: usize) -> Option<usize> {
    let bytes = code.as_bytes();
    let mut end = pos + 1;
    if bytes.get(end) == Some(&b'!') {
        end += 1;
    }
    if bytes.get(end) != Some(&b'[') {
        return None;
    }
    end += 1;
    while let Some(word_end) = scan_identifier(code, end) {
        end = word_end;
        if !bytes[end..].starts_with(b"::") {
            break;
        }
        end += 2;
    }
    Some(end)
}

fn is_keyword(word: &str) -> bool {
    classify(word).is_keyword()
}

fn classify(word: &str) -> TokenType {
    match word {
        "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "try"
        | "typeof" | "unsized" | "virtual" | "yield" => TokenType::KeywordReserved,
        "fn" | "let" | "const" | "static" | "struct" | "enum" | "trait" | "type" | "impl"
        | "mod" => TokenType::KeywordDeclaration,
        "use" | "extern" | "crate" => TokenType::KeywordNamespace,
        "as" | "async" | "await" | "break" | "continue" | "dyn" | "else" | "for" | "if" | "in"
        | "loop" | "match" | "move" | "mut" | "pub" | "ref" | "return" | "unsafe" | "where"
        | "while" => TokenType::Keyword,
        "self" | "Self" | "super" => TokenType::KeywordPseudo,
        "true" | "false" => TokenType::KeywordConstant,
        "bool" | "char" | "str" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8"
        | "u16" | "u32" | "u64" | "u128" | "usize" | "f32" | "f64" => TokenType::KeywordType,
        "Some" | "None" | "Ok" | "Err" | "Vec" | "String" | "Box" | "Option" | "Result" => {
            TokenType::NameBuiltin
        }
        _ => TokenType::Name,
    }
}
