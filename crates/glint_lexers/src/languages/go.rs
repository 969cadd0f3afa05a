//! Go.

use glint_lexer_core::charset::WHITESPACE;
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};

use crate::scanners::{
    scan_char_literal, scan_identifier, try_punctuation, CommentConfig, NumberConfig,
    OperatorConfig, StringConfig,
};

const COMMENTS: CommentConfig = CommentConfig::C_STYLE;

/// `'x'` is a rune, scanned separately.
const STRINGS: StringConfig = StringConfig {
    single: false,
    raw_backtick: true,
    ..StringConfig::C_STYLE
};

const NUMBERS: NumberConfig = NumberConfig {
    imaginary_suffixes: &["i"],
    ..NumberConfig::C_STYLE
};

const OPERATORS: OperatorConfig = OperatorConfig {
    four: &[],
    three: &["<<=", ">>=", "&^=", "..."],
    two: &[
        "==", "!=", "<=", ">=", "&&", "||", "<-", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
        "|=", "^=", "<<", ">>", "&^", ":=",
    ],
    one: b"+-*/%&|^<>=!~",
};

const PUNCTUATION: ByteSet = ByteSet::new(b"()[]{};,.:");

/// Go scanner over `code[..end]`.
pub struct GoScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> GoScanner<'a> {
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

        let literal = COMMENTS
            .try_comment(code, start)
            .or_else(|| STRINGS.try_string(code, start))
            .or_else(|| (c == b'\'').then(|| scan_char_literal(code, start)))
            .or_else(|| NUMBERS.try_number(code, start));
        if let Some(scanned) = literal {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if let Some(end) = scan_identifier(code, start) {
            self.cursor.set_pos(end);
            return classify(self.cursor.slice_from(start));
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
}

impl Iterator for GoScanner<'_> {
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

fn classify(word: &str) -> TokenType {
    match word {
        "var" | "const" | "type" | "func" | "struct" | "interface" | "map" | "chan" => {
            TokenType::KeywordDeclaration
        }
        "package" | "import" => TokenType::KeywordNamespace,
        "break" | "case" | "continue" | "default" | "defer" | "else" | "fallthrough" | "for"
        | "go" | "goto" | "if" | "range" | "return" | "select" | "switch" => TokenType::Keyword,
        "true" | "false" | "nil" | "iota" => TokenType::KeywordConstant,
        "any" | "bool" | "byte" | "complex64" | "complex128" | "error" | "float32" | "float64"
        | "int" | "int8" | "int16" | "int32" | "int64" | "rune" | "string" | "uint" | "uint8"
        | "uint16" | "uint32" | "uint64" | "uintptr" => TokenType::KeywordType,
        "append" | "cap" | "clear" | "close" | "complex" | "copy" | "delete" | "imag" | "len"
        | "make" | "max" | "min" | "new" | "panic" | "print" | "println" | "real" | "recover" => {
            TokenType::NameBuiltin
        }
        _ => TokenType::Name,
    }
}
