//! JavaScript (ECMAScript).
//!
//! Template literals go through [`Interpolation`] so `${...}` fields are
//! scanned as code. A `/` starts a regular expression literal only where an
//! operand is expected, which is tracked with one flag updated after every
//! non-trivia token.

use glint_lexer_core::charset::{ASCII_LETTERS, WHITESPACE};
use glint_lexer_core::scan::{scan_while, utf8_char_width};
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};

use crate::scanners::{
    is_word_start, scan_word, try_punctuation, CommentConfig, Interpolation, NumberConfig,
    OperatorConfig, StringConfig, TemplateStyle, IDENT_CONTINUE_DOLLAR, IDENT_START_DOLLAR,
};

const COMMENTS: CommentConfig = CommentConfig::C_STYLE;

const STRINGS: StringConfig = StringConfig::C_STYLE;

const NUMBERS: NumberConfig = NumberConfig {
    // BigInt
    integer_suffixes: &["n"],
    ..NumberConfig::C_STYLE
};

const OPERATORS: OperatorConfig = OperatorConfig {
    four: &[">>>="],
    three: &["===", "!==", ">>>", "**=", "&&=", "||=", "??=", "<<=", ">>=", "..."],
    two: &[
        "==", "!=", "<=", ">=", "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
        "|=", "^=", "<<", ">>", "=>", "**", "?.",
    ],
    one: b"+-*/%&|^~!<>=?:.",
};

const PUNCTUATION: ByteSet = ByteSet::new(b"()[]{};,");

const TEMPLATE: TemplateStyle = TemplateStyle {
    quote: b'`',
    triple: false,
    dollar: true,
    multiline: true,
    kind: TokenType::StringBacktick,
};

/// JavaScript scanner over `code[..end]`.
pub struct JavaScriptScanner<'a> {
    cursor: Cursor<'a>,
    range_start: usize,
    /// A `/` here starts a regular expression rather than division.
    regex_allowed: bool,
    interpolation: Interpolation,
}

impl<'a> JavaScriptScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
            range_start: start,
            regex_allowed: true,
            interpolation: Interpolation::new(),
        }
    }

    fn next_lexeme(&mut self) -> Option<Lexeme> {
        loop {
            if !self.interpolation.in_code() {
                match self.interpolation.scan_literal(&mut self.cursor) {
                    Some(lexeme) => return Some(lexeme),
                    None => continue,
                }
            }
            if self.cursor.is_eof() {
                return None;
            }
            if let Some(lexeme) = self.interpolation.field_delimiter(&mut self.cursor) {
                return Some(lexeme);
            }
            let start = self.cursor.pos();
            let kind = self.scan_kind(start);
            return Some(Lexeme::span(kind, start, self.cursor.pos()));
        }
    }

    fn scan_kind(&mut self, start: usize) -> TokenType {
        let code = self.cursor.source();
        let c = self.cursor.current();

        if WHITESPACE.contains(c) {
            self.cursor.eat_while(&WHITESPACE);
            return TokenType::Whitespace;
        }

        if start == self.range_start && self.cursor.starts_with("#!") {
            self.cursor.eat_until_newline_or_eof();
            return TokenType::CommentHashbang;
        }

        if let Some(scanned) = COMMENTS.try_comment(code, start) {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if c == b'/' && self.regex_allowed {
            self.cursor.set_pos(scan_regex(code, start));
            return TokenType::StringRegex;
        }

        if c == b'`' {
            return self.interpolation.open(&mut self.cursor, 1, TEMPLATE).kind;
        }

        if let Some(scanned) = STRINGS
            .try_string(code, start)
            .or_else(|| NUMBERS.try_number(code, start))
        {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if is_word_start(code, start, &IDENT_START_DOLLAR) {
            self.cursor.set_pos(scan_word(code, start, &IDENT_CONTINUE_DOLLAR));
            return classify(self.cursor.slice_from(start));
        }

        // Private class member.
        if c == b'#' && is_word_start(code, start + 1, &IDENT_START_DOLLAR) {
            self.cursor.set_pos(scan_word(code, start + 1, &IDENT_CONTINUE_DOLLAR));
            return TokenType::Name;
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

impl Iterator for JavaScriptScanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.next_lexeme()?;
        let end = self.cursor.pos();
        let text = self.cursor.slice(end - lexeme.len, end);
        self.regex_allowed = regex_allowed_after(lexeme.kind, text, self.regex_allowed);
        Some(lexeme)
    }
}

/// Whether an operand (and so a regex literal) may follow a token.
fn regex_allowed_after(kind: TokenType, text: &str, current: bool) -> bool {
    match kind {
        kind if kind.is_trivia() => current,
        TokenType::Operator => !matches!(text, "++" | "--"),
        TokenType::Punctuation => !matches!(text, ")" | "]" | "}"),
        TokenType::StringInterpol => text == "${",
        TokenType::KeywordConstant => false,
        kind if kind.is_keyword() => !matches!(text, "this" | "super"),
        _ => false,
    }
}

/// Regular expression literal at `pos` (the opening `/`), including flags.
///
/// A `/` inside a character class does not close the literal. A newline
/// ends an unterminated literal without consuming it.
fn scan_regex(code: &str, pos: usize) -> usize {
    let bytes = code.as_bytes();
    let mut i = pos + 1;
    let mut in_class = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => match bytes.get(i + 1) {
                Some(b'\n') | None => return i + 1,
                Some(&next) => i += 1 + utf8_char_width(next),
            },
            b'\n' => return i,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => return scan_while(code, i + 1, &ASCII_LETTERS),
            _ => i += 1,
        }
    }
    bytes.len()
}

fn classify(word: &str) -> TokenType {
    match word {
        "function" | "class" | "const" | "let" | "var" => TokenType::KeywordDeclaration,
        "import" | "export" | "from" => TokenType::KeywordNamespace,
        "async" | "await" | "break" | "case" | "catch" | "continue" | "debugger" | "default"
        | "delete" | "do" | "else" | "extends" | "finally" | "for" | "if" | "in"
        | "instanceof" | "new" | "of" | "return" | "static" | "super" | "switch" | "this"
        | "throw" | "try" | "typeof" | "void" | "while" | "with" | "yield" => TokenType::Keyword,
        "true" | "false" | "null" | "undefined" | "NaN" | "Infinity" => {
            TokenType::KeywordConstant
        }
        "enum" | "implements" | "interface" | "package" | "private" | "protected" | "public" => {
            TokenType::KeywordReserved
        }
        "Array" | "Boolean" | "Date" | "Error" | "Function" | "JSON" | "Map" | "Math"
        | "Number" | "Object" | "Promise" | "Proxy" | "Reflect" | "RegExp" | "Set" | "String"
        | "Symbol" | "WeakMap" | "WeakSet" | "console" | "document" | "window" | "globalThis"
        | "parseInt" | "parseFloat" | "isNaN" | "isFinite" | "encodeURI" | "decodeURI"
        | "encodeURIComponent" | "decodeURIComponent" | "setTimeout" | "setInterval"
        | "clearTimeout" | "clearInterval" | "fetch" | "require" | "module" | "exports" => {
            TokenType::NameBuiltin
        }
        _ => TokenType::Name,
    }
}

#[cfg(test)]
mod tests;
