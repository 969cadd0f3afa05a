//! Python.
//!
//! Adds three context rules to plain priority dispatch:
//! - `#!` at the start of the range is a hashbang comment;
//! - `@name` is a decorator when only whitespace precedes it on its line;
//! - f-strings (any prefix containing `f`) are split into text chunks and
//!   replacement fields, whose expressions are scanned as ordinary Python.

use glint_lexer_core::charset::{IDENT_CONTINUE, IDENT_START, WHITESPACE};
use glint_lexer_core::{ByteSet, Cursor, Lexeme, TokenType};

use crate::scanners::{
    is_word_start, scan_identifier, scan_word, try_punctuation, CommentConfig, Interpolation,
    NumberConfig, OperatorConfig, StringConfig, TemplateStyle,
};

const COMMENTS: CommentConfig = CommentConfig::HASH;

const STRINGS: StringConfig = StringConfig {
    triple: true,
    prefix_chars: b"rRbBuUfF",
    max_prefix: 2,
    triple_kind: TokenType::StringDoc,
    ..StringConfig::C_STYLE
};

const NUMBERS: NumberConfig = NumberConfig {
    imaginary_suffixes: &["j", "J"],
    ..NumberConfig::C_STYLE
};

const OPERATORS: OperatorConfig = OperatorConfig {
    four: &[],
    three: &["**=", "//=", ">>=", "<<="],
    two: &[
        "**", "//", "==", "!=", "<=", ">=", "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=",
        "^=", "@=", "->", ":=",
    ],
    one: b"+-*/%@&|^~<>=!",
};

const PUNCTUATION: ByteSet = ByteSet::new(b"()[]{}:;,.");

/// Python scanner over `code[..end]`.
pub struct PythonScanner<'a> {
    cursor: Cursor<'a>,
    range_start: usize,
    /// Only whitespace since the last newline (or the range start).
    at_line_start: bool,
    interpolation: Interpolation,
}

impl<'a> PythonScanner<'a> {
    pub fn new(code: &'a str, start: usize) -> Self {
        Self {
            cursor: Cursor::new(code, start),
            range_start: start,
            at_line_start: true,
            interpolation: Interpolation::new(),
        }
    }

    fn scan_token(&mut self) -> Lexeme {
        let start = self.cursor.pos();
        let code = self.cursor.source();
        let line_start = std::mem::replace(&mut self.at_line_start, false);
        let kind = self.scan_kind(code, start, line_start);
        Lexeme::span(kind, start, self.cursor.pos())
    }

    fn scan_kind(&mut self, code: &'a str, start: usize, line_start: bool) -> TokenType {
        let c = self.cursor.current();

        if WHITESPACE.contains(c) {
            self.cursor.eat_while(&WHITESPACE);
            self.at_line_start = line_start || self.cursor.slice_from(start).contains('\n');
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

        if let Some(prefix) = STRINGS.prefix_len(code, start) {
            let is_f_string = code.as_bytes()[start..start + prefix]
                .iter()
                .any(|b| matches!(b, b'f' | b'F'));
            if is_f_string {
                return self.open_f_string(start, prefix);
            }
            if let Some(scanned) = STRINGS.try_string(code, start) {
                self.cursor.set_pos(scanned.end);
                return scanned.kind;
            }
        }

        if let Some(scanned) = NUMBERS.try_number(code, start) {
            self.cursor.set_pos(scanned.end);
            return scanned.kind;
        }

        if c == b'@' && line_start && is_word_start(code, start + 1, &IDENT_START) {
            self.cursor.set_pos(scan_dotted_name(code, start + 1));
            return TokenType::NameDecorator;
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

        if c == b'\\' {
            // Explicit line continuation.
            self.cursor.advance();
            return TokenType::Text;
        }

        self.cursor.advance_char();
        TokenType::Error
    }

    fn open_f_string(&mut self, start: usize, prefix: usize) -> TokenType {
        let code = self.cursor.source().as_bytes();
        let quote = code[start + prefix];
        let triple = code[start + prefix..].starts_with(&[quote; 3]);
        let style = TemplateStyle {
            quote,
            triple,
            dollar: false,
            multiline: false,
            kind: TokenType::String,
        };
        let opener = prefix + if triple { 3 } else { 1 };
        self.interpolation.open(&mut self.cursor, opener, style).kind
    }
}

impl Iterator for PythonScanner<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
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
            return Some(self.scan_token());
        }
    }
}

/// `name(.name)*`
fn scan_dotted_name(code: &str, pos: usize) -> usize {
    let mut end = scan_word(code, pos, &IDENT_CONTINUE);
    while code.as_bytes().get(end) == Some(&b'.') && is_word_start(code, end + 1, &IDENT_START) {
        end = scan_word(code, end + 1, &IDENT_CONTINUE);
    }
    end
}

fn classify(word: &str) -> TokenType {
    match word {
        "def" | "class" => TokenType::KeywordDeclaration,
        "import" | "from" => TokenType::KeywordNamespace,
        "and" | "as" | "assert" | "async" | "await" | "break" | "continue" | "del" | "elif"
        | "else" | "except" | "finally" | "for" | "global" | "if" | "in" | "is" | "lambda"
        | "nonlocal" | "not" | "or" | "pass" | "raise" | "return" | "try" | "while" | "with"
        | "yield" => TokenType::Keyword,
        "True" | "False" | "None" => TokenType::KeywordConstant,
        "self" | "cls" => TokenType::NameBuiltinPseudo,
        "ArithmeticError" | "AssertionError" | "AttributeError" | "BaseException"
        | "BlockingIOError" | "BrokenPipeError" | "BufferError" | "ConnectionError"
        | "EOFError" | "Exception" | "FileExistsError" | "FileNotFoundError"
        | "FloatingPointError" | "GeneratorExit" | "ImportError" | "IndentationError"
        | "IndexError" | "InterruptedError" | "IsADirectoryError" | "KeyError"
        | "KeyboardInterrupt" | "LookupError" | "MemoryError" | "ModuleNotFoundError"
        | "NameError" | "NotADirectoryError" | "NotImplementedError" | "OSError"
        | "OverflowError" | "PermissionError" | "RecursionError" | "ReferenceError"
        | "RuntimeError" | "StopAsyncIteration" | "StopIteration" | "SyntaxError"
        | "SystemError" | "SystemExit" | "TimeoutError" | "TypeError" | "UnboundLocalError"
        | "UnicodeDecodeError" | "UnicodeEncodeError" | "UnicodeError" | "ValueError"
        | "ZeroDivisionError" | "Warning" | "DeprecationWarning" | "UserWarning" => {
            TokenType::NameException
        }
        "abs" | "all" | "any" | "ascii" | "bin" | "bool" | "breakpoint" | "bytearray" | "bytes"
        | "callable" | "chr" | "classmethod" | "compile" | "complex" | "delattr" | "dict"
        | "dir" | "divmod" | "enumerate" | "eval" | "exec" | "filter" | "float" | "format"
        | "frozenset" | "getattr" | "globals" | "hasattr" | "hash" | "help" | "hex" | "id"
        | "input" | "int" | "isinstance" | "issubclass" | "iter" | "len" | "list" | "locals"
        | "map" | "max" | "memoryview" | "min" | "next" | "object" | "oct" | "open" | "ord"
        | "pow" | "print" | "property" | "range" | "repr" | "reversed" | "round" | "set"
        | "setattr" | "slice" | "sorted" | "staticmethod" | "str" | "sum" | "super" | "tuple"
        | "type" | "vars" | "zip" | "NotImplemented" | "Ellipsis" => TokenType::NameBuiltin,
        _ if is_dunder(word) => TokenType::NameFunctionMagic,
        _ => TokenType::Name,
    }
}

/// `__name__`
fn is_dunder(word: &str) -> bool {
    word.len() > 4 && word.starts_with("__") && word.ends_with("__")
}
