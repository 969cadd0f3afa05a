//! The closed set of supported languages.
//!
//! [`Language`] is a plain `Copy` tag. Each tokenize call builds the
//! matching [`Scanner`] over the requested range and wraps it in a token
//! stream, so a `Language` can be shared freely across threads.

use std::fmt;
use std::ops::Range;

use glint_lexer_core::{FastTokens, Lexeme, LexerConfig, Tokens};

use crate::languages::{
    GoScanner, HtmlScanner, JavaScriptScanner, JsonScanner, MarkdownScanner, PythonScanner,
    RustScanner,
};

/// Static metadata describing a language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageInfo {
    /// Canonical lower-case name.
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Glob patterns (`*.py`).
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

/// A supported language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Python,
    JavaScript,
    Json,
    Html,
    Markdown,
    Rust,
    Go,
}

const PYTHON: LanguageInfo = LanguageInfo {
    name: "python",
    aliases: &["py", "python3", "py3"],
    filenames: &["*.py", "*.pyw", "*.pyi"],
    mimetypes: &["text/x-python", "application/x-python"],
};

const JAVASCRIPT: LanguageInfo = LanguageInfo {
    name: "javascript",
    aliases: &["js", "ecmascript"],
    filenames: &["*.js", "*.mjs", "*.cjs"],
    mimetypes: &["text/javascript", "application/javascript"],
};

const JSON: LanguageInfo = LanguageInfo {
    name: "json",
    aliases: &[],
    filenames: &["*.json"],
    mimetypes: &["application/json"],
};

const HTML: LanguageInfo = LanguageInfo {
    name: "html",
    aliases: &["htm"],
    filenames: &["*.html", "*.htm"],
    mimetypes: &["text/html"],
};

const MARKDOWN: LanguageInfo = LanguageInfo {
    name: "markdown",
    aliases: &["md"],
    filenames: &["*.md", "*.markdown"],
    mimetypes: &["text/markdown"],
};

const RUST: LanguageInfo = LanguageInfo {
    name: "rust",
    aliases: &["rs"],
    filenames: &["*.rs"],
    mimetypes: &["text/rust", "text/x-rust"],
};

const GO: LanguageInfo = LanguageInfo {
    name: "go",
    aliases: &["golang"],
    filenames: &["*.go"],
    mimetypes: &["text/x-gosrc"],
};

impl Language {
    /// Every language, in declaration order.
    pub const ALL: &'static [Language] = &[
        Language::Python,
        Language::JavaScript,
        Language::Json,
        Language::Html,
        Language::Markdown,
        Language::Rust,
        Language::Go,
    ];

    pub const fn info(self) -> &'static LanguageInfo {
        match self {
            Language::Python => &PYTHON,
            Language::JavaScript => &JAVASCRIPT,
            Language::Json => &JSON,
            Language::Html => &HTML,
            Language::Markdown => &MARKDOWN,
            Language::Rust => &RUST,
            Language::Go => &GO,
        }
    }

    /// Canonical name (`"python"`).
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Raw lexemes for `code[range]`. The range must already lie on char
    /// boundaries; see [`clamp_range`].
    pub fn scanner(self, code: &str, range: Range<usize>) -> Scanner<'_> {
        let code = &code[..range.end];
        let start = range.start;
        match self {
            Language::Python => Scanner::Python(PythonScanner::new(code, start)),
            Language::JavaScript => Scanner::JavaScript(JavaScriptScanner::new(code, start)),
            Language::Json => Scanner::Json(JsonScanner::new(code, start)),
            Language::Html => Scanner::Html(HtmlScanner::new(code, start)),
            Language::Markdown => Scanner::Markdown(MarkdownScanner::new(code, start)),
            Language::Rust => Scanner::Rust(RustScanner::new(code, start)),
            Language::Go => Scanner::Go(GoScanner::new(code, start)),
        }
    }

    /// Positioned tokens for the whole input with the default config.
    pub fn tokenize(self, code: &str) -> Tokens<'_, Scanner<'_>> {
        self.tokenize_with(code, 0..code.len(), &LexerConfig::default())
    }

    /// Positioned tokens for `code[range]`.
    ///
    /// An out-of-bounds range, or one that splits a character, is clamped
    /// down to the nearest valid boundaries. Line and column are relative
    /// to the range start.
    pub fn tokenize_with<'a>(
        self,
        code: &'a str,
        range: Range<usize>,
        config: &LexerConfig,
    ) -> Tokens<'a, Scanner<'a>> {
        let range = clamp_range(code, range);
        let scanner = self.scanner(code, range.clone());
        Tokens::new(scanner, &code[..range.end], range.start, config)
    }

    /// `(type, text)` pairs for the whole input, without positions.
    pub fn tokenize_fast(self, code: &str) -> FastTokens<'_, Scanner<'_>> {
        self.tokenize_fast_range(code, 0..code.len())
    }

    /// `(type, text)` pairs for `code[range]`, clamped like
    /// [`Language::tokenize_with`].
    pub fn tokenize_fast_range(
        self,
        code: &str,
        range: Range<usize>,
    ) -> FastTokens<'_, Scanner<'_>> {
        let range = clamp_range(code, range);
        let scanner = self.scanner(code, range.clone());
        FastTokens::new(scanner, &code[..range.end], range.start)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scanner of one language, dispatched by variant.
pub enum Scanner<'a> {
    Python(PythonScanner<'a>),
    JavaScript(JavaScriptScanner<'a>),
    Json(JsonScanner<'a>),
    Html(HtmlScanner<'a>),
    Markdown(MarkdownScanner<'a>),
    Rust(RustScanner<'a>),
    Go(GoScanner<'a>),
}

impl Iterator for Scanner<'_> {
    type Item = Lexeme;

    #[inline]
    fn next(&mut self) -> Option<Lexeme> {
        match self {
            Scanner::Python(s) => s.next(),
            Scanner::JavaScript(s) => s.next(),
            Scanner::Json(s) => s.next(),
            Scanner::Html(s) => s.next(),
            Scanner::Markdown(s) => s.next(),
            Scanner::Rust(s) => s.next(),
            Scanner::Go(s) => s.next(),
        }
    }
}

/// Clamp `range` into `code` and down to char boundaries, keeping
/// `start <= end`.
pub fn clamp_range(code: &str, range: Range<usize>) -> Range<usize> {
    let end = floor_char_boundary(code, range.end.min(code.len()));
    let start = floor_char_boundary(code, range.start.min(end));
    if start != range.start || end != range.end {
        tracing::debug!(
            requested = ?range,
            clamped = ?(start..end),
            len = code.len(),
            "range clamped to input"
        );
    }
    start..end
}

fn floor_char_boundary(code: &str, mut pos: usize) -> usize {
    while !code.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
