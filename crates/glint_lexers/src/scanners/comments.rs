//! Line and block comments.

use glint_lexer_core::scan::{scan_block_comment, scan_line_comment, scan_nested_block_comment};
use glint_lexer_core::TokenType;

use super::Scanned;

/// Comment syntax of a language.
#[derive(Clone, Copy, Debug)]
pub struct CommentConfig {
    /// Markers that start a comment running to the end of the line.
    pub line: &'static [&'static str],
    /// Opening and closing block comment markers.
    pub block: Option<(&'static str, &'static str)>,
    /// Block comments nest (`/* /* */ */` is one comment).
    pub nested: bool,
}

impl CommentConfig {
    /// `//` and `/* */`.
    pub const C_STYLE: CommentConfig = CommentConfig {
        line: &["//"],
        block: Some(("/*", "*/")),
        nested: false,
    };

    /// `//` and nesting `/* */`.
    pub const NESTED_C_STYLE: CommentConfig = CommentConfig {
        nested: true,
        ..Self::C_STYLE
    };

    /// `#` to end of line.
    pub const HASH: CommentConfig = CommentConfig {
        line: &["#"],
        block: None,
        nested: false,
    };

    /// Unterminated block comments run to the end of the input.
    pub fn try_comment(&self, code: &str, pos: usize) -> Option<Scanned> {
        let rest = code.as_bytes().get(pos..)?;
        if let Some((open, close)) = self.block {
            if rest.starts_with(open.as_bytes()) {
                let body = pos + open.len();
                let end = if self.nested {
                    scan_nested_block_comment(code, body, open, close)
                } else {
                    scan_block_comment(code, body, close)
                };
                return Some(Scanned::new(TokenType::CommentMultiline, end));
            }
        }
        self.line
            .iter()
            .any(|marker| rest.starts_with(marker.as_bytes()))
            .then(|| Scanned::new(TokenType::CommentSingle, scan_line_comment(code, pos)))
    }
}
