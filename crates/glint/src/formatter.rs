//! Boundary to output renderers.
//!
//! Rendering (HTML, ANSI, themes) lives outside this crate. A renderer
//! implements [`Formatter`] and receives tokens as they are scanned, so no
//! intermediate token list is built.

use glint_lexers::{Token, TokenType};

/// Renders a token stream by appending to a `String`.
pub trait Formatter: Send + Sync {
    /// Short registry-style name (`"html"`, `"null"`).
    fn name(&self) -> &'static str;

    /// Render positioned tokens.
    fn format<'a>(&self, tokens: &mut dyn Iterator<Item = Token<'a>>, out: &mut String);

    /// Render `(type, text)` pairs; used when no positions are needed.
    fn format_fast<'a>(
        &self,
        tokens: &mut dyn Iterator<Item = (TokenType, &'a str)>,
        out: &mut String,
    );
}

/// Writes token values back unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn name(&self) -> &'static str {
        "null"
    }

    fn format<'a>(&self, tokens: &mut dyn Iterator<Item = Token<'a>>, out: &mut String) {
        for token in tokens {
            out.push_str(token.value);
        }
    }

    fn format_fast<'a>(
        &self,
        tokens: &mut dyn Iterator<Item = (TokenType, &'a str)>,
        out: &mut String,
    ) {
        for (_, value) in tokens {
            out.push_str(value);
        }
    }
}
