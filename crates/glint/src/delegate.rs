//! Zero-copy range handoff.
//!
//! A host that already holds a document (a Markdown renderer with fenced
//! code blocks, say) hands a byte range and a language name to a
//! [`RangeTokenizer`] and gets back tokens borrowing its own buffer.

use glint_lexers::{LookupError, Scanner, Tokens};

/// Tokenizes byte ranges of a caller-owned buffer.
pub trait RangeTokenizer {
    /// Lazy tokens for `source[start..end]`, positioned from the range
    /// start. Work is proportional to `end - start`.
    fn tokenize_range<'a>(
        &self,
        source: &'a str,
        start: usize,
        end: usize,
        language: &str,
    ) -> Result<Tokens<'a, Scanner<'a>>, LookupError>;

    fn supports_language(&self, language: &str) -> bool;
}
