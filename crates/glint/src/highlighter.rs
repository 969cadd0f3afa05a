//! High-level entry points.

use std::ops::Range;

use glint_lexers::{FastTokens, Language, LexerConfig, LookupError, Registry, Scanner, Token, Tokens};

use crate::delegate::RangeTokenizer;
use crate::formatter::Formatter;
use crate::parallel::{map_batch, BatchConfig};

/// Resolves language names and runs scanners.
///
/// Holds an immutable [`Registry`] and a [`BatchConfig`]; it is `Send +
/// Sync` and meant to be built once and shared.
#[derive(Clone, Debug, Default)]
pub struct Highlighter {
    registry: Registry,
    batch: BatchConfig,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_batch_config(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn batch_config(&self) -> &BatchConfig {
        &self.batch
    }

    /// Resolve a language name or alias.
    pub fn language(&self, name: &str) -> Result<Language, LookupError> {
        self.registry.get(name)
    }

    /// All tokens of `code`.
    #[tracing::instrument(level = "debug", skip(self, code), fields(len = code.len()))]
    pub fn tokenize<'a>(
        &self,
        code: &'a str,
        language: &str,
    ) -> Result<Vec<Token<'a>>, LookupError> {
        Ok(self.language(language)?.tokenize(code).collect())
    }

    /// Lazy tokens for `code[range]` with explicit options.
    ///
    /// The range is clamped to the input and to char boundaries.
    #[tracing::instrument(level = "debug", skip(self, code, config), fields(len = code.len()))]
    pub fn tokenize_with<'a>(
        &self,
        code: &'a str,
        language: &str,
        range: Range<usize>,
        config: &LexerConfig,
    ) -> Result<Tokens<'a, Scanner<'a>>, LookupError> {
        Ok(self.language(language)?.tokenize_with(code, range, config))
    }

    /// Lazy `(type, text)` pairs without position tracking.
    pub fn tokenize_fast<'a>(
        &self,
        code: &'a str,
        language: &str,
    ) -> Result<FastTokens<'a, Scanner<'a>>, LookupError> {
        Ok(self.language(language)?.tokenize_fast(code))
    }

    /// Render `code` through `formatter`.
    #[tracing::instrument(
        level = "debug",
        skip(self, code, formatter),
        fields(len = code.len(), formatter = formatter.name())
    )]
    pub fn highlight(
        &self,
        code: &str,
        language: &str,
        formatter: &dyn Formatter,
    ) -> Result<String, LookupError> {
        let language = self.language(language)?;
        Ok(render(code, language, 0..code.len(), formatter))
    }

    /// Render `code[range]` through `formatter`.
    ///
    /// The range is clamped like [`Highlighter::tokenize_with`].
    #[tracing::instrument(
        level = "debug",
        skip(self, code, formatter),
        fields(len = code.len(), formatter = formatter.name())
    )]
    pub fn highlight_range(
        &self,
        code: &str,
        language: &str,
        range: Range<usize>,
        formatter: &dyn Formatter,
    ) -> Result<String, LookupError> {
        let language = self.language(language)?;
        Ok(render(code, language, range, formatter))
    }

    /// Tokenize `(code, language)` pairs, in parallel for large batches.
    ///
    /// Every language is resolved before any work starts, so one unknown
    /// name fails the whole batch.
    #[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
    pub fn tokenize_many<'a>(
        &self,
        items: &[(&'a str, &str)],
    ) -> Result<Vec<Vec<Token<'a>>>, LookupError> {
        let jobs = self.resolve_all(items)?;
        Ok(map_batch(&jobs, &self.batch, |&(code, language)| {
            language.tokenize(code).collect()
        }))
    }

    /// Render `(code, language)` pairs, in parallel for large batches.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(items = items.len(), formatter = formatter.name())
    )]
    pub fn highlight_many(
        &self,
        items: &[(&str, &str)],
        formatter: &dyn Formatter,
    ) -> Result<Vec<String>, LookupError> {
        let jobs = self.resolve_all(items)?;
        Ok(map_batch(&jobs, &self.batch, |&(code, language)| {
            render(code, language, 0..code.len(), formatter)
        }))
    }

    fn resolve_all<'a>(
        &self,
        items: &[(&'a str, &str)],
    ) -> Result<Vec<(&'a str, Language)>, LookupError> {
        items
            .iter()
            .map(|&(code, name)| Ok((code, self.language(name)?)))
            .collect()
    }
}

impl RangeTokenizer for Highlighter {
    fn tokenize_range<'a>(
        &self,
        source: &'a str,
        start: usize,
        end: usize,
        language: &str,
    ) -> Result<Tokens<'a, Scanner<'a>>, LookupError> {
        self.tokenize_with(source, language, start..end, &LexerConfig::default())
    }

    fn supports_language(&self, language: &str) -> bool {
        self.registry.supports(language)
    }
}

fn render(
    code: &str,
    language: Language,
    range: Range<usize>,
    formatter: &dyn Formatter,
) -> String {
    let mut tokens = language.tokenize_fast_range(code, range);
    let mut out = String::with_capacity(code.len());
    formatter.format_fast(&mut tokens, &mut out);
    out
}

#[cfg(test)]
mod tests;
