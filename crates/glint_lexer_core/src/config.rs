//! Per-call tokenizer options.

/// Options that shape a token stream without changing how text is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Drop horizontal whitespace that ends a line (and whitespace ending
    /// the range) from whitespace tokens.
    ///
    /// Remaining token values are still slices of the input, but their
    /// concatenation no longer reproduces it.
    pub strip_whitespace: bool,
    /// Tab stop width used for column numbers. Values below 1 act as 1.
    pub tab_size: u32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strip_whitespace: false,
            tab_size: 4,
        }
    }
}
