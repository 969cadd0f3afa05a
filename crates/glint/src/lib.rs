//! Syntax-highlighting tokenizer.
//!
//! `glint` turns source text in one of a fixed set of languages into a
//! stream of classified tokens. Every scanner is hand-written and runs in
//! time linear in its input; there are no regular expressions anywhere, so
//! no input can trigger catastrophic backtracking.
//!
//! ```
//! use glint::{Highlighter, TokenType};
//!
//! let highlighter = Highlighter::new();
//! let tokens = highlighter.tokenize("def foo(): pass", "python").unwrap();
//! assert_eq!(tokens[0].kind, TokenType::KeywordDeclaration);
//! assert_eq!(tokens.iter().map(|t| t.value).collect::<String>(), "def foo(): pass");
//! ```
//!
//! # Layers
//!
//! - `glint_lexer_core`: token model and scanning primitives;
//! - `glint_lexers`: per-language scanners, [`Language`] and [`Registry`];
//! - this crate: [`Highlighter`], batch tokenization, the [`Formatter`]
//!   boundary and the [`RangeTokenizer`] handoff.

use std::sync::Once;

mod delegate;
mod formatter;
mod highlighter;
mod parallel;

pub use delegate::RangeTokenizer;
pub use formatter::{Formatter, NullFormatter};
pub use glint_lexers::{
    FastTokens, Language, LanguageInfo, LexerConfig, LookupError, Registry, Scanner, Token,
    TokenType, Tokens,
};
pub use highlighter::Highlighter;
pub use parallel::BatchConfig;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only the first call has any
/// effect. Enable with `RUST_LOG=glint=debug` or `RUST_LOG=glint_lexers=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
