//! Hand-written, linear-time scanners for every language glint supports.
//!
//! Scanners are built from the shared fragments in [`scanners`] (comments,
//! numbers, strings, interpolation, operators) and the primitives in
//! [`glint_lexer_core`]. None of them use regular expressions; each one
//! visits every input byte a bounded number of times.
//!
//! The public surface is small:
//!
//! - [`Language`], a `Copy` tag with metadata and tokenize entry points;
//! - [`Registry`], the case-insensitive name/alias table;
//! - the concrete scanners in [`languages`] for callers that want lexemes.

mod language;
pub mod languages;
mod registry;
pub mod scanners;

pub use glint_lexer_core::{FastTokens, Lexeme, LexerConfig, Token, TokenType, Tokens};
pub use language::{clamp_range, Language, LanguageInfo, Scanner};
pub use registry::{LookupError, Registry};
