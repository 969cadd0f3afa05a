//! Token model and scanning primitives for glint.
//!
//! This crate has no `glint_*` dependencies: formatters, editors and other
//! tools can consume the token model without pulling in any language
//! scanner. It provides:
//!
//! - [`TokenType`], [`Token`] and the raw [`Lexeme`] scanners emit;
//! - the [`scan`] primitives and [`ByteSet`] classes scanners are built from;
//! - [`Cursor`], a bounded byte cursor over `&str`;
//! - [`Tokens`] / [`FastTokens`], which turn lexemes into token streams.
//!
//! # Guarantees
//!
//! Every scanner built on these pieces upholds the same contract: token
//! values are slices of the input whose concatenation reproduces it, no
//! token is empty, positions are 1-based, and the work done is linear in
//! the input length.

pub mod charset;
mod config;
mod cursor;
mod position;
pub mod scan;
mod stream;
mod token;
mod token_type;

pub use charset::ByteSet;
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use position::LineTracker;
pub use stream::{FastTokens, Tokens};
pub use token::{Lexeme, Token};
pub use token_type::TokenType;
