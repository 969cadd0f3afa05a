//! Per-language scanners.
//!
//! Each scanner is a lazy `Iterator<Item = Lexeme>` over `code[..end]`
//! starting at a byte offset. Scanners hold only per-call state and are
//! built fresh for every tokenize call.

mod go;
mod html;
mod javascript;
mod json;
mod markdown;
mod python;
mod rust;

pub use go::GoScanner;
pub use html::HtmlScanner;
pub use javascript::JavaScriptScanner;
pub use json::JsonScanner;
pub use markdown::MarkdownScanner;
pub use python::PythonScanner;
pub use rust::RustScanner;
