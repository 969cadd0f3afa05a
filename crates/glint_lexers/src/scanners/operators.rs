//! Symbolic operators with maximal munch.

use glint_lexer_core::TokenType;

use super::Scanned;

/// Operator spellings of a language, grouped by length.
#[derive(Clone, Copy, Debug)]
pub struct OperatorConfig {
    pub four: &'static [&'static str],
    pub three: &'static [&'static str],
    pub two: &'static [&'static str],
    pub one: &'static [u8],
}

impl OperatorConfig {
    /// Longest operator at `pos`.
    pub fn try_operator(&self, code: &str, pos: usize) -> Option<Scanned> {
        let rest = code.as_bytes().get(pos..)?;
        let matches = |ops: &[&str]| ops.iter().any(|op| rest.starts_with(op.as_bytes()));
        let len = if matches(self.four) {
            4
        } else if matches(self.three) {
            3
        } else if matches(self.two) {
            2
        } else if rest.first().is_some_and(|b| self.one.contains(b)) {
            1
        } else {
            return None;
        };
        Some(Scanned::new(TokenType::Operator, pos + len))
    }
}
