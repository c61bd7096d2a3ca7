//! Non-fatal lexer diagnostics.
//!
//! The lexer always produces tokens; these record where it had to guess. Callers that want
//! strict validation can turn the first one into an error with
//! [Lexed::into_result](super::Lexed::into_result).

use super::token::TokenKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "diagnostic", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A string or block comment still open at end of input. The token was closed there.
    #[error("unterminated {kind} starting at offset {start}")]
    UnterminatedLiteral { kind: TokenKind, start: usize },

    /// A number whose tail could not be read as a fraction, exponent or hex digits.
    #[error("malformed number suffix at {start}..{end}")]
    MalformedNumberSuffix { start: usize, end: usize },
}

impl Diagnostic {
    /// Offset where the offending token starts.
    pub fn offset(&self) -> usize {
        match self {
            Diagnostic::UnterminatedLiteral { start, .. }
            | Diagnostic::MalformedNumberSuffix { start, .. } => *start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let unterminated = Diagnostic::UnterminatedLiteral {
            kind: TokenKind::BlockComment,
            start: 3,
        };
        assert_eq!(
            unterminated.to_string(),
            "unterminated block-comment starting at offset 3"
        );
        assert_eq!(unterminated.offset(), 3);

        let malformed = Diagnostic::MalformedNumberSuffix { start: 0, end: 2 };
        assert_eq!(malformed.to_string(), "malformed number suffix at 0..2");
    }
}
