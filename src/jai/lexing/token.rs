//! Public token types produced by the [Tokenizer](super::Tokenizer).

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Classification of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A word from the keyword table, `if` or `struct` for example.
    Keyword,
    /// A word from the builtin table, such as `cast` or `size_of`.
    Builtin,
    /// `null`, `true`, `false`, and `'x` style literals.
    Constant,
    /// A built-in type name (`s64`, `string`) or a type sigil (`^Node`, `$T`, `$$`).
    TypeName,
    Identifier,
    /// Integer, float or hex literal including its suffix, `1.5e-3f32` for example.
    Number,
    /// A double-quoted literal. May span lines.
    String,
    /// A `'x` literal, only when configured with [CharLiteralKind::CharLiteral].
    ///
    /// [CharLiteralKind::CharLiteral]: super::CharLiteralKind::CharLiteral
    CharLiteral,
    /// `//` to the end of the line, newline excluded.
    LineComment,
    /// A `/* */` comment including any nested comments.
    BlockComment,
    /// `#run`, `#import` and friends.
    Directive,
    /// `@note` style annotations.
    AtDirective,
    /// A single operator character.
    Operator,
    /// Brackets and any other single non-word character.
    Punctuation,
    Whitespace,
}

impl TokenKind {
    /// Stable name used in text and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::Constant => "constant",
            TokenKind::TypeName => "type-name",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::CharLiteral => "char-literal",
            TokenKind::LineComment => "line-comment",
            TokenKind::BlockComment => "block-comment",
            TokenKind::Directive => "directive",
            TokenKind::AtDirective => "at-directive",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
        }
    }

    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of source text.
///
/// Offsets are byte offsets into the tokenized buffer and `line` is 1-based. For windowed
/// tokenization (see [Tokenizer::with_origin](super::Tokenizer::with_origin)) both are
/// relative to the enclosing buffer, while `text` is always the token's own slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// True for a punctuation token consisting of exactly `c`.
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation && self.is_char(c)
    }

    /// True for an operator token consisting of exactly `c`.
    pub fn is_operator(&self, c: char) -> bool {
        self.kind == TokenKind::Operator && self.is_char(c)
    }

    fn is_char(&self, c: char) -> bool {
        let mut chars = self.text.chars();
        chars.next() == Some(c) && chars.next().is_none()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{}..{} {} {:?}",
            self.line, self.start, self.end, self.kind, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, text: &str) -> Token<'_> {
        Token {
            kind,
            text,
            start: 0,
            end: text.len(),
            line: 1,
        }
    }

    #[test]
    fn test_token_predicates() {
        assert!(token(TokenKind::Punctuation, "{").is_punct('{'));
        assert!(!token(TokenKind::Punctuation, "{").is_punct('('));
        assert!(!token(TokenKind::String, "{").is_punct('{'));
        assert!(token(TokenKind::Operator, ":").is_operator(':'));
        assert!(token(TokenKind::BlockComment, "/**/").is_trivia());
        assert!(!token(TokenKind::Identifier, "x").is_trivia());
    }

    #[test]
    fn test_display() {
        let t = Token {
            kind: TokenKind::Keyword,
            text: "if",
            start: 4,
            end: 6,
            line: 2,
        };
        assert_eq!(t.to_string(), "2:4..6 keyword \"if\"");
        assert_eq!(t.span(), 4..6);
    }
}
