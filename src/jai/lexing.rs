//! Lexer
//!
//! This module turns JAI source text into classified tokens.
//!
//! Structure:
//!     Raw tokenization is done by the logos lexer in [tokens_core]. The regular parts of the
//!     language (whitespace, words, directives, single-character symbols) are plain logos
//!     patterns; the parts that need counting or lookahead (nested block comments, strings,
//!     numbers with exponents and suffixes) are logos callbacks that consume the rest of the
//!     lexeme by hand.
//!
//!     The [Tokenizer] then maps raw tokens onto the public [TokenKind] set: words are looked
//!     up in the [Vocabulary] tables, symbols are split into operators and punctuation, and
//!     unterminated or malformed literals are recorded as [Diagnostic]s.
//!
//! Coverage
//!
//!     Every byte of the input belongs to exactly one token, whitespace included. Concatenating
//!     the token texts in order gives back the input (see [detokenize]). Consumers that only
//!     care about code skip trivia with [Token::is_trivia].
//!
//! Error policy
//!
//!     The lexer never fails. Unterminated strings and block comments run to the end of the
//!     input and are closed there; the problem is reported as a diagnostic next to the tokens.

pub mod detokenizer;
pub mod diagnostics;
pub mod token;
pub mod tokenizer;
pub mod tokens_core;
pub mod vocabulary;

pub use detokenizer::{detokenize, is_contiguous};
pub use diagnostics::Diagnostic;
pub use token::{Token, TokenKind};
pub use tokenizer::{CharLiteralKind, LexOptions, Lexed, Tokenizer};
pub use vocabulary::Vocabulary;

/// Lazily tokenize `source` with the built-in JAI vocabulary.
///
/// The returned iterator can be collected directly or drained while inspecting
/// [Tokenizer::diagnostics].
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

/// Tokenize the whole of `source`, collecting tokens and diagnostics.
pub fn lex(source: &str) -> Lexed<'_> {
    Tokenizer::new(source).finish()
}
