//! Implementation of the JAI tokenizer
//!
//! [Tokenizer] wraps the logos lexer over [RawToken] and refines each raw token into a
//! positioned, classified [Token]. It is an iterator, so tokens are produced on demand and a
//! caller can stop early; diagnostics found so far are available at any point.

use super::diagnostics::Diagnostic;
use super::token::{Token, TokenKind};
use super::tokens_core::{Closure, NumberForm, RawToken};
use super::vocabulary::{Vocabulary, JAI};
use logos::Logos;
use serde::Deserialize;

/// How `'x` literals are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharLiteralKind {
    /// As [TokenKind::Constant], the way the JAI highlighting rules treat them.
    #[default]
    Constant,
    /// As [TokenKind::CharLiteral].
    CharLiteral,
}

/// Knobs for the tokenizer that do not change token boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub char_literals: CharLiteralKind,
}

/// Characters lexed as [TokenKind::Operator]; every other symbol is punctuation.
const OPERATORS: &[char] = &[
    ':', '+', '-', '%', '&', '|', '^', '!', '$', '=', '<', '>', '?', '*', '/', '.', '~',
];

/// Token iterator over JAI source text.
pub struct Tokenizer<'a> {
    lexer: logos::Lexer<'a, RawToken>,
    vocabulary: &'a Vocabulary,
    options: LexOptions,
    origin: usize,
    line: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_origin(source, 0, 1)
    }

    /// Tokenize a window of a larger buffer. `offset` and `line` are the position of the
    /// window's first byte in that buffer; token offsets and lines are reported relative to
    /// the buffer rather than the window.
    pub fn with_origin(source: &'a str, offset: usize, line: usize) -> Self {
        Tokenizer {
            lexer: RawToken::lexer(source),
            vocabulary: &JAI,
            options: LexOptions::default(),
            origin: offset,
            line,
            diagnostics: Vec::new(),
        }
    }

    pub fn vocabulary(mut self, vocabulary: &'a Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn options(mut self, options: LexOptions) -> Self {
        self.options = options;
        self
    }

    /// Diagnostics for the tokens produced so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drain the remaining tokens.
    pub fn finish(mut self) -> Lexed<'a> {
        let tokens: Vec<_> = self.by_ref().collect();
        Lexed {
            tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn classify(&mut self, raw: RawToken, text: &str, start: usize, end: usize) -> TokenKind {
        match raw {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::BlockComment(closure) => {
                self.check_closure(closure, TokenKind::BlockComment, start)
            }
            RawToken::String(closure) => self.check_closure(closure, TokenKind::String, start),
            RawToken::CharLiteral => match self.options.char_literals {
                CharLiteralKind::Constant => TokenKind::Constant,
                CharLiteralKind::CharLiteral => TokenKind::CharLiteral,
            },
            RawToken::Directive => TokenKind::Directive,
            RawToken::AtDirective => TokenKind::AtDirective,
            RawToken::Number(form) => {
                if form == NumberForm::MalformedSuffix {
                    self.diagnostics
                        .push(Diagnostic::MalformedNumberSuffix { start, end });
                }
                TokenKind::Number
            }
            RawToken::Word => self.vocabulary.classify(text),
            RawToken::TypeSigil => TokenKind::TypeName,
            RawToken::Symbol => classify_symbol(text),
        }
    }

    fn check_closure(&mut self, closure: Closure, kind: TokenKind, start: usize) -> TokenKind {
        if closure == Closure::Unterminated {
            self.diagnostics
                .push(Diagnostic::UnterminatedLiteral { kind, start });
        }
        kind
    }
}

fn classify_symbol(text: &str) -> TokenKind {
    match text.chars().next() {
        Some(c) if OPERATORS.contains(&c) => TokenKind::Operator,
        _ => TokenKind::Punctuation,
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let result = self.lexer.next()?;
        let span = self.lexer.span();
        let text = self.lexer.slice();
        let start = self.origin + span.start;
        let end = self.origin + span.end;

        // Every input byte is covered by some pattern; an error here can only be a
        // character logos gave up on, which is kept as punctuation.
        let kind = match result {
            Ok(raw) => self.classify(raw, text, start, end),
            Err(_) => TokenKind::Punctuation,
        };

        let token = Token {
            kind,
            text,
            start,
            end,
            line: self.line,
        };
        self.line += text.bytes().filter(|&b| b == b'\n').count();
        Some(token)
    }
}

/// Fully tokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexed<'a> {
    /// Tokens that are neither whitespace nor comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'a>> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }

    /// The tokens, or the first diagnostic if there was any.
    pub fn into_result(self) -> Result<Vec<Token<'a>>, Diagnostic> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(diagnostic),
            None => Ok(self.tokens),
        }
    }
}
