//! Raw token definitions for the JAI lexer
//!
//! These are the tokens produced directly by the logos lexer. They are deliberately coarse:
//! every word is a [RawToken::Word] and every non-word symbol is a [RawToken::Symbol]. The
//! [Tokenizer](super::Tokenizer) refines them into the public [TokenKind](super::TokenKind)s.
//!
//! Word characters are ASCII letters, digits and `_`, plus any non-ASCII character, so that
//! `_foo` and `foo_bar` lex as single words.
use logos::{Lexer, Logos};

/// Whether a delimited literal found its closing delimiter before the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    Closed,
    Unterminated,
}

/// Shape of a number literal's tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberForm {
    Clean,
    /// `0x` without hex digits, or an exponent marker without digits.
    MalformedSuffix,
}

/// All raw tokens in JAI source
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment(Closure),

    #[token("\"", string_literal)]
    String(Closure),

    // `'` followed by exactly one word character
    #[regex(r"'[A-Za-z0-9_\x{80}-\x{10FFFF}]")]
    CharLiteral,

    #[regex(r"#[A-Za-z0-9_\x{80}-\x{10FFFF}]+")]
    Directive,

    #[regex(r"@[A-Za-z0-9_\x{80}-\x{10FFFF}]+")]
    AtDirective,

    // The first digit triggers the callback, which consumes the rest.
    #[regex(r"[0-9]", number)]
    Number(NumberForm),

    #[regex(r"[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    Word,

    // `^T`, `$T`, `$$T` and bare `$$`
    #[regex(r"\^[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    #[regex(r"\$\$?[A-Za-z_\x{80}-\x{10FFFF}][A-Za-z0-9_\x{80}-\x{10FFFF}]*")]
    #[token("$$")]
    TypeSigil,

    // Any single ASCII character not covered above. `"` always opens a string.
    #[regex(r#"[^ \t\r\n\x0C0-9A-Za-z_\x{80}-\x{10FFFF}"]"#)]
    Symbol,
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Byte length of the run of word characters at the start of `s`.
fn word_len(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(s.len(), |(i, _)| i)
}

/// Consumes a block comment body after the opening `/*`, honoring nesting.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Closure {
    let rest = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i < rest.len() {
        match (rest[i], rest.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return Closure::Closed;
                }
            }
            _ => i += 1,
        }
    }

    lex.bump(rest.len());
    Closure::Unterminated
}

/// Consumes a string body after the opening quote, up to and including the next
/// unescaped `"`. Strings may span lines.
fn string_literal(lex: &mut Lexer<'_, RawToken>) -> Closure {
    let rest = lex.remainder();
    let mut escaped = false;

    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                lex.bump(i + 1);
                return Closure::Closed;
            }
            _ => {}
        }
    }

    lex.bump(rest.len());
    Closure::Unterminated
}

/// Consumes the rest of a number after its first digit: hex or decimal digits, an optional
/// fraction and exponent, then an optional suffix word.
fn number(lex: &mut Lexer<'_, RawToken>) -> NumberForm {
    let leading_zero = lex.slice() == "0";
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let digits = |from: usize, hex: bool| {
        let mut i = from;
        while i < bytes.len()
            && (bytes[i] == b'_'
                || if hex {
                    bytes[i].is_ascii_hexdigit()
                } else {
                    bytes[i].is_ascii_digit()
                })
        {
            i += 1;
        }
        i
    };

    let mut form = NumberForm::Clean;
    let mut i;

    if leading_zero && matches!(bytes.first(), Some(b'x' | b'X')) {
        i = digits(1, true);
        if i == 1 {
            form = NumberForm::MalformedSuffix;
        }
    } else {
        i = digits(0, false);
        if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            i = digits(i + 1, false);
        }
        if matches!(bytes.get(i), Some(b'e' | b'E')) {
            let mut j = i + 1;
            if matches!(bytes.get(j), Some(b'+' | b'-')) {
                j += 1;
            }
            if bytes.get(j).is_some_and(u8::is_ascii_digit) {
                i = digits(j, false);
            } else if j > i + 1 || !rest[i + 1..].starts_with(is_word_char) {
                // `1e`, `1e+` and friends: the marker stays in the suffix.
                form = NumberForm::MalformedSuffix;
            }
        }
    }

    i += word_len(&rest[i..]);
    lex.bump(i);
    form
}
