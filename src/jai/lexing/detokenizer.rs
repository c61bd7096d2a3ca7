//! Detokenizer for JAI token streams
//!
//! Tokens keep their source slices, so detokenizing is concatenation. It is mostly useful for
//! checking that a token stream covers its input with no gaps or overlaps.
use super::token::Token;

/// Concatenate the token texts in order.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        result.push_str(token.text);
    }
    result
}

/// True when each token starts exactly where the previous one ended and every token's text
/// matches its span length.
pub fn is_contiguous(tokens: &[Token]) -> bool {
    tokens.iter().all(|t| t.end - t.start == t.text.len())
        && tokens.windows(2).all(|pair| pair[0].end == pair[1].start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jai::lexing::tokenize;
    use rstest::rstest;

    #[rstest]
    #[case("main :: () {\n    print(\"hi\\n\");\n}\n")]
    #[case("/* a /* b */ c */ x := 0xFF;")]
    #[case("// trailing comment without newline")]
    #[case("s := \"unterminated")]
    #[case("  \t\r\n")]
    #[case("é := 'λ;")]
    fn test_roundtrip(#[case] source: &str) {
        let tokens: Vec<_> = tokenize(source).collect();
        assert!(is_contiguous(&tokens));
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_gap_is_detected() {
        let mut tokens: Vec<_> = tokenize("a b").collect();
        tokens.remove(1);
        assert!(!is_contiguous(&tokens));
        assert_eq!(detokenize(&tokens), "ab");
    }
}
