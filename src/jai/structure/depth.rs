//! Nesting depth table
//!
//! Folds a token stream into the `{`/`(` depth before every token. Only punctuation tokens
//! count, so brackets inside strings, character literals and comments never move the depth.
//! A closer at depth zero is ignored rather than driving the depth negative.

use crate::jai::lexing::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Open,
    Close,
}

/// Classify a token as a depth-changing bracket.
pub fn bracket(token: &Token) -> Option<Bracket> {
    if token.is_punct('{') || token.is_punct('(') {
        Some(Bracket::Open)
    } else if token.is_punct('}') || token.is_punct(')') {
        Some(Bracket::Close)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthTable {
    starts: Vec<usize>,
    /// `before[i]` is the depth just before token `i`; the last entry is the depth at the end.
    before: Vec<usize>,
}

impl DepthTable {
    pub fn new(tokens: &[Token]) -> Self {
        let mut starts = Vec::with_capacity(tokens.len());
        let mut before = Vec::with_capacity(tokens.len() + 1);
        let mut depth = 0usize;

        for token in tokens {
            starts.push(token.start);
            before.push(depth);
            depth = match bracket(token) {
                Some(Bracket::Open) => depth + 1,
                Some(Bracket::Close) => depth.saturating_sub(1),
                None => depth,
            };
        }
        before.push(depth);

        DepthTable { starts, before }
    }

    /// Index of the first token starting at or after `position`.
    pub fn index_at(&self, position: usize) -> usize {
        self.starts.partition_point(|&start| start < position)
    }

    /// Depth at `position`: the effect of every token that starts before it.
    pub fn depth_at(&self, position: usize) -> usize {
        self.before[self.index_at(position)]
    }

    pub fn before(&self, index: usize) -> usize {
        self.before[index.min(self.before.len() - 1)]
    }

    pub fn after(&self, index: usize) -> usize {
        self.before(index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jai::lexing::tokenize;

    fn table(source: &str) -> DepthTable {
        let tokens: Vec<_> = tokenize(source).collect();
        DepthTable::new(&tokens)
    }

    #[test]
    fn test_depth_in_body() {
        let source = "f :: (x: int) { return x; }";
        let depths = table(source);
        assert_eq!(depths.depth_at(0), 0);
        assert_eq!(depths.depth_at(source.find("x:").unwrap()), 1);
        assert_eq!(depths.depth_at(source.find("return").unwrap()), 1);
        assert_eq!(depths.depth_at(source.len()), 0);
    }

    #[test]
    fn test_brackets_in_strings_and_comments_ignored() {
        let source = "f :: () { s := \"}\"; /* } */ // }\n c := 'x; }";
        let depths = table(source);
        let before_last_brace = source.rfind('}').unwrap();
        assert_eq!(depths.depth_at(before_last_brace), 1);
    }

    #[test]
    fn test_unbalanced_closers_clamp_at_zero() {
        let source = ")) } { x";
        let depths = table(source);
        assert_eq!(depths.depth_at(source.find('{').unwrap()), 0);
        assert_eq!(depths.depth_at(source.len()), 1);
    }

    #[test]
    fn test_square_brackets_do_not_count() {
        let depths = table("a[ [ b");
        assert_eq!(depths.depth_at(6), 0);
    }

    #[test]
    fn test_empty() {
        let depths = table("");
        assert_eq!(depths.depth_at(0), 0);
        assert_eq!(depths.depth_at(10), 0);
    }
}
