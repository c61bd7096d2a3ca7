//! Structure scanner
//!
//! Tokenizes the text once, folds the tokens into a [DepthTable] and indexes the lines. All
//! queries are answered from those three tables; nothing re-scans raw characters, so brackets
//! in strings and comments can never confuse a query.

use super::boundary::{BoundarySearch, ProcedureBoundary};
use super::depth::DepthTable;
use super::lines::LineIndex;
use crate::jai::lexing::{Diagnostic, Lexed, Token, Tokenizer};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StructureScanner<'a> {
    text: &'a str,
    tokens: Vec<Token<'a>>,
    diagnostics: Vec<Diagnostic>,
    depths: DepthTable,
    lines: LineIndex,
}

impl<'a> StructureScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::from_lexed(text, Tokenizer::new(text).finish())
    }

    /// Build from tokens produced elsewhere, e.g. with a custom vocabulary. The tokens must
    /// come from tokenizing all of `text` from offset zero.
    pub fn from_lexed(text: &'a str, lexed: Lexed<'a>) -> Self {
        let depths = DepthTable::new(&lexed.tokens);
        let lines = LineIndex::new(text);
        debug!(
            tokens = lexed.tokens.len(),
            lines = lines.line_count(),
            diagnostics = lexed.diagnostics.len(),
            "scanned structure"
        );
        StructureScanner {
            text,
            tokens: lexed.tokens,
            diagnostics: lexed.diagnostics,
            depths,
            lines,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn depths(&self) -> &DepthTable {
        &self.depths
    }

    pub fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    /// 1-based line containing `position`.
    pub fn line_of(&self, position: usize) -> usize {
        self.lines.line_of(position)
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.lines.line_start(line)
    }

    /// Text of `line` without its trailing newline.
    pub fn line_text(&self, line: usize) -> &'a str {
        let text = self.text;
        &text[self.lines.range(line)]
    }

    /// `{`/`(` nesting depth at `position`, ignoring brackets in strings and comments.
    pub fn depth_at(&self, position: usize) -> usize {
        self.depths.depth_at(position)
    }

    /// First line of the procedure enclosing `position`.
    pub fn find_procedure_start(&self, position: usize) -> Option<usize> {
        BoundarySearch::new(self, position).find_start()
    }

    /// Last line of the procedure enclosing `position`. Only answered inside a body or
    /// parameter list; at depth zero there is nothing to close.
    pub fn find_procedure_end(&self, position: usize) -> Option<usize> {
        if self.depth_at(position) == 0 {
            return None;
        }
        self.find_enclosing_procedure(position)
            .map(|boundary| boundary.end_line)
    }

    /// Start and end line of the procedure enclosing `position`, or `None` at top level.
    pub fn find_enclosing_procedure(&self, position: usize) -> Option<ProcedureBoundary> {
        BoundarySearch::new(self, position).run()
    }

    /// Line of the last non-trivia token, or the last line for blank text.
    pub(crate) fn last_code_line(&self) -> usize {
        self.tokens
            .iter()
            .rev()
            .find(|t| !t.is_trivia())
            .map_or(self.line_count(), |t| t.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jai::lexing::{TokenKind, Vocabulary};

    #[test]
    fn test_line_text() {
        let scanner = StructureScanner::new("a :: 1;\r\nb :: 2;\n");
        assert_eq!(scanner.line_text(1), "a :: 1;\r");
        assert_eq!(scanner.line_text(2), "b :: 2;");
        assert_eq!(scanner.line_text(3), "");
        assert_eq!(scanner.line_count(), 3);
    }

    #[test]
    fn test_from_lexed_with_vocabulary() {
        let source = "Vec3 :: struct { x: f32; }";
        let vocabulary = Vocabulary::jai().with_type_names(["f32"]);
        let lexed = Tokenizer::new(source).vocabulary(&vocabulary).finish();
        let scanner = StructureScanner::from_lexed(source, lexed);
        let f32_token = scanner.tokens().iter().find(|t| t.text == "f32").unwrap();
        assert_eq!(f32_token.kind, TokenKind::TypeName);
        assert_eq!(scanner.depth_at(source.find("x:").unwrap()), 1);
    }

    #[test]
    fn test_diagnostics_are_kept() {
        let scanner = StructureScanner::new("f :: () { /* open");
        assert_eq!(scanner.diagnostics().len(), 1);
        assert_eq!(scanner.depth_at(scanner.text().len()), 1);
    }

    #[test]
    fn test_last_code_line() {
        let scanner = StructureScanner::new("a\n\nb // c\n\n");
        assert_eq!(scanner.last_code_line(), 3);
        assert_eq!(StructureScanner::new("\n\n").last_code_line(), 3);
    }
}
