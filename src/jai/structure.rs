//! Structural scanning
//!
//! Answers position queries over JAI source: bracket nesting depth, whether a line starts a
//! procedure, and the line extent of the procedure enclosing a position.
//!
//! Everything is derived from the token stream rather than raw characters. A `}` inside a
//! string or comment is a [String](crate::jai::lexing::TokenKind::String) or comment token,
//! not punctuation, so it never closes a block.
//!
//! Known limitations of the procedure heuristic (see [defun]): a header must have its
//! parameter list and `{` on one line, and any `(...) ... {` line (an `if (x) {` for example)
//! is taken as a header.

pub mod boundary;
pub mod defun;
pub mod depth;
pub mod lines;
pub mod scanner;

pub use boundary::ProcedureBoundary;
pub use defun::is_defun_start;
pub use depth::DepthTable;
pub use lines::LineIndex;
pub use scanner::StructureScanner;

/// Depth at `position` in `text`. Builds a throwaway scanner; keep a [StructureScanner] around
/// for repeated queries.
pub fn depth_at(text: &str, position: usize) -> usize {
    StructureScanner::new(text).depth_at(position)
}

/// Enclosing procedure of `position` in `text`, or `None` at top level.
pub fn find_enclosing_procedure(text: &str, position: usize) -> Option<ProcedureBoundary> {
    StructureScanner::new(text).find_enclosing_procedure(position)
}
