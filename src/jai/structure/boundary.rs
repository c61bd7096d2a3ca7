//! Enclosing-procedure search
//!
//! The search is a small state machine over the depth-annotated token stream:
//!
//! ```text
//! Searching --(line is a defun start)--> FoundStart --> ScanningBody --> BodyComplete
//!     |  ^
//!     |  +--(walk out to the enclosing opener, one level)
//!     +--(depth exhausted)--> NotInProcedure
//! ```
//!
//! Searching starts on the line of the query position with the target depth set to the depth
//! at that position. Each time the current line is not a procedure header, the search jumps
//! back to the opener of the innermost enclosing group and re-checks that opener's line. At
//! depth zero with no header found, the position is not inside a procedure.
//!
//! The body scan starts at the first `{` at or after the header line and ends at the first
//! closer that brings the depth back to the depth the header line started at.

use super::defun::is_defun_start;
use super::depth::{bracket, Bracket};
use super::scanner::StructureScanner;
use serde::Serialize;
use tracing::trace;

/// Line extent of one procedure, 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcedureBoundary {
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchState {
    Searching {
        line: usize,
        target: usize,
        /// Only tokens before this index are candidates for the enclosing opener.
        cursor: usize,
    },
    FoundStart {
        line: usize,
    },
    ScanningBody {
        start_line: usize,
        base: usize,
    },
    BodyComplete(ProcedureBoundary),
    NotInProcedure,
}

pub(crate) struct BoundarySearch<'s, 'a> {
    scanner: &'s StructureScanner<'a>,
    state: SearchState,
}

impl<'s, 'a> BoundarySearch<'s, 'a> {
    pub(crate) fn new(scanner: &'s StructureScanner<'a>, position: usize) -> Self {
        let position = position.min(scanner.text().len());
        let cursor = scanner.depths().index_at(position);
        let state = SearchState::Searching {
            line: scanner.line_of(position),
            target: scanner.depths().before(cursor),
            cursor,
        };
        trace!(position, ?state, "boundary search");
        BoundarySearch { scanner, state }
    }

    /// Run until the start line is known.
    pub(crate) fn find_start(mut self) -> Option<usize> {
        loop {
            match self.state {
                SearchState::FoundStart { line } => return Some(line),
                SearchState::NotInProcedure => return None,
                _ => self.step(),
            }
        }
    }

    /// Run to completion.
    pub(crate) fn run(mut self) -> Option<ProcedureBoundary> {
        loop {
            match self.state {
                SearchState::BodyComplete(boundary) => return Some(boundary),
                SearchState::NotInProcedure => return None,
                _ => self.step(),
            }
        }
    }

    fn step(&mut self) {
        self.state = match self.state {
            SearchState::Searching {
                line,
                target,
                cursor,
            } => self.search(line, target, cursor),
            SearchState::FoundStart { line } => SearchState::ScanningBody {
                start_line: line,
                base: self.scanner.depth_at(self.scanner.line_start(line)),
            },
            SearchState::ScanningBody { start_line, base } => self.scan_body(start_line, base),
            done @ (SearchState::BodyComplete(_) | SearchState::NotInProcedure) => done,
        };
        trace!(state = ?self.state, "boundary search step");
    }

    fn search(&self, line: usize, target: usize, cursor: usize) -> SearchState {
        if is_defun_start(self.scanner.line_text(line)) {
            return SearchState::FoundStart { line };
        }
        if target == 0 {
            return SearchState::NotInProcedure;
        }
        match self.enclosing_opener(target, cursor) {
            Some(index) => SearchState::Searching {
                line: self.scanner.tokens()[index].line,
                target: target - 1,
                cursor: index,
            },
            None => SearchState::NotInProcedure,
        }
    }

    /// The opener of the innermost group open at `cursor`: the last opener before it that
    /// raised the depth from `target - 1` to `target`.
    fn enclosing_opener(&self, target: usize, cursor: usize) -> Option<usize> {
        let tokens = self.scanner.tokens();
        let depths = self.scanner.depths();
        (0..cursor.min(tokens.len())).rev().find(|&index| {
            bracket(&tokens[index]) == Some(Bracket::Open) && depths.before(index) == target - 1
        })
    }

    fn scan_body(&self, start_line: usize, base: usize) -> SearchState {
        let tokens = self.scanner.tokens();
        let depths = self.scanner.depths();
        let line_start = self.scanner.line_start(start_line);

        let end_line = tokens
            .iter()
            .enumerate()
            .skip_while(|(_, t)| t.start < line_start)
            .skip_while(|(_, t)| !t.is_punct('{'))
            .skip(1)
            .find(|&(index, t)| bracket(t) == Some(Bracket::Close) && depths.after(index) <= base)
            .map(|(_, t)| t.line);

        // A body that opens on the header line but is never closed runs to the end of the code.
        let end_line = match end_line {
            Some(line) => line,
            None if tokens.iter().any(|t| t.start >= line_start && t.is_punct('{')) => {
                self.scanner.last_code_line().max(start_line)
            }
            None => start_line,
        };

        SearchState::BodyComplete(ProcedureBoundary {
            start_line,
            end_line,
        })
    }
}
