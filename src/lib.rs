//! # jai-lex
//!
//! Tokenizer and structural scanner for the JAI language.
//!
//! The crate is the portable core of an editor integration: it classifies source text into
//! tokens (for highlighting), tracks `{`/`(` nesting depth while ignoring brackets in strings
//! and comments, and answers "which procedure encloses this position" queries (for code
//! navigation and outlines). Everything is a pure function of the input text, so hosts re-run
//! it after edits instead of keeping it in sync.
//!
//! ```rust,ignore
//! use jai_lex::jai::structure::StructureScanner;
//!
//! let source = "main :: () {\n  foo();\n}\n";
//! let scanner = StructureScanner::new(source);
//! let boundary = scanner.find_enclosing_procedure(16).unwrap();
//! assert_eq!((boundary.start_line, boundary.end_line), (1, 3));
//! ```

pub mod jai;

pub use jai::lexing::{lex, tokenize, Diagnostic, Lexed, Token, TokenKind, Tokenizer};
pub use jai::outline::{outline, Declaration, DeclarationKind};
pub use jai::structure::{is_defun_start, ProcedureBoundary, StructureScanner};
