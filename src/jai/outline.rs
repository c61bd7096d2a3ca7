//! Outline: top-level declaration discovery
//!
//! Finds the declarations an index or outline view lists. Only lines whose first code token
//! sits at depth zero are considered, and the line must start with an identifier followed by a
//! colon:
//!
//! - `name :: (`                  procedure, also with `inline`, `no_inline` or directives
//!                                 such as `#type` before the `(`
//! - `name :: struct|enum|union`  type declaration
//! - `name :: value`              constant
//! - `name : T = v`, `name := v`  variable (a single `:` not directly followed by `(`)

use crate::jai::lexing::{Token, TokenKind};
use crate::jai::structure::{is_defun_start, ProcedureBoundary, StructureScanner};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    Procedure,
    Struct,
    Enum,
    Union,
    Constant,
    Variable,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Procedure => "procedure",
            DeclarationKind::Struct => "struct",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Union => "union",
            DeclarationKind::Constant => "constant",
            DeclarationKind::Variable => "variable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub line: usize,
    pub start: usize,
    pub end: usize,
    /// Extent of a procedure whose header line matches the procedure heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<ProcedureBoundary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    pub include_variables: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        OutlineOptions {
            include_variables: true,
        }
    }
}

/// Declarations of `scanner`'s text with default options.
pub fn outline(scanner: &StructureScanner) -> Vec<Declaration> {
    outline_with(scanner, OutlineOptions::default())
}

pub fn outline_with(scanner: &StructureScanner, options: OutlineOptions) -> Vec<Declaration> {
    let tokens = scanner.tokens();
    let depths = scanner.depths();
    let mut declarations = Vec::new();
    let mut last_line = 0;

    for (index, token) in tokens.iter().enumerate() {
        if token.is_trivia() || token.line == last_line {
            continue;
        }
        last_line = token.line;
        if token.kind != TokenKind::Identifier || depths.before(index) != 0 {
            continue;
        }

        let rest: Vec<&Token> = tokens[index + 1..]
            .iter()
            .take_while(|t| t.line == token.line)
            .filter(|t| !t.is_trivia())
            .collect();
        let Some(kind) = declaration_kind(&rest) else {
            continue;
        };
        if kind == DeclarationKind::Variable && !options.include_variables {
            continue;
        }

        let boundary = if kind == DeclarationKind::Procedure
            && is_defun_start(scanner.line_text(token.line))
        {
            scanner.find_enclosing_procedure(token.start)
        } else {
            None
        };

        declarations.push(Declaration {
            name: token.text.to_string(),
            kind,
            line: token.line,
            start: token.start,
            end: token.end,
            boundary,
        });
    }

    declarations
}

/// Classify from the code tokens following the name on its line.
fn declaration_kind(rest: &[&Token]) -> Option<DeclarationKind> {
    match rest {
        [colon, second, value @ ..] if colon.is_operator(':') && second.is_operator(':') => {
            let value = value.iter().find(|t| !is_procedure_modifier(t));
            Some(match value {
                Some(t) if t.is_punct('(') => DeclarationKind::Procedure,
                Some(t) if t.kind == TokenKind::Keyword => match t.text {
                    "struct" => DeclarationKind::Struct,
                    "enum" | "enum_flags" => DeclarationKind::Enum,
                    "union" => DeclarationKind::Union,
                    _ => DeclarationKind::Constant,
                },
                _ => DeclarationKind::Constant,
            })
        }
        [colon, next, ..] if colon.is_operator(':') && !next.is_punct('(') => {
            Some(DeclarationKind::Variable)
        }
        [colon] if colon.is_operator(':') => Some(DeclarationKind::Variable),
        _ => None,
    }
}

/// Tokens that may sit between `::` and a procedure's parameter list: `inline`, `no_inline`
/// and directives such as `#type` or `#must`.
fn is_procedure_modifier(token: &Token) -> bool {
    match token.kind {
        TokenKind::Keyword => matches!(token.text, "inline" | "no_inline"),
        TokenKind::Directive => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(source: &str) -> Vec<(String, DeclarationKind, usize)> {
        outline(&StructureScanner::new(source))
            .into_iter()
            .map(|d| (d.name, d.kind, d.line))
            .collect()
    }

    #[test]
    fn test_declaration_shapes() {
        let source = "\
main :: () {
    local := 1;
}
Vec2 :: struct { x, y: float; }
Mode :: enum u8 { A; B; }
Flags :: enum_flags { X; }
Both :: union { a: int; b: float; }
PI :: 3.14;
counter : int = 0;
name := \"jai\";
";
        assert_eq!(
            summary(source),
            vec![
                ("main".to_string(), DeclarationKind::Procedure, 1),
                ("Vec2".to_string(), DeclarationKind::Struct, 4),
                ("Mode".to_string(), DeclarationKind::Enum, 5),
                ("Flags".to_string(), DeclarationKind::Enum, 6),
                ("Both".to_string(), DeclarationKind::Union, 7),
                ("PI".to_string(), DeclarationKind::Constant, 8),
                ("counter".to_string(), DeclarationKind::Variable, 9),
                ("name".to_string(), DeclarationKind::Variable, 10),
            ]
        );
    }

    #[test]
    fn test_nested_declarations_are_skipped() {
        let source = "outer :: () {\n    inner :: () {\n    }\n}\n";
        assert_eq!(
            summary(source),
            vec![("outer".to_string(), DeclarationKind::Procedure, 1)]
        );
    }

    #[test]
    fn test_procedure_boundary_attached() {
        let source = "f :: (a: int) -> int {\n    return a;\n}\n\ng :: (\n    b: int) {\n}\n";
        let declarations = outline(&StructureScanner::new(source));
        assert_eq!(declarations.len(), 2);
        assert_eq!(
            declarations[0].boundary,
            Some(ProcedureBoundary {
                start_line: 1,
                end_line: 3
            })
        );
        // Multi-line header: found as a declaration but the heuristic gives no extent.
        assert_eq!(declarations[1].kind, DeclarationKind::Procedure);
        assert_eq!(declarations[1].boundary, None);
    }

    #[test]
    fn test_colon_followed_by_paren_is_not_a_declaration() {
        assert!(summary("x : (int);\n").is_empty());
        assert!(summary("print(x);\n").is_empty());
    }

    #[test]
    fn test_variables_can_be_excluded() {
        let scanner = StructureScanner::new("a := 1;\nb :: 2;\n");
        let declarations = outline_with(
            &scanner,
            OutlineOptions {
                include_variables: false,
            },
        );
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "b");
    }

    #[test]
    fn test_modifiers_before_parameter_list() {
        let source = "e :: inline (x: int) {\n    return;\n}\nd :: #type (x: int);\nn :: no_inline () {}\nr :: #run compute();\n";
        let declarations = outline(&StructureScanner::new(source));
        let found: Vec<_> = declarations
            .iter()
            .map(|d| (d.name.as_str(), d.kind, d.boundary))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    "e",
                    DeclarationKind::Procedure,
                    Some(ProcedureBoundary {
                        start_line: 1,
                        end_line: 3
                    })
                ),
                ("d", DeclarationKind::Procedure, None),
                (
                    "n",
                    DeclarationKind::Procedure,
                    Some(ProcedureBoundary {
                        start_line: 5,
                        end_line: 5
                    })
                ),
                ("r", DeclarationKind::Constant, None),
            ]
        );
    }

    #[test]
    fn test_commented_out_declaration_is_ignored() {
        assert!(summary("// main :: () {}\n/* x := 1; */\n").is_empty());
    }
}
