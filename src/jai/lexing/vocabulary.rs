//! JAI word classes
//!
//! The four fixed vocabularies (keywords, builtins, constants and type names) are plain lookup
//! tables. A word is classified by exact match after the lexer has cut it at word boundaries,
//! so `ifx_custom` never matches `if` or `ifx`.

use super::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "if",
    "ifx",
    "else",
    "then",
    "while",
    "for",
    "switch",
    "case",
    "struct",
    "enum",
    "enum_flags",
    "union",
    "return",
    "new",
    "remove",
    "continue",
    "break",
    "defer",
    "inline",
    "no_inline",
    "using",
    "push_context",
    "operator",
    "interface",
];

pub const BUILTINS: &[&str] = &[
    "cast",
    "xx",
    "it",
    "it_index",
    "type_info",
    "type_of",
    "size_of",
    "initializer_of",
    "code_of",
    "is_constant",
    "print",
    "assert",
];

pub const CONSTANTS: &[&str] = &["null", "true", "false"];

pub const TYPE_NAMES: &[&str] = &[
    "int", "u64", "u32", "u16", "u8", "s64", "s32", "s16", "s8", "float", "float32", "float64",
    "string", "bool", "void", "Type", "Any",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());
static BUILTIN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| BUILTINS.iter().copied().collect());
static CONSTANT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| CONSTANTS.iter().copied().collect());
static TYPE_NAME_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| TYPE_NAMES.iter().copied().collect());

/// The built-in JAI vocabulary plus any words a host adds on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    keywords: HashSet<String>,
    builtins: HashSet<String>,
    constants: HashSet<String>,
    type_names: HashSet<String>,
}

impl Vocabulary {
    /// The built-in vocabulary with no additions.
    pub fn jai() -> Self {
        Self::default()
    }

    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtins.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_constants<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_type_names<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_names.extend(words.into_iter().map(Into::into));
        self
    }

    /// Classify a whole word. Sets are checked in order keywords, builtins, constants, type
    /// names; anything else is an identifier.
    pub fn classify(&self, word: &str) -> TokenKind {
        if KEYWORD_SET.contains(word) || self.keywords.contains(word) {
            TokenKind::Keyword
        } else if BUILTIN_SET.contains(word) || self.builtins.contains(word) {
            TokenKind::Builtin
        } else if CONSTANT_SET.contains(word) || self.constants.contains(word) {
            TokenKind::Constant
        } else if TYPE_NAME_SET.contains(word) || self.type_names.contains(word) {
            TokenKind::TypeName
        } else {
            TokenKind::Identifier
        }
    }
}

/// Shared instance of the built-in vocabulary.
pub(crate) static JAI: Lazy<Vocabulary> = Lazy::new(Vocabulary::jai);
