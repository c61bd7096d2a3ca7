//! Procedure header heuristic
//!
//! A line begins a procedure definition when it contains a parenthesized group followed later
//! on the same line by `{`. It also accepts `if (x) {` and misses
//! headers whose parameter list spans several lines.

use once_cell::sync::Lazy;
use regex::Regex;

static DEFUN_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*\).*\{").unwrap());

/// True if `line_text` looks like the first line of a procedure definition.
pub fn is_defun_start(line_text: &str) -> bool {
    DEFUN_START.is_match(line_text)
}
