//! Whitespace canonicalization for token values.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").expect("valid regex"));

/// Collapses a value to its canonical one-line form.
///
/// Runs of two or more whitespace characters become a single space, then
/// remaining newlines are removed. Every stored token value and every
/// declaration value goes through this before comparison, so a multiline
/// `box-shadow` in a stylesheet still equals its definition.
///
/// # Example
///
/// ```rust
/// use housestyle_tokens::to_one_line;
///
/// let value = "0 0 4px rgba(0, 0, 0, 0.02),\n    0 2px 4px rgba(0, 0, 0, 0.04)";
/// assert_eq!(
///     to_one_line(value),
///     "0 0 4px rgba(0, 0, 0, 0.02), 0 2px 4px rgba(0, 0, 0, 0.04)"
/// );
/// ```
pub fn to_one_line(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").replace('\n', "")
}
