//! Whole-token matching of declaration values against the token tables.

use crate::registry::{TokenCategory, TokenRegistry};

/// Prefix every suggestible color variable carries; dark-palette and
/// legacy names never survive narrowing.
const LIGHT_COLOR_PREFIX: &str = "--color-light-";

/// One literal found inside a declaration value, with the variables that
/// could replace it.
///
/// `candidates` is never empty; its order is the table's definition order,
/// narrowed and re-ranked for color properties. The match is exact when a
/// single candidate remains — anything else needs a human choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
    /// Byte offset of the literal within the searched value.
    pub start: usize,
    /// The matched literal text.
    pub literal: String,
    /// Replacement variable names, best first.
    pub candidates: Vec<String>,
}

impl TokenMatch {
    /// Whether exactly one variable can replace the literal.
    pub fn is_exact(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// Finds the first replaceable literal in `value` for a property.
///
/// Iterates the applicable category table in definition order and returns
/// the first literal with a whole-token occurrence in `value`. Later
/// occurrences of the same pass are found by substituting the hit and
/// calling again; there is no leftmost-or-longest search across the whole
/// value.
pub fn find_token(registry: &TokenRegistry, value: &str, prop: &str) -> Option<TokenMatch> {
    let (category, table) = registry.table_for_property(prop)?;

    for (literal, names) in table {
        let candidates = narrow_candidates(names, prop, category);
        if candidates.is_empty() {
            continue;
        }
        if let Some(start) = find_whole_token(value, literal) {
            return Some(TokenMatch {
                start,
                literal: literal.clone(),
                candidates,
            });
        }
    }

    None
}

/// Whether the byte at the edge of a candidate occurrence delimits a
/// whole token. Only space, semicolon, and the string edges count; a
/// literal inside a longer token (`0` in `10px`, a color inside `url()`)
/// never matches.
fn is_token_boundary(edge: Option<char>) -> bool {
    matches!(edge, None | Some(' ') | Some(';'))
}

/// Finds the first whole-token occurrence of `needle` in `haystack`.
fn find_whole_token(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    let mut from = 0;
    while let Some(found) = haystack[from..].find(needle) {
        let start = from + found;
        let end = start + needle.len();

        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        if is_token_boundary(before) && is_token_boundary(after) {
            return Some(start);
        }

        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }

    None
}

/// The semantic color roles a property may draw from, in priority order.
fn color_roles(prop: &str) -> &'static [&'static str] {
    match prop {
        "color" => &["text"],
        "background" | "background-color" => &["bg", "specialbg", "graphic"],
        "border" | "border-top" | "border-right" | "border-bottom" | "border-left" => {
            &["border", "graphic", "bg", "specialbg"]
        }
        _ => &[],
    }
}

/// A color variable's role: the third hyphen-delimited segment of its
/// name, e.g. `--color-light-bg-primary` has role `bg`.
fn role_of(name: &str) -> Option<&str> {
    name.strip_prefix("--")?.split('-').nth(2)
}

/// Narrows and ranks candidate names for a property.
///
/// Non-color categories pass through unchanged. For color properties,
/// only light-palette variables whose role appears in the property's
/// priority list survive, ordered by that list (stable within a role).
fn narrow_candidates(names: &[String], prop: &str, category: TokenCategory) -> Vec<String> {
    if category != TokenCategory::Color {
        return names.to_vec();
    }

    let roles = color_roles(prop);
    let mut kept: Vec<String> = names
        .iter()
        .filter(|name| {
            name.starts_with(LIGHT_COLOR_PREFIX)
                && role_of(name).is_some_and(|role| roles.contains(&role))
        })
        .cloned()
        .collect();
    kept.sort_by_key(|name| roles.iter().position(|role| Some(*role) == role_of(name)));
    kept
}
