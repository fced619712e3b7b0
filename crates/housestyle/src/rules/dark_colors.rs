//! The dark-palette color rule.
//!
//! Components style against the light palette; dark variants come from
//! the theming layer, not from stylesheets referencing `--color-dark-…`
//! directly. Legacy dark names with no light counterpart predate the
//! palette split and are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

use housestyle_tokens::to_one_line;

use crate::diagnostics::Diagnostic;
use crate::node::Declaration;
use crate::registry::TokenRegistry;
use crate::rules::{messages, LintConfig, NO_DARK_COLORS};

static DARK_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--color-dark-[-\w]+").expect("valid regex"));

/// Flags every reference to a dark-palette variable whose light
/// counterpart exists in the registry. Never fixable; switching palettes
/// is a design decision.
pub(crate) fn check_declaration(
    registry: &TokenRegistry,
    decl: &Declaration,
    config: &LintConfig,
) -> Vec<Diagnostic> {
    let value = to_one_line(&decl.value);

    let mut diagnostics = Vec::new();
    for found in DARK_COLOR.find_iter(&value) {
        let name = found.as_str();
        let counterpart = name.replacen("--color-dark-", "--color-light-", 1);
        if !registry.knows_color(&counterpart) {
            continue;
        }
        diagnostics.push(Diagnostic {
            rule: NO_DARK_COLORS,
            message: messages::no_dark_colors(name),
            severity: config.severity,
            line: decl.start.line,
            column: decl.value_start_column() + value[..found.start()].chars().count() as u32,
        });
    }
    diagnostics
}
