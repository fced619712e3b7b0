//! The token-value rules, applied per declaration.

use housestyle_tokens::to_one_line;

use crate::diagnostics::Diagnostic;
use crate::node::Declaration;
use crate::registry::TokenRegistry;
use crate::rewrite::rewrite_value;
use crate::rules::{messages, LintConfig, ReportPolicy, USE_ONE_OF_VARS, USE_VARS};

/// Runs the matching/rewriting engine over one declaration and surfaces
/// the outcomes the enabled rule variants ask for.
///
/// In fix mode, exact matches are written back into the declaration and
/// produce no diagnostic; everything else is reported at its position in
/// the original value text.
pub(crate) fn check_declaration(
    registry: &TokenRegistry,
    decl: &mut Declaration,
    config: &LintConfig,
) -> Vec<Diagnostic> {
    let value = to_one_line(&decl.value);
    let outcome = rewrite_value(registry, &decl.prop, &value, config.fix);

    let variants = [
        (USE_VARS, config.use_vars, ReportPolicy::Exact),
        (USE_ONE_OF_VARS, config.use_one_of_vars, ReportPolicy::OneOfMany),
    ];

    let mut diagnostics = Vec::new();
    for sub in &outcome.substitutions {
        if sub.fixed {
            continue;
        }
        for (rule, enabled, policy) in variants {
            if !enabled || !policy.accepts(sub.candidates.len()) {
                continue;
            }
            let message = match policy {
                ReportPolicy::Exact => messages::expected_var(&sub.candidates[0], &sub.literal),
                ReportPolicy::OneOfMany => {
                    messages::expected_one_of_vars(&sub.candidates, &sub.literal)
                }
            };
            diagnostics.push(Diagnostic {
                rule,
                message,
                severity: config.severity,
                line: decl.start.line,
                column: decl.value_start_column() + value[..sub.offset].chars().count() as u32,
            });
        }
    }

    if let Some(fixed) = outcome.fixed_value {
        decl.value = fixed;
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Position;
    use housestyle_tokens::{parse_custom_properties, MixinMap, TokenMap};

    fn registry() -> TokenRegistry {
        TokenRegistry::new(
            parse_custom_properties(
                ":root {\n    --gap-2xs: 4px;\n    --gap-xs: 8px;\n    --gap-s: 12px;\n    --gap-m: 16px;\n}",
            ),
            TokenMap::new(),
            parse_custom_properties(
                ":root {\n    --color-light-bg-primary: #fff;\n    --color-light-specialbg-secondary-grouped: #fff;\n}",
            ),
            TokenMap::new(),
            MixinMap::new(),
        )
    }

    fn decl(prop: &str, value: &str, line: u32, column: u32) -> Declaration {
        let mut decl = Declaration::new(prop, value);
        decl.start = Position::new(line, column);
        decl
    }

    #[test]
    fn test_exact_match_reported_without_fix() {
        let mut decl = decl("padding-top", "8px", 2, 5);
        let diags = check_declaration(&registry(), &mut decl, &LintConfig::default());

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, USE_VARS);
        assert_eq!((diags[0].line, diags[0].column), (2, 18));
        assert_eq!(decl.value, "8px");
    }

    #[test]
    fn test_exact_match_fixed_silently() {
        let config = LintConfig {
            fix: true,
            ..LintConfig::default()
        };
        let mut decl = decl("padding-top", "8px", 2, 5);
        let diags = check_declaration(&registry(), &mut decl, &config);

        assert!(diags.is_empty());
        assert_eq!(decl.value, "var(--gap-xs)");
    }

    #[test]
    fn test_shorthand_reports_original_columns() {
        let mut decl = decl("padding", "8px 12px 4px 16px", 2, 5);
        let diags = check_declaration(&registry(), &mut decl, &LintConfig::default());

        let mut columns: Vec<u32> = diags.iter().map(|d| d.column).collect();
        columns.sort_unstable();
        assert_eq!(columns, vec![14, 18, 23, 27]);
    }

    #[test]
    fn test_ambiguous_match_reports_one_of_and_never_fixes() {
        let config = LintConfig {
            fix: true,
            ..LintConfig::default()
        };
        let mut decl = decl("background", "#fff", 3, 5);
        let diags = check_declaration(&registry(), &mut decl, &config);

        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].rule, USE_ONE_OF_VARS);
        assert!(diags[0].message.contains("--color-light-bg-primary"));
        assert_eq!(decl.value, "#fff");
    }

    #[test]
    fn test_disabled_variant_is_silent() {
        let config = LintConfig {
            use_vars: false,
            ..LintConfig::default()
        };
        let mut decl = decl("padding-top", "8px", 2, 5);
        assert!(check_declaration(&registry(), &mut decl, &config).is_empty());
    }

    #[test]
    fn test_multiline_value_is_matched_one_lined() {
        let mut decl = decl("padding", "8px\n    12px", 2, 5);
        let config = LintConfig {
            fix: true,
            ..LintConfig::default()
        };
        let diags = check_declaration(&registry(), &mut decl, &config);

        assert!(diags.is_empty());
        assert_eq!(decl.value, "var(--gap-xs) var(--gap-s)");
    }
}
