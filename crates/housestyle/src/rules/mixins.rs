//! The typography mixin rules, applied once per rule.

use crate::diagnostics::Diagnostic;
use crate::node::{Position, StyleRule};
use crate::registry::TokenRegistry;
use crate::rules::{messages, LintConfig, ReportPolicy, USE_MIXINS, USE_ONE_OF_MIXINS};
use crate::typography::{apply_mixin, collect_typography, resolve_mixins};

/// Resolves a rule's typography declarations against the mixin table,
/// fixing when a single exact match exists and reporting otherwise.
pub(crate) fn check_rule(
    registry: &TokenRegistry,
    rule: &mut StyleRule,
    config: &LintConfig,
) -> Vec<Diagnostic> {
    let props = collect_typography(rule);
    let Some(found) = resolve_mixins(registry.typography(), &props) else {
        return Vec::new();
    };

    // Reports anchor at the rule's font-size declaration.
    let Some(anchor) = font_size_position(rule) else {
        return Vec::new();
    };

    let unique_exact = found.exact && ReportPolicy::Exact.accepts(found.mixins.len());
    if config.fix && unique_exact {
        apply_mixin(rule, &found.mixins[0]);
        return Vec::new();
    }

    let mut diagnostics = Vec::new();
    if config.use_mixins && unique_exact {
        diagnostics.push(Diagnostic {
            rule: USE_MIXINS,
            message: messages::expected_mixin(&found.mixins[0].name),
            severity: config.severity,
            line: anchor.line,
            column: anchor.column,
        });
    }
    if config.use_one_of_mixins && ReportPolicy::OneOfMany.accepts(found.mixins.len()) {
        diagnostics.push(Diagnostic {
            rule: USE_ONE_OF_MIXINS,
            message: messages::expected_one_of_mixins(&found.mixins),
            severity: config.severity,
            line: anchor.line,
            column: anchor.column,
        });
    }
    diagnostics
}

fn font_size_position(rule: &StyleRule) -> Option<Position> {
    rule.declarations()
        .find(|decl| decl.prop == "font-size")
        .map(|decl| decl.start)
}
