//! The lint orchestrator.

use std::path::Path;

use crate::diagnostics::Diagnostic;
use crate::node::StyleRule;
use crate::registry::TokenRegistry;
use crate::rules::{dark_colors, mixins, tokens, LintConfig};

/// Drives every enabled rule over the style rules the host walker
/// delivers.
///
/// A linter is constructed once per run. Whether the token package was
/// found is decided at construction: an inactive linter (no registry)
/// turns every check into a guaranteed no-op, so call sites never probe
/// availability themselves.
///
/// # Example
///
/// ```rust
/// use housestyle::{Declaration, LintConfig, Linter, StyleRule, TokenRegistry};
/// use housestyle_tokens::parse_custom_properties;
///
/// let registry = TokenRegistry::new(
///     parse_custom_properties(":root {\n    --gap-xs: 8px;\n}"),
///     Default::default(),
///     Default::default(),
///     Default::default(),
///     Default::default(),
/// );
/// let linter = Linter::new(registry, LintConfig::default());
///
/// let mut rule = StyleRule::new(".class")
///     .with_declaration(Declaration::new("padding-top", "8px"));
/// let diagnostics = linter.lint_rule(&mut rule);
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug)]
pub struct Linter {
    registry: Option<TokenRegistry>,
    config: LintConfig,
}

impl Linter {
    /// A linter backed by a loaded token registry.
    pub fn new(registry: TokenRegistry, config: LintConfig) -> Self {
        Self {
            registry: Some(registry),
            config,
        }
    }

    /// A linter for a project without the token package: every check is a
    /// no-op.
    pub fn inactive(config: LintConfig) -> Self {
        Self {
            registry: None,
            config,
        }
    }

    /// Discovers the project's token directory and builds the matching
    /// linter — active when found, inactive (after one logged warning)
    /// when not.
    pub fn from_project_root(root: &Path, config: LintConfig) -> Self {
        match TokenRegistry::discover(root) {
            Some(registry) => Self::new(registry, config),
            None => Self::inactive(config),
        }
    }

    /// Whether the token package resolved and rules will run.
    pub fn is_active(&self) -> bool {
        self.registry.is_some()
    }

    /// The configuration this linter runs with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lints one style rule as delivered by the host walker, applying
    /// fixes in place when fix mode is on.
    ///
    /// Typography rules run once against the rule's direct children, then
    /// the per-declaration rules over each declaration. Nested rules are
    /// the walker's concern; it delivers each one separately.
    pub fn lint_rule(&self, rule: &mut StyleRule) -> Vec<Diagnostic> {
        let Some(registry) = &self.registry else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();

        if self.config.wants_mixins() {
            diagnostics.extend(mixins::check_rule(registry, rule, &self.config));
        }

        if self.config.wants_tokens() {
            for decl in rule.declarations_mut() {
                diagnostics.extend(tokens::check_declaration(registry, decl, &self.config));
            }
        }

        if self.config.no_dark_colors {
            for decl in rule.declarations() {
                diagnostics.extend(dark_colors::check_declaration(registry, decl, &self.config));
            }
        }

        diagnostics
    }

    /// Lints every rule of a stylesheet in document order.
    pub fn lint_stylesheet(&self, rules: &mut [StyleRule]) -> Vec<Diagnostic> {
        rules
            .iter_mut()
            .flat_map(|rule| self.lint_rule(rule))
            .collect()
    }
}
