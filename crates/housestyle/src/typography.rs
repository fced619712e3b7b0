//! Resolution of typography declarations against the mixin table.

use indexmap::IndexMap;

use housestyle_tokens::{MixinMap, MixinProps};

use crate::node::{MixinReference, StyleRule};

/// The canonical typography properties a mixin bundles.
pub const TYPOGRAPHY_PROPS: [&str; 3] = ["font-size", "line-height", "font-weight"];

/// One mixin that could replace a rule's typography declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixinMatch {
    pub name: String,
    pub props: MixinProps,
}

/// Outcome of resolving a rule against the mixin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyMatch {
    /// Whether the candidates matched all three canonical properties.
    pub exact: bool,
    /// Candidate mixins in definition-file order; never empty.
    pub mixins: Vec<MixinMatch>,
}

/// Collects the typography property values declared directly in a rule.
/// Later declarations win, as they would in the cascade.
pub fn collect_typography(rule: &StyleRule) -> IndexMap<&str, &str> {
    let mut props = IndexMap::new();
    for decl in rule.declarations() {
        if TYPOGRAPHY_PROPS.contains(&decl.prop.as_str()) {
            props.insert(decl.prop.as_str(), decl.value.as_str());
        }
    }
    props
}

/// Resolves a rule's typography properties against the mixin table.
///
/// A rule without `font-size` is not a typography candidate. Exact
/// matches — all three canonical properties present on both sides and
/// equal — take precedence; only when none exist are partial matches
/// (every property the rule declares agrees, missing ones ignored)
/// considered. Candidate order is the mixin definition-file order.
pub fn resolve_mixins(
    table: &MixinMap,
    rule_props: &IndexMap<&str, &str>,
) -> Option<TypographyMatch> {
    if !rule_props.contains_key("font-size") {
        return None;
    }

    let exact = collect_matches(table, rule_props, true);
    if !exact.is_empty() {
        return Some(TypographyMatch {
            exact: true,
            mixins: exact,
        });
    }

    let partial = collect_matches(table, rule_props, false);
    if partial.is_empty() {
        None
    } else {
        Some(TypographyMatch {
            exact: false,
            mixins: partial,
        })
    }
}

fn collect_matches(
    table: &MixinMap,
    rule_props: &IndexMap<&str, &str>,
    exact: bool,
) -> Vec<MixinMatch> {
    table
        .iter()
        .filter(|(_, mixin_props)| {
            TYPOGRAPHY_PROPS.iter().all(|prop| {
                match (rule_props.get(prop), mixin_props.get(*prop)) {
                    (Some(rule_value), Some(mixin_value)) => *rule_value == mixin_value,
                    (None, _) => !exact,
                    (Some(_), None) => false,
                }
            })
        })
        .map(|(name, props)| MixinMatch {
            name: name.clone(),
            props: props.clone(),
        })
        .collect()
}

/// Applies the typography fix: removes the matched declarations from the
/// rule's direct children and prepends the mixin reference, indented like
/// the rule's original first child.
pub fn apply_mixin(rule: &mut StyleRule, mixin: &MixinMatch) {
    let before = rule
        .first_child_before()
        .unwrap_or("\n    ")
        .to_string();

    rule.retain_declarations(|decl| {
        !(TYPOGRAPHY_PROPS.contains(&decl.prop.as_str()) && mixin.props.contains_key(&decl.prop))
    });
    rule.prepend_mixin(MixinReference {
        name: mixin.name.clone(),
        before,
    });
}
