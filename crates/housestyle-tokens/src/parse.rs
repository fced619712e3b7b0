//! Extraction of custom properties and mixin blocks from definition text.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::to_one_line;

/// Value-keyed token table: canonical value text to the variable names
/// defined with that value, in definition order.
///
/// Several variables may share one value (aliases); the first name for a
/// value is the canonical one.
pub type TokenMap = IndexMap<String, Vec<String>>;

/// One mixin's properties, in definition order.
pub type MixinProps = IndexMap<String, String>;

/// Mixin table keyed by mixin name, in definition-file order.
pub type MixinMap = IndexMap<String, MixinProps>;

/// Mixin name prefixes that belong to retired type ramps and are never
/// suggested.
pub const LEGACY_MIXIN_PREFIXES: &[&str] = &["system_", "styrene_", "legacy_"];

static CUSTOM_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\A|\n)\s*(--[-\w]+):\s*([\s\S]+?);").expect("valid regex"));

static MIXIN_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@define-mixin (.*?) \{(.*?)\}").expect("valid regex"));

/// Parses `--name: value;` declarations out of raw definition text.
///
/// Values are canonicalized with [`to_one_line`] before being used as
/// keys, so multiline definitions land under their one-line form. Text
/// that does not form a complete declaration is skipped; no partial
/// entries are ever produced.
///
/// # Example
///
/// ```rust
/// use housestyle_tokens::parse_custom_properties;
///
/// let table = parse_custom_properties(":root {\n    --gap-xs: 8px;\n    --gap-s: 12px;\n}");
/// assert_eq!(table["8px"], vec!["--gap-xs".to_string()]);
/// ```
pub fn parse_custom_properties(css: &str) -> TokenMap {
    let mut table = TokenMap::new();

    for caps in CUSTOM_PROPERTY.captures_iter(css) {
        let name = caps[1].to_string();
        let value = to_one_line(&caps[2]);
        table.entry(value).or_default().push(name);
    }

    table
}

/// Parses `@define-mixin name { prop: value; ... }` blocks.
///
/// The text is one-lined first, then each block's body is split into
/// property/value pairs. Mixins whose names carry one of the
/// [`LEGACY_MIXIN_PREFIXES`] are dropped, as are body fragments without a
/// `prop: value` shape.
pub fn parse_mixins(css: &str) -> MixinMap {
    let css = to_one_line(css);
    let mut mixins = MixinMap::new();

    for caps in MIXIN_BLOCK.captures_iter(&css) {
        let name = caps[1].trim();
        if LEGACY_MIXIN_PREFIXES.iter().any(|p| name.starts_with(p)) {
            continue;
        }

        let mut props = MixinProps::new();
        for decl in caps[2].split(';') {
            let decl = decl.trim();
            if decl.is_empty() {
                continue;
            }
            let Some((prop, value)) = decl.split_once(':') else {
                continue;
            };
            props.insert(prop.trim().to_string(), value.trim().to_string());
        }

        mixins.insert(name.to_string(), props);
    }

    mixins
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAPS: &str = ":root {\n    --gap-2xs: 4px;\n    --gap-xs: 8px;\n    --gap-s: 12px;\n}";

    #[test]
    fn test_parse_custom_properties_basic() {
        let table = parse_custom_properties(GAPS);
        assert_eq!(table["4px"], vec!["--gap-2xs".to_string()]);
        assert_eq!(table["8px"], vec!["--gap-xs".to_string()]);
        assert_eq!(table["12px"], vec!["--gap-s".to_string()]);
    }

    #[test]
    fn test_parse_custom_properties_preserves_definition_order() {
        let table = parse_custom_properties(GAPS);
        let values: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_eq!(values, vec!["4px", "8px", "12px"]);
    }

    #[test]
    fn test_parse_custom_properties_aliases_share_value() {
        let css = ":root {\n    --color-a: #fff;\n    --color-b: #fff;\n}";
        let table = parse_custom_properties(css);
        assert_eq!(
            table["#fff"],
            vec!["--color-a".to_string(), "--color-b".to_string()]
        );
    }

    #[test]
    fn test_parse_custom_properties_multiline_value() {
        let css = ":root {\n    --shadow-xs: 0 0 4px rgba(0, 0, 0, 0.02),\n        0 2px 4px rgba(0, 0, 0, 0.04);\n}";
        let table = parse_custom_properties(css);
        assert_eq!(
            table["0 0 4px rgba(0, 0, 0, 0.02), 0 2px 4px rgba(0, 0, 0, 0.04)"],
            vec!["--shadow-xs".to_string()]
        );
    }

    #[test]
    fn test_parse_custom_properties_skips_malformed() {
        let css = ":root {\n    --broken 8px\n    --gap-xs: 8px;\n}";
        let table = parse_custom_properties(css);
        assert_eq!(table.len(), 1);
        assert_eq!(table["8px"], vec!["--gap-xs".to_string()]);
    }

    #[test]
    fn test_parse_mixins_basic() {
        let css = "@define-mixin headline_xlarge {\n    font-size: 48px;\n    line-height: 64px;\n    font-weight: 500;\n}";
        let mixins = parse_mixins(css);
        let props = &mixins["headline_xlarge"];
        assert_eq!(props["font-size"], "48px");
        assert_eq!(props["line-height"], "64px");
        assert_eq!(props["font-weight"], "500");
    }

    #[test]
    fn test_parse_mixins_skips_legacy_prefixes() {
        let css = "@define-mixin system_large { font-size: 20px; }\n\
                   @define-mixin styrene_small { font-size: 12px; }\n\
                   @define-mixin legacy_body { font-size: 14px; }\n\
                   @define-mixin paragraph_primary_small { font-size: 14px; }";
        let mixins = parse_mixins(css);
        assert_eq!(mixins.len(), 1);
        assert!(mixins.contains_key("paragraph_primary_small"));
    }

    #[test]
    fn test_parse_mixins_preserves_definition_order() {
        let css = "@define-mixin b { font-size: 1px; }\n@define-mixin a { font-size: 2px; }";
        let mixins = parse_mixins(css);
        let names: Vec<&str> = mixins.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_mixins_ignores_bodyless_fragments() {
        let css = "@define-mixin odd { font-size: 14px; stray-fragment; }";
        let mixins = parse_mixins(css);
        let props = &mixins["odd"];
        assert_eq!(props.len(), 1);
        assert_eq!(props["font-size"], "14px");
    }
}
