//! Token categories and the property applicability table.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// The kind of design token a table holds.
///
/// Every lintable property maps to exactly one category; properties
/// outside the table are never matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Spacing,
    Shadow,
    Color,
    Radius,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Spacing => "spacing",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Color => "color",
            TokenCategory::Radius => "radius",
        };
        f.write_str(name)
    }
}

static PROPERTY_CATEGORIES: Lazy<HashMap<&'static str, TokenCategory>> = Lazy::new(|| {
    use TokenCategory::*;

    let mut table = HashMap::new();
    for prop in [
        "padding",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
        "margin",
        "margin-top",
        "margin-right",
        "margin-bottom",
        "margin-left",
    ] {
        table.insert(prop, Spacing);
    }
    table.insert("box-shadow", Shadow);
    for prop in [
        "color",
        "background",
        "background-color",
        "border",
        "border-top",
        "border-right",
        "border-bottom",
        "border-left",
    ] {
        table.insert(prop, Color);
    }
    for prop in [
        "border-radius",
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-left-radius",
        "border-bottom-right-radius",
    ] {
        table.insert(prop, Radius);
    }
    table
});

impl TokenCategory {
    /// The category applicable to a property, if any.
    pub fn for_property(prop: &str) -> Option<Self> {
        PROPERTY_CATEGORIES.get(prop).copied()
    }
}
