//! The read-only token registry built once per lint run.

use std::collections::HashSet;
use std::path::Path;

use housestyle_tokens::{
    MixinMap, TokenDir, TokenMap, COLOR_FILE, RADIUS_FILE, SHADOW_FILE, SPACING_FILE,
    TYPOGRAPHY_FILE,
};

use super::TokenCategory;

/// Immutable lookup tables for every token category plus typography
/// mixins.
///
/// Built once — from loaded definition files via [`TokenRegistry::load`]
/// or from already-parsed tables via [`TokenRegistry::new`] — and then
/// only read for the rest of the run. The engine receives it by
/// reference; nothing mutates it.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    spacing: TokenMap,
    shadow: TokenMap,
    color: TokenMap,
    radius: TokenMap,
    typography: MixinMap,
    color_names: HashSet<String>,
}

impl TokenRegistry {
    /// Builds a registry from already-parsed tables.
    pub fn new(
        spacing: TokenMap,
        shadow: TokenMap,
        color: TokenMap,
        radius: TokenMap,
        typography: MixinMap,
    ) -> Self {
        let color_names = color.values().flatten().cloned().collect();
        Self {
            spacing,
            shadow,
            color,
            radius,
            typography,
            color_names,
        }
    }

    /// Loads all definition files from a resolved token directory.
    ///
    /// Individual files that fail to load leave their category empty (see
    /// [`TokenDir::load_properties`]); the rest of the registry still
    /// works.
    pub fn load(dir: &TokenDir) -> Self {
        Self::new(
            dir.load_properties(SPACING_FILE),
            dir.load_properties(SHADOW_FILE),
            dir.load_properties(COLOR_FILE),
            dir.load_properties(RADIUS_FILE),
            dir.load_mixins(TYPOGRAPHY_FILE),
        )
    }

    /// Discovers the project's token directory and loads it.
    ///
    /// Returns `None` — after one operator-facing warning — when the
    /// project does not carry the token package. Callers build an
    /// inactive linter from that.
    pub fn discover(project_root: &Path) -> Option<Self> {
        match TokenDir::locate(project_root) {
            Some(dir) => Some(Self::load(&dir)),
            None => {
                log::warn!(
                    "no design-token package found under '{}'; all housestyle rules are disabled",
                    project_root.display()
                );
                None
            }
        }
    }

    /// The value table for one category.
    pub fn table(&self, category: TokenCategory) -> &TokenMap {
        match category {
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Shadow => &self.shadow,
            TokenCategory::Color => &self.color,
            TokenCategory::Radius => &self.radius,
        }
    }

    /// The category and table applicable to a property, if any.
    pub fn table_for_property(&self, prop: &str) -> Option<(TokenCategory, &TokenMap)> {
        let category = TokenCategory::for_property(prop)?;
        Some((category, self.table(category)))
    }

    /// The typography mixin table, in definition-file order.
    pub fn typography(&self) -> &MixinMap {
        &self.typography
    }

    /// Whether `name` is a defined color variable.
    pub fn knows_color(&self, name: &str) -> bool {
        self.color_names.contains(name)
    }
}
