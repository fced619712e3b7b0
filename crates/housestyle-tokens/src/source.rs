//! Discovery and loading of token-definition files.
//!
//! The lint rules are only meaningful inside a project that carries the
//! design-token package. [`TokenDir::locate`] encodes that deployment
//! condition: an explicit environment override, or one of the conventional
//! directories under the project root. When nothing resolves, callers
//! construct an inactive rule set instead of erroring.
//!
//! Loading itself fails softly: a missing or unreadable file yields an
//! empty table and a single operator-facing warning, never a hard error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::parse::{parse_custom_properties, parse_mixins, MixinMap, TokenMap};

/// Environment variable overriding token-directory discovery.
pub const TOKENS_DIR_ENV: &str = "HOUSESTYLE_TOKENS";

/// Spacing scale definitions.
pub const SPACING_FILE: &str = "gaps.css";
/// Shadow definitions.
pub const SHADOW_FILE: &str = "shadows.css";
/// Color palette definitions.
pub const COLOR_FILE: &str = "colors.css";
/// Corner radius definitions.
pub const RADIUS_FILE: &str = "border-radius.css";
/// Typography mixin definitions.
pub const TYPOGRAPHY_FILE: &str = "typography.css";

const CANDIDATE_DIRS: &[&str] = &["tokens", "design/tokens"];

/// A resolved directory of token-definition files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDir {
    root: PathBuf,
}

impl TokenDir {
    /// Wraps a known token directory without any discovery.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locates the token-definition directory for a project.
    ///
    /// Checks the [`TOKENS_DIR_ENV`] override first, then the conventional
    /// locations under `project_root`. Returns `None` when the project does
    /// not carry the token package; the caller is expected to disable the
    /// rule set entirely in that case.
    pub fn locate(project_root: &Path) -> Option<Self> {
        if let Ok(dir) = std::env::var(TOKENS_DIR_ENV) {
            let path = PathBuf::from(dir);
            if path.is_dir() {
                return Some(Self { root: path });
            }
        }

        CANDIDATE_DIRS
            .iter()
            .map(|candidate| project_root.join(candidate))
            .find(|path| path.is_dir())
            .map(|root| Self { root })
    }

    /// The resolved directory path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Reads and parses one custom-property file.
    ///
    /// A missing or unreadable file logs a warning on the operator channel
    /// and yields an empty table; matching against an empty table simply
    /// finds nothing.
    pub fn load_properties(&self, file: &str) -> TokenMap {
        match fs::read_to_string(self.root.join(file)) {
            Ok(css) => parse_custom_properties(&css),
            Err(err) => {
                log::warn!(
                    "token source '{}' unavailable ({}); add the design-token package to the project",
                    self.root.join(file).display(),
                    err
                );
                TokenMap::new()
            }
        }
    }

    /// Reads and parses one mixin-definition file, with the same
    /// soft-failure behavior as [`TokenDir::load_properties`].
    pub fn load_mixins(&self, file: &str) -> MixinMap {
        match fs::read_to_string(self.root.join(file)) {
            Ok(css) => parse_mixins(&css),
            Err(err) => {
                log::warn!(
                    "token source '{}' unavailable ({}); add the design-token package to the project",
                    self.root.join(file).display(),
                    err
                );
                MixinMap::new()
            }
        }
    }
}
