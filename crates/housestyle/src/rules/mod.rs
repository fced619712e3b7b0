//! The externally visible lint rules.
//!
//! Four of the five rules are one matching/rewriting engine behind two
//! reporting policies: the `use-…` rules surface exact matches (a single
//! candidate), the `use-one-of-…` rules surface ambiguous ones. The fifth,
//! `no-dark-colors`, is a standalone palette check. Rule modules only
//! decide what to surface and how to fix; all matching lives in
//! [`crate::matcher`], [`crate::rewrite`] and [`crate::typography`].

pub(crate) mod dark_colors;
pub mod messages;
pub(crate) mod mixins;
pub(crate) mod tokens;

use serde::Deserialize;

use crate::diagnostics::Severity;

/// `housestyle/use-vars`: hardcoded values with a unique token match.
pub const USE_VARS: &str = "housestyle/use-vars";
/// `housestyle/use-one-of-vars`: hardcoded values several tokens could
/// replace.
pub const USE_ONE_OF_VARS: &str = "housestyle/use-one-of-vars";
/// `housestyle/use-mixins`: typography declarations matching one mixin.
pub const USE_MIXINS: &str = "housestyle/use-mixins";
/// `housestyle/use-one-of-mixins`: typography declarations matching
/// several mixins.
pub const USE_ONE_OF_MIXINS: &str = "housestyle/use-one-of-mixins";
/// `housestyle/no-dark-colors`: direct references to dark-palette colors.
pub const NO_DARK_COLORS: &str = "housestyle/no-dark-colors";

/// Which match outcomes a rule surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPolicy {
    /// Report only unambiguous matches (a single candidate).
    Exact,
    /// Report only ambiguous matches (several candidates).
    OneOfMany,
}

impl ReportPolicy {
    pub(crate) fn accepts(self, candidates: usize) -> bool {
        match self {
            ReportPolicy::Exact => candidates == 1,
            ReportPolicy::OneOfMany => candidates > 1,
        }
    }
}

/// Enabled rules and shared lint options, as handed down from the host
/// configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LintConfig {
    pub use_vars: bool,
    pub use_one_of_vars: bool,
    pub use_mixins: bool,
    pub use_one_of_mixins: bool,
    pub no_dark_colors: bool,
    /// Apply unambiguous fixes instead of reporting them.
    pub fix: bool,
    pub severity: Severity,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            use_vars: true,
            use_one_of_vars: true,
            use_mixins: true,
            use_one_of_mixins: true,
            no_dark_colors: true,
            fix: false,
            severity: Severity::default(),
        }
    }
}

impl LintConfig {
    /// Whether any token-value rule is enabled.
    pub(crate) fn wants_tokens(&self) -> bool {
        self.use_vars || self.use_one_of_vars
    }

    /// Whether any typography rule is enabled.
    pub(crate) fn wants_mixins(&self) -> bool {
        self.use_mixins || self.use_one_of_mixins
    }
}
