//! Design-token lint rules for stylesheets.
//!
//! `housestyle` flags hardcoded values — spacing, shadows, colors,
//! border radii — that a design-system variable should replace, and
//! groups of typography declarations a named mixin should replace. The
//! host linting engine owns parsing and walking; this crate owns the
//! matching and substitution:
//!
//! - [`TokenRegistry`]: immutable lookup tables built once per run from
//!   the token-definition sources (parsed by the `housestyle-tokens`
//!   crate)
//! - [`Linter`]: the orchestrator driving the five rules over each
//!   [`StyleRule`] the walker delivers
//! - [`Diagnostic`]: positioned reports, with columns always referring to
//!   the original source text even after in-line fixes shifted it
//!
//! # Example
//!
//! ```rust
//! use housestyle::{Declaration, LintConfig, Linter, StyleRule, TokenRegistry};
//! use housestyle_tokens::parse_custom_properties;
//!
//! let registry = TokenRegistry::new(
//!     parse_custom_properties(":root {\n    --gap-xs: 8px;\n}"),
//!     Default::default(),
//!     Default::default(),
//!     Default::default(),
//!     Default::default(),
//! );
//!
//! let config = LintConfig { fix: true, ..LintConfig::default() };
//! let linter = Linter::new(registry, config);
//!
//! let mut rule = StyleRule::new(".card")
//!     .with_declaration(Declaration::new("padding-top", "8px"));
//! let diagnostics = linter.lint_rule(&mut rule);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(rule.to_string(), ".card {\n    padding-top: var(--gap-xs);\n}");
//! ```

mod diagnostics;
mod linter;
mod matcher;
mod node;
mod registry;
mod rewrite;
pub mod rules;
mod typography;

pub use diagnostics::{Diagnostic, Severity};
pub use linter::Linter;
pub use matcher::{find_token, TokenMatch};
pub use node::{DeclRaws, Declaration, MixinReference, Position, RuleChild, StyleRule};
pub use registry::{TokenCategory, TokenRegistry};
pub use rewrite::{format_reference, rewrite_value, RewriteOutcome, Substitution};
pub use rules::LintConfig;
pub use typography::{
    collect_typography, resolve_mixins, MixinMatch, TypographyMatch, TYPOGRAPHY_PROPS,
};
