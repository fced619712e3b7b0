//! Parsing for design-token definition sources.
//!
//! This crate turns the raw text of token-definition files into the lookup
//! structures the `housestyle` lint rules match against:
//!
//! - [`parse_custom_properties`]: `--name: value;` declarations into a
//!   value-keyed table of variable names
//! - [`parse_mixins`]: `@define-mixin` blocks into per-mixin property maps
//! - [`TokenDir`]: discovery and soft-failure loading of the definition
//!   files themselves
//!
//! All values are canonicalized with [`to_one_line`] before storage so a
//! multiline definition and a multiline stylesheet value compare equal.

mod normalize;
mod parse;
mod source;

pub use normalize::to_one_line;
pub use parse::{
    parse_custom_properties, parse_mixins, MixinMap, MixinProps, TokenMap, LEGACY_MIXIN_PREFIXES,
};
pub use source::{
    TokenDir, COLOR_FILE, RADIUS_FILE, SHADOW_FILE, SPACING_FILE, TOKENS_DIR_ENV, TYPOGRAPHY_FILE,
};
