//! Immutable token and mixin lookup tables.
//!
//! This module provides:
//!
//! - [`TokenCategory`]: the four token categories and the fixed
//!   property-applicability table
//! - [`TokenRegistry`]: the read-only aggregate of all category tables and
//!   the typography mixin table, built once per lint run
//!
//! A registry is constructed up front and injected into the engine; the
//! "token package unavailable" condition is therefore a constructor-time
//! fact, not a runtime check scattered through call sites.

mod category;
#[allow(clippy::module_inception)]
mod registry;

pub use category::TokenCategory;
pub use registry::TokenRegistry;
