//! Repeated substitution over one declaration value.
//!
//! A single declaration may hold several independently replaceable
//! literals (`padding: 8px 12px 4px 16px`). The rewriter drives the
//! matcher over a working copy of the value, substituting every hit so
//! the scan advances, while a ledger of prior edits maps each new hit
//! back to its offset in the *original* text. Reported columns therefore
//! never drift, no matter how many replacements of differing lengths came
//! before.

use crate::matcher::{find_token, TokenMatch};
use crate::registry::TokenRegistry;

/// Renders a variable name as a value reference.
pub fn format_reference(name: &str) -> String {
    format!("var({name})")
}

/// One applied edit: the raw offset in the working string at match time
/// and the length delta the replacement introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edit {
    start: isize,
    diff: isize,
}

/// Maps an offset in the working string back to the original text by
/// folding the ledger most-recent-first: every earlier edit that lies
/// before the offset contributed its length delta, so it is subtracted
/// back out.
fn original_offset(ledger: &[Edit], raw: usize) -> usize {
    let mut acc = raw as isize;
    for edit in ledger.iter().rev() {
        if acc > edit.start + edit.diff {
            acc -= edit.diff;
        }
    }
    acc.max(0) as usize
}

/// One literal found during a rewrite pass, positioned in the original
/// value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Byte offset of the literal in the original (one-lined) value.
    pub offset: usize,
    /// The literal that was found.
    pub literal: String,
    /// Replacement variable names, best first.
    pub candidates: Vec<String>,
    /// Whether the fix consumed this match (exact match, fix mode).
    pub fixed: bool,
}

impl Substitution {
    pub fn is_exact(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// Result of rewriting one declaration value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RewriteOutcome {
    /// Every literal found, in discovery order.
    pub substitutions: Vec<Substitution>,
    /// The value with all exact matches replaced, present only when fix
    /// mode applied at least one.
    pub fixed_value: Option<String>,
}

/// Finds every replaceable literal in `value` for `prop`.
///
/// In fix mode, exact matches are marked consumed and the returned
/// [`RewriteOutcome::fixed_value`] carries the rewritten text; ambiguous
/// matches are never applied and always surface to the caller.
pub fn rewrite_value(
    registry: &TokenRegistry,
    prop: &str,
    value: &str,
    fix: bool,
) -> RewriteOutcome {
    let mut working = value.to_string();
    let mut ledger: Vec<Edit> = Vec::new();
    let mut substitutions: Vec<Substitution> = Vec::new();

    // One substitution per original byte is the theoretical ceiling; a
    // table whose literals keep re-matching their own replacements is an
    // internal invariant violation, not something to loop on.
    let cap = value.len() + 1;

    while let Some(found) = find_token(registry, &working, prop) {
        if substitutions.len() >= cap {
            debug_assert!(
                false,
                "rewrite of '{prop}: {value}' exceeded {cap} substitutions"
            );
            log::error!(
                "internal error: rewrite of '{}' did not converge after {} substitutions; \
                 stopping the pass",
                prop,
                cap
            );
            break;
        }

        let TokenMatch {
            start,
            literal,
            candidates,
        } = found;
        let replacement = format_reference(&candidates[0]);
        let offset = original_offset(&ledger, start);
        let fixed = fix && candidates.len() == 1;

        working.replace_range(start..start + literal.len(), &replacement);
        ledger.push(Edit {
            start: start as isize,
            diff: replacement.len() as isize - literal.len() as isize,
        });
        substitutions.push(Substitution {
            offset,
            literal,
            candidates,
            fixed,
        });
    }

    let fixed_value = substitutions
        .iter()
        .any(|sub| sub.fixed)
        .then(|| apply_exact(value, &substitutions));

    RewriteOutcome {
        substitutions,
        fixed_value,
    }
}

/// Applies the consumed substitutions onto the original value,
/// left-to-right. Only exact matches ever land here, so an ambiguous
/// placeholder used for scan progress can never leak into a fix.
fn apply_exact(value: &str, substitutions: &[Substitution]) -> String {
    let mut ordered: Vec<&Substitution> = substitutions.iter().filter(|sub| sub.fixed).collect();
    ordered.sort_by_key(|sub| sub.offset);

    let mut out = value.to_string();
    let mut drift: isize = 0;
    for sub in ordered {
        let at = (sub.offset as isize + drift) as usize;
        debug_assert!(
            out[at..].starts_with(&sub.literal),
            "ledger offset {} does not line up with literal '{}'",
            sub.offset,
            sub.literal
        );
        let replacement = format_reference(&sub.candidates[0]);
        out.replace_range(at..at + sub.literal.len(), &replacement);
        drift += replacement.len() as isize - sub.literal.len() as isize;
    }
    out
}
