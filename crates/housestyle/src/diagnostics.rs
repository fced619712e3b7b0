//! Diagnostics emitted by the lint rules.

use std::fmt;

use serde::Deserialize;

/// How a surfaced diagnostic should be treated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// One reported problem, positioned in the original source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Identifier of the rule that produced this, e.g.
    /// `housestyle/use-vars`.
    pub rule: &'static str,
    pub message: String,
    pub severity: Severity,
    /// 1-based line in the original source.
    pub line: u32,
    /// 1-based column in the original source.
    pub column: u32,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} ({})",
            self.line, self.column, self.severity, self.message, self.rule
        )
    }
}
