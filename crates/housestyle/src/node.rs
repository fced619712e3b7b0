//! The narrow stylesheet-AST surface the lint engine consumes.
//!
//! The host linting engine owns stylesheet parsing and walking; the types
//! here are the contract it hands over per rule: a [`StyleRule`] with an
//! ordered list of children, each a [`Declaration`] or (after fixing) a
//! [`MixinReference`]. Raw formatting metadata travels with each node so
//! fixes can be rendered back without disturbing the author's layout.
//!
//! Nested rules are not represented — the host walker delivers every rule,
//! nested or not, as its own [`StyleRule`].

use std::fmt;

/// A 1-based line/column position in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Raw formatting captured around a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclRaws {
    /// Whitespace between the previous node and the property name.
    pub before: String,
    /// Text between the property name and the value, usually `": "`.
    pub between: String,
}

impl Default for DeclRaws {
    fn default() -> Self {
        Self {
            before: "\n    ".to_string(),
            between: ": ".to_string(),
        }
    }
}

/// A property/value pair inside a rule.
///
/// The engine treats everything except `value` as read-only; `value` is
/// rewritten in place when a fix is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub raws: DeclRaws,
    /// Position of the property's first character.
    pub start: Position,
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
            raws: DeclRaws::default(),
            start: Position::default(),
        }
    }

    /// Column of the value's first character, derived from the property
    /// name and the raw separator. Diagnostic offsets into the value are
    /// added on top of this.
    pub fn value_start_column(&self) -> u32 {
        self.start.column + (self.prop.chars().count() + self.raws.between.chars().count()) as u32
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{};",
            self.raws.before, self.prop, self.raws.between, self.value
        )
    }
}

/// A `@mixin name;` reference inserted by the typography fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixinReference {
    pub name: String,
    /// Whitespace between the previous node and the statement.
    pub before: String,
}

impl fmt::Display for MixinReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@mixin {};", self.before, self.name)
    }
}

/// One ordered child of a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleChild {
    Declaration(Declaration),
    MixinReference(MixinReference),
}

impl fmt::Display for RuleChild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleChild::Declaration(decl) => write!(f, "{decl}"),
            RuleChild::MixinReference(mixin) => write!(f, "{mixin}"),
        }
    }
}

/// A style rule and its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub children: Vec<RuleChild>,
    /// Whitespace between the last child and the closing brace.
    pub after: String,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            children: Vec::new(),
            after: "\n".to_string(),
        }
    }

    /// Appends a declaration child, builder-style.
    pub fn with_declaration(mut self, decl: Declaration) -> Self {
        self.children.push(RuleChild::Declaration(decl));
        self
    }

    /// The rule's declaration children, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.children.iter().filter_map(|child| match child {
            RuleChild::Declaration(decl) => Some(decl),
            _ => None,
        })
    }

    /// Mutable view of the rule's declaration children.
    pub fn declarations_mut(&mut self) -> impl Iterator<Item = &mut Declaration> {
        self.children.iter_mut().filter_map(|child| match child {
            RuleChild::Declaration(decl) => Some(decl),
            _ => None,
        })
    }

    /// Leading whitespace of the first child, used to format an inserted
    /// mixin reference the way the rule already indents.
    pub fn first_child_before(&self) -> Option<&str> {
        self.children.first().map(|child| match child {
            RuleChild::Declaration(decl) => decl.raws.before.as_str(),
            RuleChild::MixinReference(mixin) => mixin.before.as_str(),
        })
    }

    /// Drops every declaration the predicate rejects, keeping other
    /// children untouched.
    pub fn retain_declarations(&mut self, mut keep: impl FnMut(&Declaration) -> bool) {
        self.children.retain(|child| match child {
            RuleChild::Declaration(decl) => keep(decl),
            _ => true,
        });
    }

    /// Inserts a mixin reference as the rule's first child.
    pub fn prepend_mixin(&mut self, reference: MixinReference) {
        self.children.insert(0, RuleChild::MixinReference(reference));
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "{}}}", self.after)
    }
}
