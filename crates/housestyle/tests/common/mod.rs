//! Shared fixtures for the integration suites: realistic token sources
//! and a tiny flat-CSS reader that stands in for the host walker,
//! producing `StyleRule`s with real positions and raws.
#![allow(dead_code)]

use housestyle::{DeclRaws, Declaration, MixinReference, Position, RuleChild, StyleRule, TokenRegistry};
use housestyle_tokens::{parse_custom_properties, parse_mixins};

pub const GAPS_CSS: &str = ":root {
    --gap-2xs: 4px;
    --gap-xs: 8px;
    --gap-s: 12px;
    --gap-m: 16px;
    --gap-l: 20px;
    --gap-xl: 24px;
}";

pub const SHADOWS_CSS: &str = ":root {
    --shadow-xs: 0 0 4px rgba(11, 31, 53, 0.02), 0 2px 4px rgba(11, 31, 53, 0.04);
    --shadow-xs-hard: 0 0 4px rgba(11, 31, 53, 0.02), 0 2px 4px rgba(11, 31, 53, 0.04),
        0 2px 4px rgba(11, 31, 53, 0.16);
    --shadow-s: 0 4px 8px rgba(11, 31, 53, 0.04);
}";

pub const COLORS_CSS: &str = ":root {
    --color-light-text-primary: #0b1f35;
    --color-light-text-secondary: #6d7986;
    --color-light-bg-primary: #fff;
    --color-light-specialbg-secondary-grouped: #fff;
    --color-light-graphic-primary-inverted: #fff;
    --color-light-border-key: #0b1f35;
    --color-light-graphic-primary: #0b1f35;
    --color-light-bg-primary-inverted: #0b1f35;
    --color-light-border-primary: #dde1e6;
}";

pub const RADII_CSS: &str = ":root {
    --border-radius-s: 4px;
    --border-radius-m: 8px;
    --border-radius-l: 12px;
    --border-radius-xl: 16px;
    --border-radius-circle: 50%;
    --border-radius-pill: 100px;
}";

pub const TYPOGRAPHY_CSS: &str = "@define-mixin headline_xlarge {
    font-size: 48px;
    line-height: 64px;
    font-weight: 500;
}

@define-mixin paragraph_primary_small {
    font-size: 14px;
    line-height: 20px;
    font-weight: 400;
}

@define-mixin accent_primary_small {
    font-size: 14px;
    line-height: 20px;
    font-weight: 500;
}

@define-mixin action_primary_small {
    font-size: 14px;
    line-height: 20px;
    font-weight: 600;
}

@define-mixin styrene_headline {
    font-size: 40px;
    line-height: 56px;
    font-weight: 700;
}";

/// The registry every suite lints against.
pub fn registry() -> TokenRegistry {
    TokenRegistry::new(
        parse_custom_properties(GAPS_CSS),
        parse_custom_properties(SHADOWS_CSS),
        parse_custom_properties(COLORS_CSS),
        parse_custom_properties(RADII_CSS),
        parse_mixins(TYPOGRAPHY_CSS),
    )
}

struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: u32,
    column: u32,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Position of the next unconsumed character.
    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Reads fixture CSS into the rules the host walker would deliver:
/// outer rules first, then nested ones, each carrying only its direct
/// declarations.
pub fn parse_rules(source: &str) -> Vec<StyleRule> {
    let mut scanner = Scanner::new(source);
    let mut rules = Vec::new();

    loop {
        let mut selector = String::new();
        let mut opened = false;
        while let Some(c) = scanner.bump() {
            if c == '{' {
                opened = true;
                break;
            }
            selector.push(c);
        }
        if !opened {
            break;
        }
        parse_body(&mut scanner, selector.trim().to_string(), &mut rules);
    }

    rules
}

fn parse_body(scanner: &mut Scanner<'_>, selector: String, rules: &mut Vec<StyleRule>) {
    let mut rule = StyleRule::new(selector);
    let mut nested: Vec<StyleRule> = Vec::new();
    let mut before = String::new();

    loop {
        while matches!(scanner.peek(), Some(c) if c.is_whitespace()) {
            before.push(scanner.bump().unwrap());
        }
        match scanner.peek() {
            None => break,
            Some('}') => {
                scanner.bump();
                rule.after = std::mem::take(&mut before);
                break;
            }
            _ => {}
        }

        let start = scanner.position();
        let mut head = String::new();
        let mut terminator = None;
        while let Some(c) = scanner.peek() {
            if matches!(c, ':' | ';' | '{' | '}') {
                terminator = Some(c);
                break;
            }
            head.push(scanner.bump().unwrap());
        }

        match terminator {
            Some(':') => {
                scanner.bump();
                let mut between = String::from(":");
                while matches!(scanner.peek(), Some(' ') | Some('\t')) {
                    between.push(scanner.bump().unwrap());
                }
                let mut value = String::new();
                while let Some(c) = scanner.peek() {
                    if c == ';' {
                        scanner.bump();
                        break;
                    }
                    if c == '}' {
                        break;
                    }
                    value.push(scanner.bump().unwrap());
                }
                let mut decl = Declaration::new(head.trim_end(), value);
                decl.raws = DeclRaws {
                    before: std::mem::take(&mut before),
                    between,
                };
                decl.start = start;
                rule.children.push(RuleChild::Declaration(decl));
            }
            Some(';') => {
                scanner.bump();
                let statement = head.trim_end().to_string();
                let leading = std::mem::take(&mut before);
                if let Some(name) = statement.strip_prefix("@mixin ") {
                    rule.children.push(RuleChild::MixinReference(MixinReference {
                        name: name.trim().to_string(),
                        before: leading,
                    }));
                }
            }
            Some('{') => {
                scanner.bump();
                parse_body(scanner, head.trim().to_string(), &mut nested);
                before.clear();
            }
            _ => {
                // Trailing junk before the closing brace; drop it.
                continue;
            }
        }
    }

    rules.push(rule);
    rules.append(&mut nested);
}
