//! The token value grammar.
//!
//! A value string is either a palette reference or a number followed by a
//! unit alias:
//!
//! ```text
//! value     = palette-ref | measure
//! palette-ref = KEY "palette" ...
//! measure   = NUMBER UNIT
//! ```
//!
//! Tokens are separated by any run of whitespace. The unit is everything
//! after the number, re-joined with single spaces, so `"2 inner   gutter"`
//! reads the unit `inner gutter`. Unit aliases are case-sensitive.

use std::fmt;

use crate::error::ParseError;

/// Parsed form of a base token value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    /// Reference to `base.palette[ref]`.
    PaletteRef(String),
    Px(f64),
    Rem(f64),
    Em(f64),
    /// Multiple of the base spacing unit.
    Base(f64),
    InnerGutter(f64),
    /// A unitless number.
    Absolute(f64),
}

/// Unit aliases and the node each one builds. Many-to-one.
const UNIT_ALIASES: &[(&str, fn(f64) -> ValueNode)] = &[
    ("px", ValueNode::Px),
    ("pixel", ValueNode::Px),
    ("pixels", ValueNode::Px),
    ("rem", ValueNode::Rem),
    ("root", ValueNode::Rem),
    ("em", ValueNode::Em),
    ("parent", ValueNode::Em),
    ("base", ValueNode::Base),
    ("spacing", ValueNode::Base),
    ("innerGutter", ValueNode::InnerGutter),
    ("inner gutter", ValueNode::InnerGutter),
    ("abs", ValueNode::Absolute),
    ("absolute", ValueNode::Absolute),
];

/// Parses a token value string into a [`ValueNode`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] when the first token is not a finite
/// number, and [`ParseError::UnknownUnit`] when the rest is not a known unit.
///
/// # Example
///
/// ```rust
/// use tokensmith::{parse_value, ValueNode};
///
/// assert_eq!(parse_value("black palette").unwrap(), ValueNode::PaletteRef("black".into()));
/// assert_eq!(parse_value("1.5 em").unwrap(), ValueNode::Em(1.5));
/// assert_eq!(parse_value("4 inner gutter").unwrap(), ValueNode::InnerGutter(4.0));
/// ```
pub fn parse_value(input: &str) -> Result<ValueNode, ParseError> {
    let mut parts = input.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    // The palette form never goes through number parsing.
    if rest.first() == Some(&"palette") {
        return Ok(ValueNode::PaletteRef(head.to_string()));
    }

    let value = head
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            input: input.to_string(),
        })?;

    let unit = rest.join(" ");
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == unit)
        .map(|(_, build)| build(value))
        .ok_or(ParseError::UnknownUnit {
            input: input.to_string(),
            unit,
        })
}

/// Maps a value node to its CSS text.
///
/// Palette references become `var(--color-<ref>)`, lengths keep their unit,
/// `Base` and `InnerGutter` point at their shared variables, and `Absolute`
/// is the bare number.
pub fn resolve_value_node(node: &ValueNode) -> String {
    match node {
        ValueNode::PaletteRef(reference) => format!("var(--color-{})", reference),
        ValueNode::Px(value) => format!("{}px", value),
        ValueNode::Rem(value) => format!("{}rem", value),
        ValueNode::Em(value) => format!("{}em", value),
        ValueNode::Base(_) => "var(--space-base)".to_string(),
        ValueNode::InnerGutter(_) => "var(--inner-gutter)".to_string(),
        ValueNode::Absolute(value) => value.to_string(),
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&resolve_value_node(self))
    }
}

impl std::str::FromStr for ValueNode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s)
    }
}
