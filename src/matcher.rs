//! Custom-variable shape detection.
//!
//! Four mutually exclusive shapes are recognized from raw node text:
//! - `@custom-media --name <queries>` - custom media query
//! - `--name: value` - custom property
//! - `--name: { ... }` - custom property set (selector ends with `:`)
//! - `@custom-selector :--name <selectors>` - custom selector
//!
//! Matching is pure text matching; no CSS validation happens here. A node
//! that resembles a shape but fails the pattern (empty identifier, missing
//! payload) simply does not match.

use std::sync::LazyLock;

use regex::Regex;

use crate::css::{AtRule, Declaration, Node, Rule};

static CUSTOM_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--([_a-zA-Z]+[_a-zA-Z0-9-]*)$").unwrap());
static CUSTOM_PROPERTY_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--([_a-zA-Z]+[_a-zA-Z0-9-]*):$").unwrap());
static CUSTOM_MEDIA_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--([_a-zA-Z]+[_a-zA-Z0-9-]*)\s+(.+)$").unwrap());
static CUSTOM_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:--([_a-zA-Z]+[_a-zA-Z0-9-]*)\s+(.+)$").unwrap());

/// A recognized custom-variable declaration, borrowing out of the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<'a> {
    MediaQuery { name: &'a str, queries: &'a str },
    Property { name: &'a str, value: &'a str },
    PropertySet { name: &'a str, children: &'a [Node] },
    Selector { name: &'a str, selectors: &'a str },
}

impl<'a> Match<'a> {
    /// Classify a node, or `None` when it declares no custom variable.
    pub fn of(node: &'a Node) -> Option<Self> {
        match node {
            Node::AtRule(at_rule) => match_at_rule(at_rule),
            Node::Decl(decl) => match_property(decl),
            Node::Rule(rule) => match_property_set(rule),
        }
    }
}

fn match_at_rule(at_rule: &AtRule) -> Option<Match<'_>> {
    if at_rule.name == "custom-media" {
        let caps = CUSTOM_MEDIA_QUERY.captures(&at_rule.params)?;
        return Some(Match::MediaQuery {
            name: caps.get(1).unwrap().as_str(),
            queries: caps.get(2).unwrap().as_str(),
        });
    }
    if at_rule.name == "custom-selector" {
        let caps = CUSTOM_SELECTOR.captures(&at_rule.params)?;
        return Some(Match::Selector {
            name: caps.get(1).unwrap().as_str(),
            selectors: caps.get(2).unwrap().as_str(),
        });
    }
    None
}

fn match_property(decl: &Declaration) -> Option<Match<'_>> {
    let caps = CUSTOM_PROPERTY.captures(&decl.prop)?;
    Some(Match::Property {
        name: caps.get(1).unwrap().as_str(),
        value: &decl.value,
    })
}

fn match_property_set(rule: &Rule) -> Option<Match<'_>> {
    let caps = CUSTOM_PROPERTY_SET.captures(&rule.selector)?;
    Some(Match::PropertySet {
        name: caps.get(1).unwrap().as_str(),
        children: &rule.nodes,
    })
}

/// Extract the bare identifier from a `--`-prefixed property name.
///
/// Used by the default set assigner so that `--primary` and `primary`
/// both key the child entry as `primary`.
pub fn custom_property_name(prop: &str) -> Option<&str> {
    CUSTOM_PROPERTY
        .captures(prop)
        .map(|caps| caps.get(1).unwrap().as_str())
}
