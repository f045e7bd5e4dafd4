//! Minimal stylesheet node model.
//!
//! The crate does not parse CSS. It reads a tree of these nodes, which any
//! parser adapter can produce: only the raw text fields (`name`, `params`,
//! `prop`, `value`, `selector`) and child lists are consulted, never
//! positions or semantics. The tree is owned by the caller and is never
//! mutated here.

use std::path::PathBuf;

use crate::error::Result;

/// A single node in the stylesheet tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    AtRule(AtRule),
    Decl(Declaration),
    Rule(Rule),
}

/// An at-rule such as `@custom-media --small (max-width: 30em);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Rule name without the `@`, e.g. `custom-media`.
    pub name: String,
    /// Everything between the name and the `;` or `{`.
    pub params: String,
    /// Body nodes, empty for bodiless at-rules.
    pub nodes: Vec<Node>,
}

/// A property declaration such as `--brand-color: red;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
}

/// A rule with a body, such as `--colors: { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
}

/// The root of a parsed stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Root {
    pub nodes: Vec<Node>,
    /// Path of the file the stylesheet was parsed from, if any. Used by the
    /// built-in exporters to derive a default destination.
    pub source_file: Option<PathBuf>,
}

impl AtRule {
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Vec::new(),
        }
    }
}

impl Declaration {
    pub fn new(prop: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: value.into(),
        }
    }
}

impl Rule {
    pub fn new(selector: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            selector: selector.into(),
            nodes,
        }
    }
}

impl Node {
    /// Child nodes, empty for declarations.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::AtRule(at_rule) => &at_rule.nodes,
            Node::Decl(_) => &[],
            Node::Rule(rule) => &rule.nodes,
        }
    }
}

impl Root {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            source_file: None,
        }
    }

    pub fn with_source(nodes: Vec<Node>, source_file: impl Into<PathBuf>) -> Self {
        Self {
            nodes,
            source_file: Some(source_file.into()),
        }
    }

    /// Visit every node in document order, parents before their children.
    ///
    /// Stops at the first error returned by the visitor. The traversal is
    /// read-only; there is no backtracking and no node is visited twice.
    pub fn walk(&self, mut visit: impl FnMut(&Node) -> Result<()>) -> Result<()> {
        walk_nodes(&self.nodes, &mut visit)
    }
}

fn walk_nodes(nodes: &[Node], visit: &mut impl FnMut(&Node) -> Result<()>) -> Result<()> {
    for node in nodes {
        visit(node)?;
        walk_nodes(node.children(), visit)?;
    }
    Ok(())
}
