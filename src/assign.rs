//! Default assigners and identifier conversion.
//!
//! An assigner converts one matched declaration into the mapping entries
//! merged into the variable table. Each of the four shapes can be given a
//! caller-supplied assigner through [`Options`](crate::Options); the
//! functions here are what runs when no override is installed.

use serde_json::Value;

use crate::VariableTable;
use crate::css::Node;
use crate::error::{Error, Result};
use crate::matcher;

/// Convert a hyphen-case identifier to camelCase.
///
/// Each run of one or more hyphens followed by a character collapses to
/// that character uppercased; a trailing hyphen run contributes nothing.
/// Already-camelCase input passes through unchanged.
pub fn camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut hyphen_run = false;
    for ch in ident.chars() {
        if ch == '-' {
            hyphen_run = true;
        } else if hyphen_run {
            hyphen_run = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Default assigner for media queries, properties and selectors.
///
/// Returns the single entry `{ camelCaseName: value }`.
pub fn default_assigner(name: &str, value: &str, _node: &Node) -> Result<VariableTable> {
    let mut entries = VariableTable::new();
    entries.insert(camel_case(name), Value::String(value.to_string()));
    Ok(entries)
}

/// Default assigner for custom property sets.
///
/// Each child declaration contributes `{ childCamelName: childValue }`,
/// keyed by the child's own property name (with any `--` prefix stripped);
/// non-declaration children are skipped. The merged object is wrapped as a
/// single entry under the set's own camelCased identifier.
///
/// A set with no contributing declarations fails with
/// [`Error::EmptyPropertySet`].
pub fn default_property_set_assigner(
    name: &str,
    children: &[Node],
    _node: &Node,
) -> Result<VariableTable> {
    let mut merged = VariableTable::new();
    for child in children {
        if let Node::Decl(decl) = child {
            let child_name = matcher::custom_property_name(&decl.prop).unwrap_or(&decl.prop);
            merged.insert(camel_case(child_name), Value::String(decl.value.clone()));
        }
    }

    if merged.is_empty() {
        return Err(Error::EmptyPropertySet {
            name: name.to_string(),
        });
    }

    let mut entries = VariableTable::new();
    entries.insert(camel_case(name), Value::Object(merged));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::css::{AtRule, Declaration, Rule};

    fn any_node() -> Node {
        Node::AtRule(AtRule::new("custom-media", "--x (min-width: 1px)"))
    }

    #[test]
    fn test_camel_case_hyphen_runs() {
        assert_eq!(camel_case("foo-bar-baz"), "fooBarBaz");
        assert_eq!(camel_case("foo--bar"), "fooBar");
        assert_eq!(camel_case("foo"), "foo");
    }

    #[test]
    fn test_camel_case_trailing_hyphen() {
        assert_eq!(camel_case("foo-"), "foo");
        assert_eq!(camel_case("foo--"), "foo");
    }

    #[test]
    fn test_camel_case_idempotent() {
        assert_eq!(camel_case("fooBarBaz"), "fooBarBaz");
        assert_eq!(camel_case(&camel_case("foo-bar")), "fooBar");
    }

    #[test]
    fn test_default_assigner_single_entry() {
        let entries = default_assigner("brand-color", "red", &any_node()).unwrap();
        assert_eq!(Value::Object(entries), json!({ "brandColor": "red" }));
    }

    #[test]
    fn test_property_set_assigner_wraps_children() {
        let children = vec![
            Node::Decl(Declaration::new("--primary", "red")),
            Node::Decl(Declaration::new("--secondary", "blue")),
        ];
        let entries = default_property_set_assigner("colors", &children, &any_node()).unwrap();
        assert_eq!(
            Value::Object(entries),
            json!({ "colors": { "primary": "red", "secondary": "blue" } })
        );
    }

    #[test]
    fn test_property_set_assigner_camel_cases_plain_children() {
        let children = vec![
            Node::Decl(Declaration::new("background-color", "red")),
            Node::Decl(Declaration::new("border-top-width", "1px")),
        ];
        let entries = default_property_set_assigner("toolbar-theme", &children, &any_node()).unwrap();
        assert_eq!(
            Value::Object(entries),
            json!({ "toolbarTheme": { "backgroundColor": "red", "borderTopWidth": "1px" } })
        );
    }

    #[test]
    fn test_property_set_assigner_skips_non_declarations() {
        let children = vec![
            Node::Rule(Rule::new(".nested", Vec::new())),
            Node::Decl(Declaration::new("--primary", "red")),
        ];
        let entries = default_property_set_assigner("colors", &children, &any_node()).unwrap();
        assert_eq!(
            Value::Object(entries),
            json!({ "colors": { "primary": "red" } })
        );
    }

    #[test]
    fn test_property_set_assigner_empty_set_fails() {
        let err = default_property_set_assigner("colors", &[], &any_node()).unwrap_err();
        match err {
            Error::EmptyPropertySet { name } => assert_eq!(name, "colors"),
            other => panic!("expected EmptyPropertySet, got {other:?}"),
        }
    }

    #[test]
    fn test_property_set_assigner_only_non_declarations_fails() {
        let children = vec![Node::Rule(Rule::new(".nested", Vec::new()))];
        let err = default_property_set_assigner("colors", &children, &any_node()).unwrap_err();
        assert!(matches!(err, Error::EmptyPropertySet { .. }));
    }
}
