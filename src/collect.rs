//! Single-pass variable collection.
//!
//! One read-only walk over the tree: every node is classified by the
//! matcher, matched nodes are dispatched to the corresponding assigner,
//! and the returned entries are merged into the table with
//! last-write-wins per key. Document order is load-bearing: it defines
//! override precedence among colliding keys.

use tracing::{debug, trace};

use crate::VariableTable;
use crate::assign;
use crate::css::{Node, Root};
use crate::error::Result;
use crate::matcher::Match;
use crate::options::Options;

/// Walk `root` and return the populated variable table.
///
/// The table starts as a copy of the configured seed. Assigners only see
/// nodes of the shape they are registered for, and each matched node is
/// dispatched exactly once.
pub fn collect(root: &Root, options: &Options) -> Result<VariableTable> {
    let mut variables = options.variables.clone();

    root.walk(|node| {
        let Some(matched) = Match::of(node) else {
            return Ok(());
        };
        let entries = dispatch(matched, node, options)?;
        merge(&mut variables, entries);
        Ok(())
    })?;

    debug!(entries = variables.len(), "collected custom variables");
    Ok(variables)
}

fn dispatch(matched: Match<'_>, node: &Node, options: &Options) -> Result<VariableTable> {
    match matched {
        Match::MediaQuery { name, queries } => {
            trace!(name, "matched custom media query");
            match &options.custom_media_query_assigner {
                Some(assigner) => assigner(name, queries, node),
                None => assign::default_assigner(name, queries, node),
            }
        }
        Match::Property { name, value } => {
            trace!(name, "matched custom property");
            match &options.custom_property_assigner {
                Some(assigner) => assigner(name, value, node),
                None => assign::default_assigner(name, value, node),
            }
        }
        Match::PropertySet { name, children } => {
            trace!(name, "matched custom property set");
            match &options.custom_property_set_assigner {
                Some(assigner) => assigner(name, children, node),
                None => assign::default_property_set_assigner(name, children, node),
            }
        }
        Match::Selector { name, selectors } => {
            trace!(name, "matched custom selector");
            match &options.custom_selector_assigner {
                Some(assigner) => assigner(name, selectors, node),
                None => assign::default_assigner(name, selectors, node),
            }
        }
    }
}

fn merge(variables: &mut VariableTable, entries: VariableTable) {
    for (key, value) in entries {
        variables.insert(key, value);
    }
}
