//! cssvar-export - extract CSS custom variables and export them.
//!
//! Reads a parsed stylesheet tree, collects every custom media query,
//! custom property, custom property set and custom selector into one
//! ordered variable table, and writes the table through a pluggable
//! exporter: an ES module of `export const` lines, a JSON document, or a
//! caller-supplied serializer. The transform is read-only over the tree.
//!
//! ## Module Structure
//!
//! - `css`: the input node model and the document-order walk
//! - `matcher`: shape recognition for the four declaration forms
//! - `assign`: default assigners and the camelCase conversion
//! - `collect`: the single traversal populating the variable table
//! - `options`: per-invocation configuration
//! - `export`: destination resolution and the built-in serializers
//! - `error`: error types
//!
//! ```no_run
//! use cssvar_export::css::{AtRule, Node, Root};
//! use cssvar_export::{Exporter, Options, export_custom_variables};
//!
//! # async fn demo() -> cssvar_export::Result<()> {
//! let root = Root::with_source(
//!     vec![Node::AtRule(AtRule::new(
//!         "custom-media",
//!         "--small (max-width: 30em)",
//!     ))],
//!     "style.css",
//! );
//! let options = Options {
//!     exporter: Exporter::Json,
//!     ..Options::default()
//! };
//! // Writes {"small": "(max-width: 30em)"} to style.css.json
//! export_custom_variables(&root, &options).await
//! # }
//! ```

pub mod assign;
pub mod collect;
pub mod css;
pub mod error;
pub mod export;
pub mod matcher;
pub mod options;

pub use collect::collect;
pub use error::{Error, Result};
pub use export::{BoxFuture, CustomExporter, Exporter};
pub use options::{Options, SetAssigner, ValueAssigner};

/// The accumulated mapping of extracted names to values or sub-mappings.
///
/// Keys are unique with last-write-wins semantics; iteration order is
/// first-assignment order (serde_json's `preserve_order`), which the
/// built-in exporters rely on for reproducible output.
pub type VariableTable = serde_json::Map<String, serde_json::Value>;

/// Run the whole transform: collect variables from `root`, then export
/// the table through the exporter selected by `options`.
///
/// The returned future resolves when the export completes and carries any
/// write failure; nothing is retried and no partial output is cleaned up.
pub async fn export_custom_variables(root: &css::Root, options: &Options) -> Result<()> {
    let variables = collect::collect(root, options)?;
    export::export(&variables, options, root).await
}
