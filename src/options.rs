//! Invocation configuration.

use std::path::PathBuf;

use crate::VariableTable;
use crate::css::Node;
use crate::error::Result;
use crate::export::Exporter;

/// Assigner for shapes whose payload is raw text (media query expression,
/// property value, selector list): `(identifier, payload, node)`.
pub type ValueAssigner = Box<dyn Fn(&str, &str, &Node) -> Result<VariableTable> + Send + Sync>;

/// Assigner for custom property sets, whose payload is the child node
/// list: `(identifier, children, node)`.
pub type SetAssigner = Box<dyn Fn(&str, &[Node], &Node) -> Result<VariableTable> + Send + Sync>;

/// Per-invocation configuration. Constructed once, never mutated.
///
/// Every field is optional in spirit: `None` assigners select the defaults
/// in [`assign`](crate::assign), the exporter defaults to
/// [`Exporter::Js`], and an empty `variables` table means no seed.
///
/// ```
/// use cssvar_export::{Exporter, Options};
///
/// let options = Options {
///     exporter: Exporter::Json,
///     destination: Some("vars.json".into()),
///     ..Options::default()
/// };
/// # let _ = options;
/// ```
#[derive(Default)]
pub struct Options {
    pub custom_media_query_assigner: Option<ValueAssigner>,
    pub custom_property_assigner: Option<ValueAssigner>,
    pub custom_property_set_assigner: Option<SetAssigner>,
    pub custom_selector_assigner: Option<ValueAssigner>,
    /// Which serializer runs after the traversal.
    pub exporter: Exporter,
    /// Explicit output path for the built-in exporters, overriding the
    /// path derived from the root's source file.
    pub destination: Option<PathBuf>,
    /// Seed entries, merged into before any matched node. Later matches
    /// override seed entries on key collision.
    pub variables: VariableTable,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field(
                "custom_media_query_assigner",
                &self.custom_media_query_assigner.is_some(),
            )
            .field(
                "custom_property_assigner",
                &self.custom_property_assigner.is_some(),
            )
            .field(
                "custom_property_set_assigner",
                &self.custom_property_set_assigner.is_some(),
            )
            .field(
                "custom_selector_assigner",
                &self.custom_selector_assigner.is_some(),
            )
            .field("exporter", &self.exporter)
            .field("destination", &self.destination)
            .field("variables", &self.variables)
            .finish()
    }
}
