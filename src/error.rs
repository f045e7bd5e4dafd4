//! Error types for variable extraction and export.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the extraction pipeline and the built-in exporters.
///
/// Declarations that merely resemble a custom-variable shape but fail the
/// stricter pattern are not errors; they simply never match.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A custom property set contained no child declarations to merge.
    ///
    /// Raised by the default set assigner. Callers that want a different
    /// policy (e.g. an empty object) can install their own
    /// `custom_property_set_assigner`.
    #[error("custom property set `--{name}:` has no declarations to merge")]
    EmptyPropertySet { name: String },

    /// Writing the exported artifact failed.
    #[error("failed to write variables to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Serializing the variable table failed.
    #[error("failed to serialize variable table")]
    Serialize(#[from] serde_json::Error),

    /// A caller-supplied assigner failed. The cause is propagated as-is.
    #[error("assigner failed")]
    Assigner(#[source] anyhow::Error),

    /// A caller-supplied exporter failed. The cause is propagated as-is.
    #[error("exporter failed")]
    Exporter(#[source] anyhow::Error),
}
