//! Variable table exporters.
//!
//! Exactly one exporter runs per invocation, after the traversal has
//! fully populated the table. The built-ins write a single file; a custom
//! exporter may perform any effect. The write is the crate's only
//! asynchronous boundary.

pub mod js;
pub mod json;

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use crate::VariableTable;
use crate::css::Root;
use crate::error::{Error, Result};
use crate::options::Options;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A caller-supplied exporter.
///
/// Receives the final variable table, the invocation options and the tree
/// root; the crate imposes no contract on its effect beyond the returned
/// future. Implemented for any compatible closure, so
/// `Exporter::Custom(Arc::new(|variables, options, root| ...))` works
/// without a named type.
pub trait CustomExporter: Send + Sync {
    fn export<'a>(
        &'a self,
        variables: &'a VariableTable,
        options: &'a Options,
        root: &'a Root,
    ) -> BoxFuture<'a, Result<()>>;
}

impl<F> CustomExporter for F
where
    F: for<'a> Fn(&'a VariableTable, &'a Options, &'a Root) -> BoxFuture<'a, Result<()>>
        + Send
        + Sync,
{
    fn export<'a>(
        &'a self,
        variables: &'a VariableTable,
        options: &'a Options,
        root: &'a Root,
    ) -> BoxFuture<'a, Result<()>> {
        self(variables, options, root)
    }
}

/// Exporter selection.
#[derive(Clone, Default)]
pub enum Exporter {
    /// ES module of `export const` lines (the default).
    #[default]
    Js,
    /// 2-space-indented JSON document.
    Json,
    /// Caller-supplied exporter.
    Custom(Arc<dyn CustomExporter>),
}

impl fmt::Debug for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exporter::Js => f.write_str("Js"),
            Exporter::Json => f.write_str("Json"),
            Exporter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Run the exporter selected by `options` over the finished table.
pub async fn export(variables: &VariableTable, options: &Options, root: &Root) -> Result<()> {
    match &options.exporter {
        Exporter::Js => js::export(variables, options, root).await,
        Exporter::Json => json::export(variables, options, root).await,
        Exporter::Custom(custom) => custom.export(variables, options, root).await,
    }
}

/// Resolve the output path for a built-in exporter: the explicit
/// destination, else the root's source file with `suffix` appended
/// (`style.css` becomes `style.css.js`), else the literal fallback.
pub(crate) fn destination(
    options: &Options,
    root: &Root,
    suffix: &str,
    fallback: &str,
) -> PathBuf {
    if let Some(path) = &options.destination {
        return path.clone();
    }
    match &root.source_file {
        Some(file) => {
            let mut path = file.clone().into_os_string();
            path.push(suffix);
            PathBuf::from(path)
        }
        None => PathBuf::from(fallback),
    }
}

pub(crate) async fn write(path: &Path, contents: String) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::css::Root;

    #[test]
    fn test_destination_prefers_explicit_override() {
        let options = Options {
            destination: Some("out.js".into()),
            ..Options::default()
        };
        let root = Root::with_source(Vec::new(), "style.css");
        assert_eq!(
            destination(&options, &root, ".js", "custom-variables.js"),
            PathBuf::from("out.js")
        );
    }

    #[test]
    fn test_destination_appends_suffix_to_source_file() {
        let options = Options::default();
        let root = Root::with_source(Vec::new(), "a/style.css");
        assert_eq!(
            destination(&options, &root, ".js", "custom-variables.js"),
            PathBuf::from("a/style.css.js")
        );
    }

    #[test]
    fn test_destination_falls_back_without_source() {
        let options = Options::default();
        let root = Root::default();
        assert_eq!(
            destination(&options, &root, ".json", "custom-variables.json"),
            PathBuf::from("custom-variables.json")
        );
    }
}
