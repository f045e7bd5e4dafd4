//! JSON document exporter.

use tracing::debug;

use crate::VariableTable;
use crate::css::Root;
use crate::error::Result;
use crate::options::Options;

pub async fn export(variables: &VariableTable, options: &Options, root: &Root) -> Result<()> {
    let path = super::destination(options, root, ".json", "custom-variables.json");
    let contents = render(variables)?;
    debug!(path = %path.display(), entries = variables.len(), "writing JSON document");
    super::write(&path, contents).await
}

/// Render the table as a 2-space-indented JSON document with a trailing
/// newline. Keys appear in the table's iteration order.
pub fn render(variables: &VariableTable) -> Result<String> {
    let contents = serde_json::to_string_pretty(variables)?;
    Ok(format!("{contents}\n"))
}
