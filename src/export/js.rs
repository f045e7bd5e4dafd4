//! ES module exporter.
//!
//! One line per table entry, `export const <key> = <value>;`, with object
//! keys left unquoted at every nesting depth. String values keep their
//! JSON quoting and escaping.

use serde_json::Value;
use tracing::debug;

use crate::VariableTable;
use crate::css::Root;
use crate::error::Result;
use crate::options::Options;

pub async fn export(variables: &VariableTable, options: &Options, root: &Root) -> Result<()> {
    let path = super::destination(options, root, ".js", "custom-variables.js");
    let contents = render(variables);
    debug!(path = %path.display(), entries = variables.len(), "writing ES module");
    super::write(&path, contents).await
}

/// Render the table as ES module source. Entries keep the table's
/// iteration order; the final line is newline-terminated.
pub fn render(variables: &VariableTable) -> String {
    let mut out = String::new();
    for (key, value) in variables {
        out.push_str("export const ");
        out.push_str(key);
        out.push_str(" = ");
        render_value(value, &mut out);
        out.push_str(";\n");
    }
    out
}

fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            out.push('{');
            for (index, (key, value)) in map.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                render_value(value, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                render_value(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn table(value: Value) -> VariableTable {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_render_string_values() {
        let variables = table(json!({
            "small": "(max-width: 30em)",
            "brandColor": "red",
        }));
        assert_eq!(
            render(&variables),
            "export const small = \"(max-width: 30em)\";\n\
             export const brandColor = \"red\";\n"
        );
    }

    #[test]
    fn test_render_unquotes_nested_object_keys() {
        let variables = table(json!({
            "colors": { "primary": "red", "secondary": "blue" },
        }));
        assert_eq!(
            render(&variables),
            "export const colors = {primary:\"red\",secondary:\"blue\"};\n"
        );
    }

    #[test]
    fn test_render_keeps_key_lookalikes_in_strings_quoted() {
        // A value that merely looks like an object key must not lose its
        // quotes.
        let variables = table(json!({ "tricky": "{\"a\":1}" }));
        assert_eq!(
            render(&variables),
            "export const tricky = \"{\\\"a\\\":1}\";\n"
        );
    }

    #[test]
    fn test_render_arrays_and_scalars() {
        let variables = table(json!({
            "sizes": [1, 2, 3],
            "nested": [{ "a": true }],
            "nothing": null,
        }));
        assert_eq!(
            render(&variables),
            "export const sizes = [1,2,3];\n\
             export const nested = [{a:true}];\n\
             export const nothing = null;\n"
        );
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(render(&VariableTable::new()), "");
    }
}
