use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(render_text(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Human-readable rendering: scalars print bare, arrays one item per line,
/// objects as `key: value` lines with nested lists indented underneath.
fn render_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(inline_cell)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => {
            let mut lines = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::Array(items) if items.is_empty() => {}
                    Value::Array(items) => {
                        lines.push(format!("{key}:"));
                        lines.extend(items.iter().map(|item| format!("  - {}", inline_cell(item))));
                    }
                    Value::String(text) if text.contains('\n') => {
                        lines.push(format!("{key}:"));
                        lines.extend(text.lines().map(|line| format!("  {line}")));
                    }
                    other => lines.push(format!("{key}: {}", inline_cell(other))),
                }
            }
            lines.join("\n")
        }
        scalar => inline_cell(scalar),
    }
}

fn inline_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| format!("{k}={}", inline_cell(v)))
            .collect::<Vec<_>>()
            .join(" | "),
        Value::Array(items) => items
            .iter()
            .map(inline_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
