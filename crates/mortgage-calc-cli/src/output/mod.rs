pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Split a result object into scalar fields and series (arrays of rows such
/// as a schedule or cumulative savings).
pub(crate) fn split_result(result: &Map<String, Value>) -> (Vec<(&str, &Value)>, Vec<(&str, &[Value])>) {
    let mut scalars = Vec::new();
    let mut series = Vec::new();
    for (key, val) in result {
        match val {
            Value::Array(rows) if rows.iter().all(Value::is_object) && !rows.is_empty() => {
                series.push((key.as_str(), rows.as_slice()))
            }
            _ => scalars.push((key.as_str(), val)),
        }
    }
    (scalars, series)
}

pub(crate) fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
