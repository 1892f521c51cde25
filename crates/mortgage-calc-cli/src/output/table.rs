use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_scalar, split_result};

/// Format output as tables using the tabled crate: one Field/Value table for
/// the headline figures, then one table per series.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_result_tables(result, map),
            _ => print_fields(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
        },
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_result_tables(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    let (scalars, series) = split_result(result);
    print_fields(scalars);

    for (name, rows) in series {
        println!("\n{}:", name.replace('_', " "));
        print_rows(rows);
    }

    if let Some(Value::String(message)) = envelope.get("message") {
        println!("\n{}", message);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(fields: Vec<(&str, &Value)>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.to_string(), format_scalar(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for item in rows {
            println!("{}", format_scalar(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| row.get(h).map(format_scalar).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));
}
