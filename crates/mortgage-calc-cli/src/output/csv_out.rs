use serde_json::{Map, Value};
use std::io::{self, Write};

use super::{format_scalar, split_result};

/// Write output as CSV to stdout.
///
/// A result carrying a series (schedule rows, cumulative savings) is
/// written as that series, one record per month; otherwise the result is a
/// two-column field/value listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(writer: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    let result = value.as_object().and_then(|m| m.get("result")).unwrap_or(value);
    match result {
        Value::Object(map) => {
            let (scalars, series) = split_result(map);
            match series.first() {
                Some((_, rows)) => write_rows(&mut wtr, rows)?,
                None => write_fields(&mut wtr, scalars)?,
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows)?,
        other => wtr.write_record([format_scalar(other)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_fields<W: Write>(wtr: &mut csv::Writer<W>, fields: Vec<(&str, &Value)>) -> Result<(), csv::Error> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.to_string(), format_scalar(val)])?;
    }
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return Ok(());
    };
    let headers: Vec<&String> = first.keys().collect();
    wtr.write_record(headers.iter().map(|h| h.as_str()))?;
    for row in rows.iter().filter_map(Value::as_object) {
        wtr.write_record(headers.iter().map(|h| row_value(row, h)))?;
    }
    Ok(())
}

fn row_value(row: &Map<String, Value>, key: &str) -> String {
    row.get(key).map(format_scalar).unwrap_or_default()
}
