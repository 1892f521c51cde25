use serde_json::Value;

use super::format_scalar;

/// Headline figure for each command, in priority order.
const PRIORITY_KEYS: [&str; 5] = [
    "monthly_savings",
    "annual_rate_percent",
    "monthly_payment",
    "minimum_repayment",
    "status",
];

/// Print just the headline number, suitable for shell pipelines.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if map.get("status").and_then(Value::as_str) == Some("infeasible") {
            let minimum = map.get("minimum_repayment").map(format_scalar).unwrap_or_default();
            return format!("infeasible (minimum repayment {minimum})");
        }

        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return format_scalar(val);
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}
