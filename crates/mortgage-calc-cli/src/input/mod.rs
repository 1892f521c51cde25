pub mod file;
pub mod stdin;

use serde_json::Value;

/// Request given with `--input` or piped on stdin, if any.
pub fn read_request(path: Option<&str>) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Some(file::read_json(path)?)),
        None => stdin::read_stdin(),
    }
}

/// Fill a field the request leaves out with the configured value. When
/// both sides are objects, missing keys are filled one by one so a partial
/// section still picks up the rest of the configuration.
pub fn fill_default(request: &mut Value, key: &str, default: Value) {
    let Value::Object(map) = request else {
        return;
    };
    if !map.contains_key(key) {
        map.insert(key.to_string(), default);
        return;
    }
    if let (Some(Value::Object(given)), Value::Object(defaults)) = (map.get_mut(key), default) {
        for (k, v) in defaults {
            given.entry(k).or_insert(v);
        }
    }
}
