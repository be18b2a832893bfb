use serde_json::Value;

/// Canonical text of a JSON scalar.
///
/// Strings are taken verbatim, numbers and booleans use their JSON text and
/// `null` is the empty string. Arrays and objects have no scalar form; the
/// error carries the JSON kind for the caller's message.
pub fn scalar_to_string(value: &Value) -> Result<String, &'static str> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) => Err("array"),
        Value::Object(_) => Err("object"),
    }
}
