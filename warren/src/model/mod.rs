pub mod document;
pub mod relationship;
pub mod resource;

use serde_json::{Map, Value};

/// Meta-data object, can contain any data
pub type Meta = Map<String, Value>;
/// Identifiers are kept as the JSON value the backend sent (usually a string)
pub type Id = Value;

/// JSON truthiness, the test the response shape checks are built on:
/// `null`, `false`, `0` and `""` are absent, everything else (`[]` and `{}` included) is present
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Looks up `key` on `value` and only returns it when it is present in the [is_present] sense
pub fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_present(v))
}

#[cfg(test)]
mod tests {
    use super::is_present;
    use serde_json::json;

    #[test]
    fn truthiness_test() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(0.0)));
        assert!(!is_present(&json!("")));

        assert!(is_present(&json!(true)));
        assert!(is_present(&json!(1)));
        assert!(is_present(&json!("0")));
        assert!(is_present(&json!([])));
        assert!(is_present(&json!({})));
    }
}
