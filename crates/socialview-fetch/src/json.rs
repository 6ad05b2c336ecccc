//! Descend-or-absent accessors over untyped upstream JSON.
//!
//! Upstream payloads are inconsistently shaped: keys go missing, objects turn
//! into `null`, counters arrive as numbers or numeric strings. These helpers
//! never panic and never assume a key exists; every lookup returns `None` (or
//! an empty slice) at the first missing link.

use serde_json::Value;

/// Follows `path` through nested objects.
///
/// Returns `None` at the first missing key, non-object step, or `null` value.
#[must_use]
pub fn descend<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .filter(|v| !v.is_null())
}

/// Returns `value` unless it is `null` or an empty string/array/object.
#[must_use]
pub fn non_empty(value: &Value) -> Option<&Value> {
    let empty = match value {
        Value::Null => true,
        Value::Bool(_) | Value::Number(_) => false,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    };
    (!empty).then_some(value)
}

/// Returns the string at `key`, or `None` if absent, not a string, or empty.
#[must_use]
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Returns the string at `key`, or an empty string.
#[must_use]
pub fn string_or_empty(value: &Value, key: &str) -> String {
    str_field(value, key).unwrap_or_default().to_owned()
}

/// Reads an unsigned counter that may arrive as a number or numeric string.
#[must_use]
pub fn u64_field(value: &Value, key: &str) -> Option<u64> {
    match value.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a signed integer that may arrive as a number or numeric string.
#[must_use]
pub fn i64_field(value: &Value, key: &str) -> Option<i64> {
    match value.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[must_use]
pub fn bool_field(value: &Value, key: &str) -> Option<bool> {
    value.get(key).and_then(Value::as_bool)
}

/// Returns the array at `key`, or an empty slice if absent or not an array.
#[must_use]
pub fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Renders a scalar (string, number, bool) at `key` as a string.
#[must_use]
pub fn scalar_string(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn descend_follows_nested_objects() {
        let v = json!({"a": {"b": {"c": 7}}});
        assert_eq!(descend(&v, &["a", "b", "c"]), Some(&json!(7)));
    }

    #[test]
    fn descend_stops_at_missing_key() {
        let v = json!({"a": {"x": 1}});
        assert_eq!(descend(&v, &["a", "b", "c"]), None);
    }

    #[test]
    fn descend_treats_null_as_absent() {
        let v = json!({"a": {"b": null}});
        assert_eq!(descend(&v, &["a", "b"]), None);
        assert_eq!(descend(&v, &["a", "b", "c"]), None);
    }

    #[test]
    fn descend_through_non_object_is_absent() {
        let v = json!({"a": [1, 2]});
        assert_eq!(descend(&v, &["a", "b"]), None);
    }

    #[test]
    fn non_empty_filters_empty_containers() {
        assert!(non_empty(&json!({})).is_none());
        assert!(non_empty(&json!([])).is_none());
        assert!(non_empty(&json!("")).is_none());
        assert!(non_empty(&json!(null)).is_none());
        assert!(non_empty(&json!({"k": 1})).is_some());
        assert!(non_empty(&json!([1])).is_some());
    }

    #[test]
    fn u64_field_accepts_numeric_strings() {
        let v = json!({"a": 12, "b": "34", "c": "x", "d": -1});
        assert_eq!(u64_field(&v, "a"), Some(12));
        assert_eq!(u64_field(&v, "b"), Some(34));
        assert_eq!(u64_field(&v, "c"), None);
        assert_eq!(u64_field(&v, "d"), None);
        assert_eq!(u64_field(&v, "missing"), None);
    }

    #[test]
    fn str_field_ignores_empty_and_non_strings() {
        let v = json!({"a": "x", "b": "", "c": 3});
        assert_eq!(str_field(&v, "a"), Some("x"));
        assert_eq!(str_field(&v, "b"), None);
        assert_eq!(str_field(&v, "c"), None);
    }

    #[test]
    fn array_field_defaults_to_empty() {
        let v = json!({"items": [1, 2], "other": {}});
        assert_eq!(array_field(&v, "items").len(), 2);
        assert!(array_field(&v, "other").is_empty());
        assert!(array_field(&v, "missing").is_empty());
    }

    #[test]
    fn scalar_string_renders_numbers() {
        let v = json!({"t": 2, "s": "BUSINESS", "n": null});
        assert_eq!(scalar_string(&v, "t").as_deref(), Some("2"));
        assert_eq!(scalar_string(&v, "s").as_deref(), Some("BUSINESS"));
        assert_eq!(scalar_string(&v, "n"), None);
    }
}
