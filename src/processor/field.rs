//! Fallible access to fields of a decoded JSON tree

use serde_json::Value;

use crate::error::{Error, Result};

/// Human readable name of a JSON value's kind
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Look up `key` in a top-level object.
///
/// Returns `Ok(None)` when the key is absent so callers decide whether that
/// is an error.
pub fn field<'v>(value: &'v Value, key: &str) -> Result<Option<&'v Value>> {
    let object = value.as_object().ok_or(Error::NotAnObject {
        found: value_kind(value),
    })?;
    Ok(object.get(key))
}

/// Look up a required string field.
///
/// Absent keys give [`Error::MissingField`]; `null` or any non-string value
/// gives [`Error::FieldType`].
pub fn str_field<'v>(value: &'v Value, key: &str) -> Result<&'v str> {
    let found = field(value, key)?.ok_or_else(|| Error::MissingField(key.to_string()))?;
    found.as_str().ok_or_else(|| Error::FieldType {
        field: key.to_string(),
        expected: "string",
        found: value_kind(found),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_field_present() {
        let value = json!({"symbol": "BTCUSDT", "price": "65000.12"});
        assert_eq!(str_field(&value, "price").unwrap(), "65000.12");
    }

    #[test]
    fn test_str_field_missing() {
        let value = json!({"symbol": "BTCUSDT"});
        match str_field(&value, "price") {
            Err(Error::MissingField(key)) => assert_eq!(key, "price"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_str_field_null_is_not_empty_string() {
        let value = json!({"price": null});
        assert!(matches!(
            str_field(&value, "price"),
            Err(Error::FieldType { found: "null", .. })
        ));
    }

    #[test]
    fn test_str_field_number() {
        let value = json!({"price": 65000.12});
        assert!(matches!(
            str_field(&value, "price"),
            Err(Error::FieldType {
                expected: "string",
                found: "number",
                ..
            })
        ));
    }

    #[test]
    fn test_top_level_array() {
        let value = json!([{"price": "1"}]);
        assert!(matches!(
            str_field(&value, "price"),
            Err(Error::NotAnObject { found: "array" })
        ));
    }

    #[test]
    fn test_optional_field() {
        let value = json!({"price": "1.0"});
        assert!(field(&value, "symbol").unwrap().is_none());
        assert_eq!(field(&value, "price").unwrap(), Some(&json!("1.0")));
    }
}
