// src/types/response.rs
//! Shape checks for provider response bodies

use serde_json::Value;

use crate::error::{LookupError, Result};

/// Array stored under `field`. `Ok(None)` when the field is absent or null,
/// an error when it is present but not an array.
pub fn optional_array<'a>(body: &'a Value, field: &str, endpoint: &str) -> Result<Option<&'a [Value]>> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(other) => Err(LookupError::malformed(
            endpoint,
            format!("field `{}` is {} instead of an array", field, json_kind(other)),
        )),
    }
}

/// Array stored under `field`; absence is an error
pub fn required_array<'a>(body: &'a Value, field: &str, endpoint: &str) -> Result<&'a [Value]> {
    optional_array(body, field, endpoint)?
        .ok_or_else(|| LookupError::malformed(endpoint, format!("missing `{}` array", field)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_array() {
        let body = json!({ "people": [1, 2], "empty": null, "bad": "x" });
        assert_eq!(optional_array(&body, "people", "/p").unwrap().unwrap().len(), 2);
        assert!(optional_array(&body, "missing", "/p").unwrap().is_none());
        assert!(optional_array(&body, "empty", "/p").unwrap().is_none());
        assert!(optional_array(&body, "bad", "/p").unwrap_err().is_malformed());
    }

    #[test]
    fn test_required_array() {
        let body = json!({ "people": {} });
        let err = required_array(&body, "people", "/p").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response format from /p: field `people` is an object instead of an array"
        );
        assert!(required_array(&json!({}), "people", "/p").unwrap_err().is_malformed());
    }
}
