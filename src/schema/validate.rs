//! Field-by-field validation of untrusted JSON.
//!
//! Every parser walks the value in document order and stops at the
//! first constraint that doesn't hold, reporting it with a path like
//! `[2].title` so callers can tell exactly which field was wrong.
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{path}: Required")]
    Missing { path: String },

    #[error("{path}: Expected {expected}, received {received}")]
    InvalidType {
        path: String,
        expected: &'static str,
        received: &'static str,
    },

    #[error("{path}: {message}")]
    TooSmall { path: String, message: String },

    #[error("{path}: Invalid enum value. Expected {}, received '{received}'", .expected.join(" | "))]
    InvalidEnum {
        path: String,
        expected: &'static [&'static str],
        received: String,
    },
}

impl ValidationError {
    /// The path of the offending field
    pub fn path(&self) -> &str {
        match self {
            ValidationError::Missing { path }
            | ValidationError::InvalidType { path, .. }
            | ValidationError::TooSmall { path, .. }
            | ValidationError::InvalidEnum { path, .. } => path,
        }
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

pub fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::InvalidType {
        path: display_path(path),
        expected: "object",
        received: type_name(value),
    })
}

pub fn as_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ValidationError> {
    value.as_array().ok_or_else(|| ValidationError::InvalidType {
        path: display_path(path),
        expected: "array",
        received: type_name(value),
    })
}

/// Extract a required string field from an object.
pub fn required_str(
    obj: &Map<String, Value>,
    field: &str,
    parent: &str,
) -> Result<String, ValidationError> {
    let path = field_path(parent, field);
    match obj.get(field) {
        None => Err(ValidationError::Missing { path }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::InvalidType {
            path,
            expected: "string",
            received: type_name(other),
        }),
    }
}

/// Extract a required string field whose value must be one of `allowed`.
pub fn required_enum(
    obj: &Map<String, Value>,
    field: &str,
    parent: &str,
    allowed: &'static [&'static str],
) -> Result<String, ValidationError> {
    let value = required_str(obj, field, parent)?;
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEnum {
            path: field_path(parent, field),
            expected: allowed,
            received: value,
        })
    }
}

/// Reject empty strings with a caller supplied message.
pub fn non_empty(value: &str, path: &str, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::TooSmall {
            path: display_path(path),
            message: message.to_string(),
        });
    }
    Ok(())
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        String::from("(root)")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_reports_missing_fields() {
        let value = json!({"id": "1"});
        let obj = as_object(&value, "").unwrap();
        let err = required_str(obj, "title", "[0]").unwrap_err();
        assert_eq!(err, ValidationError::Missing { path: "[0].title".into() });
        assert_eq!(err.to_string(), "[0].title: Required");
    }

    #[test]
    fn it_reports_wrong_types() {
        let value = json!({"title": 42});
        let obj = as_object(&value, "").unwrap();
        let err = required_str(obj, "title", "").unwrap_err();
        assert_eq!(err.to_string(), "title: Expected string, received number");

        let value = json!({"title": null});
        let obj = as_object(&value, "").unwrap();
        let err = required_str(obj, "title", "").unwrap_err();
        assert_eq!(err.to_string(), "title: Expected string, received null");
    }

    #[test]
    fn it_rejects_values_outside_an_enum() {
        let value = json!({"type": "SYSTEM"});
        let obj = as_object(&value, "").unwrap();
        let err = required_enum(obj, "type", "[3]", &["USER", "ASSISTANT"]).unwrap_err();
        assert_eq!(err.path(), "[3].type");
        assert_eq!(
            err.to_string(),
            "[3].type: Invalid enum value. Expected USER | ASSISTANT, received 'SYSTEM'"
        );
    }

    #[test]
    fn it_names_the_root_for_top_level_errors() {
        let err = as_array(&json!({}), "").unwrap_err();
        assert_eq!(err.to_string(), "(root): Expected array, received object");
    }

    #[test]
    fn it_rejects_empty_strings() {
        assert!(non_empty("hi", "message", "Message cannot be empty").is_ok());
        let err = non_empty("", "message", "Message cannot be empty").unwrap_err();
        assert_eq!(err.to_string(), "message: Message cannot be empty");
    }
}
