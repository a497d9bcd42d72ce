//! Shape validation for raw submissions.
//!
//! Raw input arrives as loosely-typed JSON. A submission is accepted only when
//! it is an object whose key set is exactly the five attribute keys and every
//! value is a string. Empty strings are accepted; only absent or `null`
//! values count as missing.

use serde_json::{Map, Value};

use crate::input::{ATTRIBUTE_COUNT, Attribute, UserInput};

/// Why a raw submission was rejected.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input is null or undefined")]
    NullInput,

    #[error("Input is not valid JSON: {0}")]
    MalformedJson(String),

    #[error("Input must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Missing required attributes: {}", .0.join(", "))]
    MissingAttributes(Vec<String>),

    #[error("Unexpected attributes: {}", .0.join(", "))]
    UnexpectedAttributes(Vec<String>),

    #[error("Attribute {key} must be a string, found {found}")]
    NonStringAttribute { key: String, found: &'static str },
}

/// Validate a raw submission into a [`UserInput`].
///
/// Checks run in a fixed order so the reported error is deterministic:
/// key count, then missing/null attributes, then unexpected keys, then
/// value types. Fewer than five keys always reports the missing names; more
/// than five always reports the extras.
pub fn validate_input(raw: &Value) -> Result<UserInput, ValidationError> {
    let map = match raw {
        Value::Null => return Err(ValidationError::NullInput),
        Value::Object(map) => map,
        other => {
            return Err(ValidationError::NotAnObject {
                found: value_kind(other),
            });
        }
    };

    let missing = missing_attributes(map);
    let unexpected = unexpected_keys(map);

    if map.len() < ATTRIBUTE_COUNT {
        return Err(ValidationError::MissingAttributes(missing));
    }
    if map.len() > ATTRIBUTE_COUNT {
        return Err(ValidationError::UnexpectedAttributes(unexpected));
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingAttributes(missing));
    }
    if !unexpected.is_empty() {
        return Err(ValidationError::UnexpectedAttributes(unexpected));
    }

    let take = |attr: Attribute| -> Result<String, ValidationError> {
        match map.get(attr.key()) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(ValidationError::NonStringAttribute {
                key: attr.key().to_string(),
                found: value_kind(other),
            }),
            None => Err(ValidationError::MissingAttributes(vec![attr.key().to_string()])),
        }
    };

    Ok(UserInput::new(
        take(Attribute::TimeOfDay)?,
        take(Attribute::Weather)?,
        take(Attribute::ConflictStyle)?,
        take(Attribute::SnackFlavor)?,
        take(Attribute::Ambition)?,
    ))
}

/// Parse JSON text and validate it.
pub fn validate_json_str(raw: &str) -> Result<UserInput, ValidationError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
    validate_input(&value)
}

/// Required keys that are absent or `null`, in canonical order.
fn missing_attributes(map: &Map<String, Value>) -> Vec<String> {
    Attribute::ALL
        .into_iter()
        .filter(|attr| matches!(map.get(attr.key()), None | Some(Value::Null)))
        .map(|attr| attr.key().to_string())
        .collect()
}

/// Keys that are not one of the five attributes.
fn unexpected_keys(map: &Map<String, Value>) -> Vec<String> {
    map.keys()
        .filter(|key| Attribute::from_key(key).is_none())
        .cloned()
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
