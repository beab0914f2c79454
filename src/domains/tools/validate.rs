//! Argument validation against a tool's declared input shape.
//!
//! The shape of a tool's input is a Rust struct deriving both `Deserialize`
//! and `JsonSchema`. The schema advertised to clients is generated from it,
//! and validation deserializes the raw arguments into it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// Arguments rejected by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid arguments for tool '{tool}': {reason}")]
pub struct ValidationError {
    /// Name of the tool the arguments were meant for.
    pub tool: String,

    /// What was wrong, including the offending field where known.
    pub reason: String,
}

impl ValidationError {
    pub fn new(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

/// Validate raw arguments and turn them into the typed parameters `P`.
///
/// Missing or `null` arguments are treated as an empty object. Keys not
/// declared by `P` are ignored.
pub fn validate<P>(tool: &str, raw: Option<Value>) -> Result<P, ValidationError>
where
    P: DeserializeOwned,
{
    let object = match raw {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(object)) => object,
        Some(other) => {
            return Err(ValidationError::new(
                tool,
                format!("expected an object, got {}", kind_of(&other)),
            ));
        }
    };

    serde_json::from_value(Value::Object(object))
        .map_err(|e| ValidationError::new(tool, e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
