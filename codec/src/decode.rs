//! Inbound event decoding.

use serde_json::{Map, Value};
use tracing::debug;

use crate::CodecError;

const EVENT: &str = "event";
const ACTION: &str = "action";
const TIME: &str = "time";

/// A validated `(action, time)` sample, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub action: String,
    pub time: f64,
}

/// Decode one serialized event such as `{"action": "jump", "time": 100}`.
///
/// The event itself must be a JSON object; anything else is a
/// [`CodecError::TypeMismatch`] on `event`.
///
/// Unknown keys are ignored. `time` may be a JSON number or a string holding
/// a number; the result is always finite. Fields are checked in a fixed order:
/// presence of `action`, presence of `time`, type of `action`, then
/// conversion of `time`.
pub fn decode_event(input: &str) -> Result<ActionEvent, CodecError> {
    let result = parse_event(input);
    if let Err(err) = &result {
        debug!(error = %err, "rejected event");
    }
    result
}

fn parse_event(input: &str) -> Result<ActionEvent, CodecError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| CodecError::MalformedInput(e.to_string()))?;
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(CodecError::TypeMismatch {
                field: EVENT,
                expected: "an object",
                found: type_name(&other),
            })
        }
    };

    let action = required(&object, ACTION)?;
    let time = required(&object, TIME)?;

    let action = match action {
        Value::String(s) if s.is_empty() => return Err(CodecError::MissingField(ACTION)),
        Value::String(s) => s.clone(),
        other => {
            return Err(CodecError::TypeMismatch {
                field: ACTION,
                expected: "a string",
                found: type_name(other),
            })
        }
    };

    Ok(ActionEvent {
        action,
        time: to_number(time)?,
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, CodecError> {
    object.get(field).ok_or(CodecError::MissingField(field))
}

fn to_number(value: &Value) -> Result<f64, CodecError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(CodecError::UnconvertibleValue {
            field: TIME,
            value: value.to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
