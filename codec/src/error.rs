use thiserror::Error;

/// Reasons an inbound event is rejected before it reaches the accumulator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {field} must be {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field {field} cannot be converted to a number: {value}")]
    UnconvertibleValue { field: &'static str, value: String },
}
