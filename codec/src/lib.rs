//! Wire format for actstat.
//!
//! Inbound events are JSON objects carrying an `action` string and a `time`
//! number (or numeric string). Outbound statistics are a JSON array of
//! `{"action", "avg"}` objects. All input validation happens here, so the
//! accumulator only ever sees well-formed samples.

pub mod decode;
pub mod encode;
pub mod error;

pub use decode::{decode_event, ActionEvent};
pub use encode::encode_snapshot;
pub use error::CodecError;
