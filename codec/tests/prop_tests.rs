use proptest::prelude::*;
use serde_json::json;

use actstat_codec::{decode_event, CodecError};

proptest! {
    /// Arbitrary text is either decoded or rejected, never a panic.
    #[test]
    fn decode_never_panics(input in ".*") {
        let _ = decode_event(&input);
    }

    /// Any well-formed event decodes to the same action and time.
    #[test]
    fn well_formed_events_decode(action in "[^\u{0}]{1,32}", quarters in -1_000_000i32..1_000_000) {
        let time = f64::from(quarters) / 4.0;
        let input = json!({ "action": action, "time": time }).to_string();
        let event = decode_event(&input).unwrap();
        prop_assert_eq!(event.action, action);
        prop_assert_eq!(event.time, time);
    }

    /// Integer times given as strings convert exactly.
    #[test]
    fn numeric_strings_convert(action in "[a-z]{1,8}", time in -1_000_000i64..1_000_000) {
        let input = json!({ "action": action, "time": time.to_string() }).to_string();
        prop_assert_eq!(decode_event(&input).unwrap().time, time as f64);
    }

    /// Alphabetic strings never pass as a time.
    #[test]
    fn alphabetic_time_is_unconvertible(time in "[g-mo-z]{1,10}") {
        let input = json!({ "action": "jump", "time": time }).to_string();
        let is_unconvertible = matches!(
            decode_event(&input),
            Err(CodecError::UnconvertibleValue { .. })
        );
        prop_assert!(is_unconvertible);
    }
}
