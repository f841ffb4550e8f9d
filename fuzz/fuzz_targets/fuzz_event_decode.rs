#![no_main]

use actstat_accumulator::{Accumulator, ActionAccumulator};
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text must never panic, and anything it accepts must be
// safe to record.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(event) = actstat_codec::decode_event(input) {
        assert!(!event.action.is_empty());
        assert!(event.time.is_finite());

        let acc = ActionAccumulator::new();
        acc.record(&event.action, event.time);
        let snapshot = acc.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].average, event.time);

        let encoded = actstat_codec::encode_snapshot(&snapshot);
        assert!(encoded.starts_with('[') && encoded.ends_with(']'));
    }
});
