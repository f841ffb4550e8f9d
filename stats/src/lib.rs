//! Average time per action, fed by serialized events.
//!
//! [`ActionStatistics`] accepts JSON events like
//! `{"action": "jump", "time": 100}` from any number of threads and reports
//! the mean `time` of every action as `[{"action": "jump", "avg": 150}, ...]`.
//! Malformed events are rejected before they reach the accumulator.

pub mod config;
pub mod error;

pub use actstat_accumulator::{
    Accumulator, ActionAccumulator, ActionAverage, ActionRecord, PerActionAccumulator,
};
pub use actstat_codec::{ActionEvent, CodecError};
pub use config::{LockStrategy, StatsConfig};
pub use error::StatsError;

use tracing::{info, trace};

/// Thread-safe running averages keyed by action name.
pub struct ActionStatistics {
    accumulator: Box<dyn Accumulator>,
}

impl ActionStatistics {
    pub fn new(config: &StatsConfig) -> Self {
        let accumulator: Box<dyn Accumulator> = match config.lock_strategy {
            LockStrategy::Global => {
                Box::new(ActionAccumulator::with_capacity(config.initial_capacity))
            }
            LockStrategy::PerAction => {
                Box::new(PerActionAccumulator::with_capacity(config.initial_capacity))
            }
        };
        info!(
            strategy = ?config.lock_strategy,
            capacity = config.initial_capacity,
            "action statistics created"
        );
        Self { accumulator }
    }

    /// Record one serialized event.
    ///
    /// The event must be a JSON object with a string `action` and a numeric
    /// `time` (a numeric string is accepted too); other keys are ignored. On
    /// error nothing is recorded.
    pub fn add_action(&self, input: &str) -> Result<(), CodecError> {
        let event = actstat_codec::decode_event(input)?;
        self.record(&event);
        Ok(())
    }

    /// Record an already-decoded event.
    pub fn record(&self, event: &ActionEvent) {
        trace!(action = %event.action, time = event.time, "recording sample");
        self.accumulator.record(&event.action, event.time);
    }

    /// Every action's average, serialized as a JSON array of
    /// `{"action", "avg"}` objects. Entry order is unspecified.
    pub fn get_stats(&self) -> String {
        actstat_codec::encode_snapshot(&self.snapshot())
    }

    pub fn snapshot(&self) -> Vec<ActionAverage> {
        self.accumulator.snapshot()
    }

    pub fn accumulator(&self) -> &dyn Accumulator {
        self.accumulator.as_ref()
    }
}

impl Default for ActionStatistics {
    fn default() -> Self {
        Self::new(&StatsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_event_leaves_statistics_untouched() {
        let stats = ActionStatistics::default();
        stats.add_action(r#"{"action":"jump","time":100}"#).unwrap();
        assert!(stats.add_action(r#"{"action":"jump","time":"abc"}"#).is_err());
        assert!(stats.add_action(r#"{"action":"run"}"#).is_err());

        let jump = stats.accumulator().get("jump").unwrap();
        assert_eq!(jump.count(), 1);
        assert!(stats.accumulator().get("run").is_none());
    }

    #[test]
    fn empty_statistics_encode_as_empty_array() {
        assert_eq!(ActionStatistics::default().get_stats(), "[]");
    }

    #[test]
    fn per_action_strategy_is_honoured() {
        let config = StatsConfig {
            lock_strategy: LockStrategy::PerAction,
            ..StatsConfig::default()
        };
        let stats = ActionStatistics::new(&config);
        stats.add_action(r#"{"action":"run","time":"75"}"#).unwrap();
        assert_eq!(stats.snapshot()[0].average, 75.0);
    }
}
