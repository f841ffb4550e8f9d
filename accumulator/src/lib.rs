//! Thread-safe running averages keyed by action name.
//!
//! Two lock layouts implement the same [`Accumulator`] contract:
//! - [`ActionAccumulator`]: one mutex over the whole map. Every snapshot is a
//!   consistent cut across all actions.
//! - [`PerActionAccumulator`]: one mutex per action plus a read-mostly map.
//!   Writers on different actions do not contend; each snapshot entry is a
//!   matched `(total, count)` pair, but entries may come from different
//!   instants.
//!
//! Neither layout lets a reader see `count` without the matching `total`.

pub mod global;
pub mod per_action;
pub mod record;

pub use global::ActionAccumulator;
pub use per_action::PerActionAccumulator;
pub use record::ActionRecord;

/// One entry of a snapshot: an action name and its current mean.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAverage {
    pub action: String,
    pub average: f64,
}

/// Loss-free accumulation of `(action, value)` samples.
///
/// Implementations must apply each `record` atomically with respect to every
/// other `record` and `snapshot` on the same action. Entry order in a
/// snapshot carries no meaning.
pub trait Accumulator: Send + Sync {
    /// Add `value` to the running statistics of `action`, creating the entry
    /// on first use.
    fn record(&self, action: &str, value: f64);

    /// Current average of every known action.
    fn snapshot(&self) -> Vec<ActionAverage>;

    /// Read the matched `(total, count)` pair for one action without
    /// creating it.
    fn get(&self, action: &str) -> Option<ActionRecord>;

    /// Number of distinct actions recorded so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
