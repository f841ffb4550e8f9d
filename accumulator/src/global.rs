//! Single-lock accumulator: one mutex guards the map and every record in it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::{Accumulator, ActionAverage, ActionRecord};

/// Accumulator whose map and records share one exclusive lock.
///
/// Get-or-create and the `(total, count)` update happen under the same guard,
/// and `snapshot` enumerates under it too, so a snapshot is the state after
/// some prefix of the global `record` history.
#[derive(Debug, Default)]
pub struct ActionAccumulator {
    records: Mutex<HashMap<String, ActionRecord>>,
}

impl ActionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator with room for `capacity` actions before the
    /// map reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Copy of every record, taken under a single acquisition of the lock.
    pub fn records(&self) -> Vec<(String, ActionRecord)> {
        self.lock()
            .iter()
            .map(|(action, record)| (action.clone(), *record))
            .collect()
    }

    // A panic can't happen between the two field writes of `ActionRecord::add`,
    // so the data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, ActionRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Accumulator for ActionAccumulator {
    fn record(&self, action: &str, value: f64) {
        let mut records = self.lock();
        match records.get_mut(action) {
            Some(record) => record.add(value),
            None => {
                debug!(action, "first sample for action");
                records.insert(action.to_owned(), ActionRecord::with_sample(value));
            }
        }
    }

    fn snapshot(&self) -> Vec<ActionAverage> {
        self.lock()
            .iter()
            .map(|(action, record)| ActionAverage {
                action: action.clone(),
                average: record.average(),
            })
            .collect()
    }

    fn get(&self, action: &str) -> Option<ActionRecord> {
        self.lock().get(action).copied()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
