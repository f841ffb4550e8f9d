//! Per-action locking: samples for different actions update in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::debug;

use crate::{Accumulator, ActionAverage, ActionRecord};

type RecordHandle = Arc<Mutex<ActionRecord>>;

/// Accumulator with one mutex per action.
///
/// The map lock is held only long enough to find or create a record handle;
/// the `(total, count)` update runs under that record's own mutex. A record
/// is created together with its first sample while the map write lock is
/// held, so no entry is ever observable with `count == 0`.
#[derive(Debug, Default)]
pub struct PerActionAccumulator {
    records: RwLock<HashMap<String, RecordHandle>>,
}

impl PerActionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    fn handle(&self, action: &str) -> Option<RecordHandle> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(action)
            .cloned()
    }

    /// Clone every handle so record locks are taken after the map lock is
    /// released; at most one lock is held at any moment.
    fn handles(&self) -> Vec<(String, RecordHandle)> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(action, handle)| (action.clone(), Arc::clone(handle)))
            .collect()
    }
}

fn lock_record(handle: &Mutex<ActionRecord>) -> MutexGuard<'_, ActionRecord> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Accumulator for PerActionAccumulator {
    fn record(&self, action: &str, value: f64) {
        if let Some(handle) = self.handle(action) {
            lock_record(&handle).add(value);
            return;
        }

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        // Another writer may have created the entry between the read and the
        // write lock.
        let existing = records.get(action).map(Arc::clone);
        if let Some(handle) = existing {
            drop(records);
            lock_record(&handle).add(value);
            return;
        }
        debug!(action, "first sample for action");
        records.insert(
            action.to_owned(),
            Arc::new(Mutex::new(ActionRecord::with_sample(value))),
        );
    }

    fn snapshot(&self) -> Vec<ActionAverage> {
        self.handles()
            .into_iter()
            .map(|(action, handle)| {
                let average = lock_record(&handle).average();
                ActionAverage { action, average }
            })
            .collect()
    }

    fn get(&self, action: &str) -> Option<ActionRecord> {
        let handle = self.handle(action)?;
        let record = *lock_record(&handle);
        Some(record)
    }

    fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
