use crate::logging_driver::DriverOp;
use fieldlink_core::driver::{operation::UpdateRecords, Operation};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Number of record reads
    pub fn select_count(&self) -> usize {
        self.count(|op| matches!(op, Operation::SelectRecords(_)))
    }

    /// Every update call, in the order it was issued, with whether it succeeded
    pub fn updates(&self) -> Vec<(UpdateRecords, bool)> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match &op.operation {
                Operation::UpdateRecords(update) => Some((update.clone(), op.succeeded)),
                _ => None,
            })
            .collect()
    }

    /// Sizes of the update calls, in order
    pub fn update_sizes(&self) -> Vec<usize> {
        self.updates()
            .iter()
            .map(|(update, _)| update.updates.len())
            .collect()
    }
}
