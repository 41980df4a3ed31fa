use fieldlink_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Response},
    err,
    schema::{Schema, TableId},
    stmt::RecordUpdate,
    Result,
};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};
use tokio::sync::Semaphore;

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,

    /// Whether the operation succeeded
    pub succeeded: bool,
}

/// A driver wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Arc<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,

    /// 1-based numbers of the update calls to reject
    failing_updates: Mutex<HashSet<usize>>,

    /// When set, every update call waits for a permit first
    update_gate: Option<Arc<Semaphore>>,
}

impl LoggingDriver {
    pub fn new(driver: Arc<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            failing_updates: Mutex::new(HashSet::new()),
            update_gate: None,
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }

    /// Reject the `n`th update call (1-based) without forwarding it
    pub fn fail_update_call(self, n: usize) -> Self {
        self.failing_updates.lock().unwrap().insert(n);
        self
    }

    /// Hold update calls until the returned semaphore hands out permits
    pub fn gate_updates(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.update_gate = Some(gate.clone());
        (self, gate)
    }

    fn update_calls(&self) -> usize {
        self.ops_log
            .lock()
            .unwrap()
            .iter()
            .filter(|op| matches!(op.operation, Operation::UpdateRecords(_)))
            .count()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn capability(&self) -> &Capability {
        self.inner.capability()
    }

    async fn schema(&self) -> Result<Schema> {
        self.inner.schema().await
    }

    fn has_permission_to_update(&self, table: &TableId, updates: &[RecordUpdate]) -> bool {
        self.inner.has_permission_to_update(table, updates)
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        let is_update = matches!(operation, Operation::UpdateRecords(_));

        if is_update {
            if let Some(gate) = &self.update_gate {
                gate.acquire().await.expect("update gate closed").forget();
            }
        }

        let rejected = is_update
            && self
                .failing_updates
                .lock()
                .unwrap()
                .contains(&(self.update_calls() + 1));

        // Clone the operation for logging
        let operation_clone = operation.clone();

        let result = if rejected {
            Err(err!("injected failure"))
        } else {
            self.inner.exec(operation).await
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                succeeded: result.is_ok(),
            });

        result
    }
}
