use crate::{apply::apply_updates, plan::Plan, resolve::Resolved, LinkConfig};

use fieldlink_core::{
    driver::{operation::SelectRecords, Driver},
    schema::{Table, View},
    stmt::Record,
    Error, Result,
};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Links records through a store driver.
///
/// Planning may run any number of times, concurrently or not. Applying is
/// exclusive: while one submission is in flight, further attempts through
/// this handle or any of its clones fail with
/// [`Error::update_in_progress`].
#[derive(Debug, Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,

    /// Set while an update submission is in flight
    updating: Arc<AtomicBool>,
}

/// Holds the in-flight flag until dropped.
struct UpdateGuard {
    updating: Arc<AtomicBool>,
}

impl Db {
    pub fn new(driver: impl Driver) -> Self {
        Self::from_arc(Arc::new(driver))
    }

    pub fn from_arc(driver: Arc<dyn Driver>) -> Self {
        Self {
            driver,
            updating: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    /// Reads fresh snapshots and computes what linking would change.
    ///
    /// Incomplete or stale configuration is not an error; it yields an empty
    /// plan whose [`status`](Plan::status) says what is missing.
    pub async fn plan(&self, config: &LinkConfig) -> Result<Plan> {
        self.plan_with(config, self.is_updating()).await
    }

    async fn plan_with(&self, config: &LinkConfig, updating: bool) -> Result<Plan> {
        let schema = self.driver.schema().await?;
        let resolved = Resolved::new(&schema, config);

        let dest_records = match resolved.dest_table {
            Some(table) if resolved.dest_ready() => self.select(table, resolved.dest_view).await?,
            _ => vec![],
        };

        let source_records = match resolved.source_table {
            Some(table) if resolved.source_ready() => {
                self.select(table, resolved.source_view).await?
            }
            _ => vec![],
        };

        Ok(Plan::build(&resolved, config, &dest_records, &source_records, updating))
    }

    /// Applies a previously computed plan, typically once the user confirmed
    /// it. Returns the number of records updated.
    pub async fn apply(&self, plan: &Plan) -> Result<usize> {
        let _guard = self.begin_update()?;
        self.apply_unguarded(plan).await
    }

    /// Plans and applies in one step. Returns the applied plan.
    pub async fn link(&self, config: &LinkConfig) -> Result<Plan> {
        let _guard = self.begin_update()?;
        let plan = self.plan_with(config, false).await?;
        self.apply_unguarded(&plan).await?;
        Ok(plan)
    }

    async fn apply_unguarded(&self, plan: &Plan) -> Result<usize> {
        let Some(table) = plan.dest_table_id() else {
            return Ok(0);
        };

        apply_updates(&*self.driver, table, plan.updates()).await
    }

    async fn select(&self, table: &Table, view: Option<&View>) -> Result<Vec<Record>> {
        let op = SelectRecords {
            table: table.id.clone(),
            view: view.map(|view| view.id.clone()),
        };

        self.driver.exec(op.into()).await?.into_records()
    }

    fn begin_update(&self) -> Result<UpdateGuard> {
        self.updating
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::update_in_progress())?;

        Ok(UpdateGuard {
            updating: self.updating.clone(),
        })
    }
}

impl Drop for UpdateGuard {
    fn drop(&mut self) {
        self.updating.store(false, Ordering::Release);
    }
}
