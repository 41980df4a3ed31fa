//! A store held entirely in memory.
//!
//! Behaves like the hosted grid store as far as linking is concerned:
//! records come back in table or view order, updates overwrite the listed
//! cells, unknown records or fields reject the whole update call, and writes
//! can be denied wholesale.

use fieldlink_core::{
    async_trait, bail,
    driver::{
        operation::{Operation, SelectRecords, UpdateRecords},
        Capability, Driver, Response,
    },
    schema::{Schema, TableId, ViewId},
    stmt::{Record, RecordId, RecordUpdate, Value},
    Error, Result,
};
use indexmap::IndexMap;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

#[derive(Debug)]
pub struct Memory {
    capability: Capability,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    schema: Schema,

    /// Records per table, in table order
    records: HashMap<TableId, IndexMap<RecordId, Record>>,

    /// Record order of each view. Views without an entry show the table order.
    view_orders: HashMap<(TableId, ViewId), Vec<RecordId>>,

    read_only: bool,
}

impl Memory {
    pub fn new(schema: Schema) -> Self {
        Self::with_capability(schema, Capability::DEFAULT)
    }

    pub fn with_capability(schema: Schema, capability: Capability) -> Self {
        Self {
            capability,
            state: Mutex::new(State {
                schema,
                ..State::default()
            }),
        }
    }

    /// Adds a record to the end of `table`, replacing any record with the
    /// same id in place.
    pub fn insert(&self, table: impl Into<TableId>, record: Record) {
        self.state()
            .records
            .entry(table.into())
            .or_default()
            .insert(record.id.clone(), record);
    }

    /// Adds a record with a freshly generated id and returns the id.
    pub fn create<I, F, V>(&self, table: impl Into<TableId>, cells: I) -> RecordId
    where
        I: IntoIterator<Item = (F, V)>,
        F: Into<fieldlink_core::schema::FieldId>,
        V: Into<Value>,
    {
        let id = RecordId::new(format!("rec{}", uuid::Uuid::new_v4().simple()));
        let mut record = Record::new(id.clone(), "");
        for (field, value) in cells {
            record = record.cell(field, value);
        }
        self.insert(table, record);
        id
    }

    /// Orders the records of a view. Records not listed are hidden from it.
    pub fn set_view_order<I>(&self, table: impl Into<TableId>, view: impl Into<ViewId>, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<RecordId>,
    {
        self.state().view_orders.insert(
            (table.into(), view.into()),
            ids.into_iter().map(Into::into).collect(),
        );
    }

    /// Denies every update while set.
    pub fn set_read_only(&self, read_only: bool) {
        self.state().read_only = read_only;
    }

    /// Changes the schema, for example to delete a field picked earlier.
    pub fn alter_schema(&self, f: impl FnOnce(&mut Schema)) {
        f(&mut self.state().schema);
    }

    /// A record as currently stored.
    pub fn record(&self, table: &TableId, id: &RecordId) -> Option<Record> {
        let state = self.state();
        let record = state.records.get(table)?.get(id)?;
        Some(state.named(table, record.clone()))
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    /// Sets the record's name from the table's primary field.
    fn named(&self, table: &TableId, mut record: Record) -> Record {
        let primary = self
            .schema
            .table_if_exists(table)
            .and_then(|table| table.primary_field());

        if let Some(primary) = primary {
            record.name = record.cell_value(&primary.id).to_cell_string();
        }

        record
    }

    fn select(&self, op: &SelectRecords) -> Result<Vec<Record>> {
        let Some(table) = self.schema.table_if_exists(&op.table) else {
            bail!("unknown table {}", op.table);
        };

        let empty = IndexMap::new();
        let records = self.records.get(&table.id).unwrap_or(&empty);

        let order = op.view.as_ref().and_then(|view| {
            table.view_if_exists(view)?;
            self.view_orders.get(&(table.id.clone(), view.clone()))
        });

        let selected: Vec<_> = match order {
            Some(ids) => ids.iter().filter_map(|id| records.get(id)).collect(),
            None => records.values().collect(),
        };

        Ok(selected
            .into_iter()
            .map(|record| self.named(&table.id, record.clone()))
            .collect())
    }

    fn update(&mut self, op: UpdateRecords) -> Result<u64> {
        let Some(table) = self.schema.table_if_exists(&op.table) else {
            bail!("unknown table {}", op.table);
        };

        let records = self.records.entry(table.id.clone()).or_default();

        // Validate the whole call before touching anything
        for update in &op.updates {
            if !records.contains_key(&update.id) {
                return Err(Error::record_not_found(format!(
                    "table={} record={}",
                    table.id, update.id
                )));
            }

            if let Some(field) = update
                .fields
                .keys()
                .find(|field| table.field_if_exists(field).is_none())
            {
                bail!("unknown field {} in table {}", field, table.id);
            }
        }

        let count = op.updates.len() as u64;

        for RecordUpdate { id, fields } in op.updates {
            if let Some(record) = records.get_mut(&id) {
                record.cells.extend(fields);
            }
        }

        Ok(count)
    }
}

#[async_trait]
impl Driver for Memory {
    fn capability(&self) -> &Capability {
        &self.capability
    }

    async fn schema(&self) -> Result<Schema> {
        Ok(self.state().schema.clone())
    }

    fn has_permission_to_update(&self, table: &TableId, _updates: &[RecordUpdate]) -> bool {
        let state = self.state();
        !state.read_only && state.schema.table_if_exists(table).is_some()
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        match op {
            Operation::SelectRecords(op) => {
                let records = self.state().select(&op)?;
                debug!(table = %op.table, records = records.len(), "selected records");
                Ok(Response::records(records))
            }
            Operation::UpdateRecords(op) => {
                if op.updates.len() > self.capability.max_records_per_update {
                    bail!(
                        "too many records in one update call; max={} got={}",
                        self.capability.max_records_per_update,
                        op.updates.len()
                    );
                }

                let table = op.table.clone();
                let count = self.state().update(op)?;
                debug!(%table, records = count, "updated records");
                Ok(Response::count(count))
            }
        }
    }
}
