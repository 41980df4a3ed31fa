use super::{CellSource, Value};
use crate::schema::FieldId;

use indexmap::IndexMap;

/// A point-in-time snapshot of one record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub id: RecordId,

    /// The record's primary field, rendered as a string
    pub name: String,

    /// Cell values by field. Fields without a value may be missing.
    pub cells: IndexMap<FieldId, Value>,
}

string_id! {
    /// Uniquely identifies a record
    RecordId
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cells: IndexMap::new(),
        }
    }

    pub fn cell(mut self, field: impl Into<FieldId>, value: impl Into<Value>) -> Self {
        self.cells.insert(field.into(), value.into());
        self
    }

    /// The raw cell value; `Null` when the record has no value for the field.
    pub fn cell_value(&self, field: &FieldId) -> &Value {
        const NULL: &Value = &Value::Null;
        self.cells.get(field).unwrap_or(NULL)
    }
}

impl CellSource for Record {
    fn cell_value_as_string(&self, field: &FieldId) -> String {
        self.cell_value(field).to_cell_string()
    }
}
