use super::{RecordId, Value};
use crate::schema::FieldId;

use indexmap::IndexMap;

/// New cell values for one record.
///
/// Fields not listed keep their current value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordUpdate {
    pub id: RecordId,
    pub fields: IndexMap<FieldId, Value>,
}

impl RecordUpdate {
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn set(mut self, field: impl Into<FieldId>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}
