mod field;
pub use field::{Field, FieldId, FieldType};

mod table;
pub use table::{Table, TableId};

mod view;
pub use view::{View, ViewId};

/// The tables of a base, as seen by the current pass.
///
/// Lookups by id return `Option`: a stored configuration may reference
/// tables, views, or fields that have since been deleted, and callers treat
/// those as absent.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    pub fn table_if_exists(&self, id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|table| table.id == *id)
    }

    /// The table a link field points at, if the field is a link field and the
    /// linked table still exists.
    pub fn linked_table(&self, field: &Field) -> Option<&Table> {
        field
            .ty
            .linked_table_id()
            .and_then(|id| self.table_if_exists(id))
    }
}
