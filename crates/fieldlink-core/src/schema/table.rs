use super::{Field, FieldId, View, ViewId};

/// A table in the base
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// The table's fields. The first field added is the primary field.
    pub fields: Vec<Field>,

    /// Saved views, each presenting the table's records in its own order
    pub views: Vec<View>,
}

string_id! {
    /// Uniquely identifies a table
    TableId
}

impl Table {
    pub fn new(id: impl Into<TableId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: vec![],
            views: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.views.push(view);
        self
    }

    pub fn primary_field(&self) -> Option<&Field> {
        self.fields.first()
    }

    pub fn field_if_exists(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == *id)
    }

    pub fn view_if_exists(&self, id: &ViewId) -> Option<&View> {
        self.views.iter().find(|view| view.id == *id)
    }
}
