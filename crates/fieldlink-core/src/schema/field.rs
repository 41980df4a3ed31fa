use super::TableId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// Uniquely identifies the field within its table
    pub id: FieldId,

    /// Display name
    pub name: String,

    /// What kind of values the field holds
    pub ty: FieldType,
}

string_id! {
    /// Uniquely identifies a field
    FieldId
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum FieldType {
    Text,
    LongText,
    Email,
    Url,
    Number,
    Checkbox,
    SingleSelect,
    MultipleSelects,
    Formula,

    /// Links to records of another table
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    LinkedRecord { linked_table_id: TableId },
}

impl Field {
    pub fn new(id: impl Into<FieldId>, name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ty,
        }
    }
}

impl FieldType {
    pub fn linked_record(table: impl Into<TableId>) -> Self {
        Self::LinkedRecord {
            linked_table_id: table.into(),
        }
    }

    pub fn linked_table_id(&self) -> Option<&TableId> {
        match self {
            Self::LinkedRecord { linked_table_id } => Some(linked_table_id),
            _ => None,
        }
    }
}
