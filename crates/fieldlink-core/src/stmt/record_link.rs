use super::RecordId;

/// A reference to a record of the linked table, as stored in a link field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordLink {
    pub id: RecordId,

    /// The linked record's primary field at the time the link was read
    pub name: String,
}

impl RecordLink {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
