/// A saved view of a table.
///
/// Views only matter to linking through the record order they impose, which
/// decides which source record wins a key collision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    pub id: ViewId,
    pub name: String,
}

string_id! {
    /// Uniquely identifies a view within its table
    ViewId
}

impl View {
    pub fn new(id: impl Into<ViewId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
