use super::Operation;

use crate::schema::{TableId, ViewId};

#[derive(Debug, Clone)]
pub struct SelectRecords {
    /// Which table to read
    pub table: TableId,

    /// When set, read the view's records in the view's order. Otherwise read
    /// the whole table in its natural order.
    pub view: Option<ViewId>,
}

impl From<SelectRecords> for Operation {
    fn from(value: SelectRecords) -> Self {
        Self::SelectRecords(value)
    }
}
