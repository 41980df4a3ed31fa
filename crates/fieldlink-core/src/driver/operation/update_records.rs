use super::Operation;

use crate::{schema::TableId, stmt::RecordUpdate};

#[derive(Debug, Clone)]
pub struct UpdateRecords {
    /// Which table to update
    pub table: TableId,

    /// One entry per record. Never longer than the driver's
    /// `max_records_per_update`.
    pub updates: Vec<RecordUpdate>,
}

impl From<UpdateRecords> for Operation {
    fn from(value: UpdateRecords) -> Self {
        Self::UpdateRecords(value)
    }
}
