use crate::{err, stmt::Record, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of records impacted by the operation
    Count(u64),

    /// Records read by the operation, in the order the store returned them
    Records(Vec<Record>),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn records(records: Vec<Record>) -> Self {
        Self {
            rows: Rows::Records(records),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            Rows::Records(_) => Err(err!("expected a count response, got records")),
        }
    }

    pub fn into_records(self) -> Result<Vec<Record>> {
        match self.rows {
            Rows::Records(records) => Ok(records),
            Rows::Count(_) => Err(err!("expected a records response, got a count")),
        }
    }
}
