mod select_records;
pub use select_records::SelectRecords;

mod update_records;
pub use update_records::UpdateRecords;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Read every record of a table, or of one of its views
    SelectRecords(SelectRecords),

    /// Overwrite cell values of existing records
    UpdateRecords(UpdateRecords),
}
