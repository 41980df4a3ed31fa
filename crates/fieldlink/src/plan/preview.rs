use fieldlink_core::{
    schema::Field,
    stmt::{RecordLink, Value},
};

/// What a planned link changes on one destination record.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow<'a> {
    /// Primary field of the destination record
    pub name: &'a str,

    /// The link that will be written
    pub added: &'a RecordLink,

    /// The links being replaced. Only set when overwriting a join field that
    /// already had a value.
    pub removed: Option<&'a Value>,

    /// The destination match fields, other than the primary field, rendered
    /// as strings
    pub cells: Vec<(&'a Field, String)>,
}
