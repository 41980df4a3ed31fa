use crate::schema::FieldId;

/// Read access to a record's cells, as far as join key derivation needs it.
///
/// Implemented by [`Record`](super::Record); tests and alternative stores
/// can implement it on their own snapshot types.
pub trait CellSource {
    /// The cell rendered as the host displays it. Missing cells render as the
    /// empty string.
    fn cell_value_as_string(&self, field: &FieldId) -> String;
}

impl<T: CellSource + ?Sized> CellSource for &T {
    fn cell_value_as_string(&self, field: &FieldId) -> String {
        (**self).cell_value_as_string(field)
    }
}
