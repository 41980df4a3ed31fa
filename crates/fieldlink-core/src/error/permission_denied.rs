use super::Error;

/// Error when the caller may not update the planned batch.
///
/// The permission check covers the whole batch before any chunk is
/// submitted, so no records have been written when this is returned.
#[derive(Debug)]
pub(super) struct PermissionDeniedError {
    table: Box<str>,
    count: usize,
}

impl std::error::Error for PermissionDeniedError {}

impl core::fmt::Display for PermissionDeniedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "permission denied: cannot update {} {} in table {}",
            self.count,
            if self.count == 1 { "record" } else { "records" },
            self.table
        )
    }
}

impl Error {
    /// Creates a permission denied error for a batch of `count` updates.
    pub fn permission_denied(table: impl Into<String>, count: usize) -> Error {
        Error::from(super::ErrorKind::PermissionDenied(PermissionDeniedError {
            table: table.into().into(),
            count,
        }))
    }

    /// Returns `true` if this error is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PermissionDenied(_))
    }
}
