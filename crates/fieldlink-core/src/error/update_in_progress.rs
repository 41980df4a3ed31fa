use super::Error;

/// Error when an update is requested while another is still being submitted.
#[derive(Debug)]
pub(super) struct UpdateInProgressError;

impl std::error::Error for UpdateInProgressError {}

impl core::fmt::Display for UpdateInProgressError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("an update is already in progress")
    }
}

impl Error {
    /// Creates an update in progress error.
    pub fn update_in_progress() -> Error {
        Error::from(super::ErrorKind::UpdateInProgress(UpdateInProgressError))
    }

    /// Returns `true` if this error is an update in progress error.
    pub fn is_update_in_progress(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UpdateInProgress(_))
    }
}
