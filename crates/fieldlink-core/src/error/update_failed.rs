use super::Error;

/// Error when a chunk of a batched update is rejected.
///
/// Submission stops at the failing chunk. Chunks before it stay applied;
/// there is no rollback across chunks.
#[derive(Debug)]
pub(super) struct UpdateFailedError {
    /// 1-based number of the chunk that failed
    chunk: usize,

    /// Records written by earlier chunks
    applied: usize,
}

impl std::error::Error for UpdateFailedError {}

impl core::fmt::Display for UpdateFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "update failed at chunk {} after {} records were applied",
            self.chunk, self.applied
        )
    }
}

impl Error {
    /// Creates an update failed error, keeping `cause` as the root of the chain.
    pub fn update_failed(chunk: usize, applied: usize, cause: Error) -> Error {
        cause.context(Error::from(super::ErrorKind::UpdateFailed(
            UpdateFailedError { chunk, applied },
        )))
    }

    /// Returns `true` if this error is an update failed error.
    pub fn is_update_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UpdateFailed(_))
    }

    /// Number of records applied before the failing chunk, if this is an
    /// update failed error.
    pub fn update_failed_applied(&self) -> Option<usize> {
        match self.kind() {
            super::ErrorKind::UpdateFailed(err) => Some(err.applied),
            _ => None,
        }
    }
}
