use super::Error;

/// Error when a stored link configuration cannot be read.
///
/// This occurs when:
/// - A TOML document is malformed
/// - A stored key holds a value of the wrong type (e.g. a list for a boolean switch)
///
/// Missing or stale ids are not configuration errors; they resolve as absent.
#[derive(Debug)]
pub(super) struct InvalidConfigError {
    message: Box<str>,
}

impl std::error::Error for InvalidConfigError {}

impl core::fmt::Display for InvalidConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfig(InvalidConfigError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConfig(_))
    }
}
