use super::Error;

/// Error when a resource ID does not have the `endpoint|database|table|kind|name`
/// shape.
#[derive(Debug)]
pub(super) struct InvalidId {
    id: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidId {}

impl core::fmt::Display for InvalidId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid resource ID {:?}: {}", self.id, self.message)
    }
}

impl Error {
    /// Creates an invalid resource ID error.
    pub fn invalid_id(id: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidId(InvalidId {
            id: id.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid ID error.
    pub fn is_invalid_id(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::InvalidId(_)))
    }
}
