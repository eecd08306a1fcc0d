// ABOUTME: Error taxonomy surfaced by TagService
// ABOUTME: Closed set of error kinds with stable codes and caller-facing messages

use serde::{Serialize, Serializer};
use tagdeck_storage::StorageError;
use thiserror::Error;
use tracing::error;

/// What went wrong, independent of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateName,
    InsufficientRights,
    InvalidArguments,
    AlreadyRemoved,
    AlreadyAdded,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Stable code for clients
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateName => "TAGNAME_EXISTS",
            ErrorKind::InsufficientRights => "NO_RIGHTS",
            ErrorKind::InvalidArguments => "WRONG_ARGUMENTS",
            ErrorKind::AlreadyRemoved => "ITEM_DELETED",
            ErrorKind::AlreadyAdded => "ARGUMENT_ADDED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "UNKNOWN_INTERNAL_ERROR",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateName => "A tag with this name already exists",
            ErrorKind::InsufficientRights => "Only the creator of a tag can change it",
            ErrorKind::InvalidArguments => "Invalid tag ids",
            ErrorKind::AlreadyRemoved => "Tag is not added to this user",
            ErrorKind::AlreadyAdded => "Tag is already added to this user",
            ErrorKind::NotFound => "Tag not found",
            ErrorKind::Internal => "Unknown internal error",
        }
    }

    /// True when the caller can fix the request. Access denial counts as
    /// a client error but is kept apart by its own kind.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }
}

/// Serialized as its stable code
impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TagServiceError {
    kind: ErrorKind,
    message: String,
}

pub type TagServiceResult<T> = Result<T, TagServiceError>;

impl TagServiceError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Collapse a persistence failure into the opaque internal error.
    /// The cause is logged here and never reaches the caller.
    pub fn internal(err: StorageError) -> Self {
        error!("Tag storage failure: {}", err);
        Self::new(ErrorKind::Internal)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }
}

impl From<ErrorKind> for TagServiceError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::DuplicateName, "TAGNAME_EXISTS", true)]
    #[case(ErrorKind::InsufficientRights, "NO_RIGHTS", true)]
    #[case(ErrorKind::InvalidArguments, "WRONG_ARGUMENTS", true)]
    #[case(ErrorKind::AlreadyRemoved, "ITEM_DELETED", true)]
    #[case(ErrorKind::AlreadyAdded, "ARGUMENT_ADDED", true)]
    #[case(ErrorKind::NotFound, "NOT_FOUND", true)]
    #[case(ErrorKind::Internal, "UNKNOWN_INTERNAL_ERROR", false)]
    fn test_kind_codes(#[case] kind: ErrorKind, #[case] code: &str, #[case] client: bool) {
        assert_eq!(kind.code(), code);
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(code));
        assert_eq!(kind.is_client_error(), client);
        assert!(!kind.default_message().is_empty());
    }

    #[test]
    fn test_internal_hides_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "disk I/O error at page 7");
        let err = TagServiceError::internal(StorageError::Io(cause));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "Unknown internal error");
        assert!(!err.message().contains("disk"));
    }

    #[test]
    fn test_custom_message() {
        let err = TagServiceError::with_message(ErrorKind::AlreadyAdded, "Tag 4 is already added");
        assert_eq!(err.kind(), ErrorKind::AlreadyAdded);
        assert_eq!(err.to_string(), "Tag 4 is already added");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_kind_serializes_as_constant() {
        let json = serde_json::to_string(&ErrorKind::InsufficientRights).unwrap();
        assert_eq!(json, "\"NO_RIGHTS\"");
    }
}
