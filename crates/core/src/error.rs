/// Failures raised by catalog operations.
///
/// Every variant carries a human-readable message. The HTTP layer owns the
/// mapping to status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    EmptyInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    AlreadyDeleted(String),

    #[error("{0}")]
    AlreadyEnabled(String),

    #[error("{0}")]
    NoChanges(String),

    #[error("External provider unavailable: {0}")]
    ExternalUnavailable(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
