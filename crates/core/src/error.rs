use crate::validation::ViolationList;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Validation failed; carries the full set of violations.
    #[error("Validation failed: {0}")]
    Validation(ViolationList),

    /// The request payload could not be deserialized into the target type.
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
