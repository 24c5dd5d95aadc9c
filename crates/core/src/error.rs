//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Input that the allocation engine refuses to work with.
///
/// An order that simply cannot be filled is not a `DomainError`; the
/// allocation crate reports that as an empty plan or `AllocationError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Structurally valid input that breaks a domain rule (e.g. duplicate warehouse names).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed (blank item or warehouse name).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
