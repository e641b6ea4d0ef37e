//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type MenuResult<T> = Result<T, MenuError>;

/// Domain-level error, tagged by kind.
///
/// The HTTP layer maps each kind to a fixed status code; keep this enum
/// focused on what went wrong, not on how it is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// A record failed validation (missing or malformed required fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier in the request path could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No record matched the given identifier.
    #[error("menu item not found")]
    NotFound,

    /// The document store failed; the underlying message is passed through.
    #[error("store failure: {0}")]
    Store(String),
}

impl MenuError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
