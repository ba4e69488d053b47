//! Error types for the food service.

use thiserror::Error;

/// Broad category of a [`FoodError`], for callers that branch on kind
/// (e.g. a transport layer choosing a status code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`FoodError::MissingReference`].
    MissingReference,
    /// See [`FoodError::InvalidRequest`].
    InvalidRequest,
    /// See [`FoodError::PersistenceFailure`].
    PersistenceFailure,
    /// See [`FoodError::Unavailable`].
    Unavailable,
}

/// Errors that can occur while adding or listing food entries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    /// The owning person is absent from the entry or unknown to the lookup.
    #[error("Missing reference: {0}")]
    MissingReference(String),

    /// A required field is absent or out of range.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store did not persist the entry.
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// A collaborator could not be reached.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
}

impl FoodError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FoodError::MissingReference(_) => ErrorKind::MissingReference,
            FoodError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            FoodError::PersistenceFailure(_) => ErrorKind::PersistenceFailure,
            FoodError::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    pub(crate) fn invalid(message: &str) -> Self {
        FoodError::InvalidRequest(message.to_string())
    }
}
