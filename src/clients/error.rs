//! Error type shared by the collaborator traits.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors a person lookup or food store can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store answered, but did not persist the record.
    #[error("Store rejected the record: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(reason) => StoreError::Rejected(reason),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}
