//! # Framework Errors
//!
//! Errors raised by the record store runtime itself, independent of any record type.

/// Errors that can occur within the record store runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Insert rejected: {0}")]
    Rejected(String),
}
