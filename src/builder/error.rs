//! Build errors for interface tables.

use thiserror::Error;

/// Errors that can occur when building an interface table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State name must not be empty")]
    EmptyStateName,

    #[error("State '{0}' is defined more than once. Use .amend() to extend it")]
    DuplicateState(String),

    #[error("'{property}' in state '{state}' is reserved for a lifecycle hook and must be a method")]
    ReservedValue { state: String, property: String },

    #[error("Invalid interface document: {0}")]
    InvalidDocument(String),
}
