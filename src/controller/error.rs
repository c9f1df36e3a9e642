//! Controller error types.

use thiserror::Error;

/// Errors raised by transitions and by capability access on a host.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StatefulError {
    /// The requested state has no capability set in the interface table
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The property is not installed in the host's current state
    #[error("'{property}' is not available in state '{state}'")]
    NotApplicable { property: String, state: String },

    /// The property is installed but holds data, not a method
    #[error("'{0}' is not callable")]
    NotCallable(String),

    /// A hook or method reported a failure
    #[error("Callback failed: {0}")]
    Callback(String),
}
