//! Common state machine error types
//!
//! Shared across the domain crates that implement state machines.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot apply {event} in state {from}")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),
}

impl From<StateError> for crate::Error {
    fn from(err: StateError) -> Self {
        match err {
            StateError::GuardFailed(msg) => crate::Error::Validation(msg),
            other => crate::Error::Internal(other.to_string()),
        }
    }
}
