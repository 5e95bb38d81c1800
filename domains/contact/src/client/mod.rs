//! Client side of the contact flow: how a form reaches the relay

use thiserror::Error;

use crate::domain::entities::ContactSubmission;

pub mod http;
pub mod mock;

pub use http::HttpContactTransport;
pub use mock::MockContactTransport;

/// Shown when the relay gives no usable error message
pub const GENERIC_NETWORK_ERROR: &str = "Network error. Please try again later.";

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The relay answered with a non-2xx status
    #[error("Relay rejected submission with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The relay could not be reached or its reply could not be read
    #[error("Network error: {0}")]
    Network(String),
}

impl TransportError {
    /// Message to show in the form banner
    pub fn user_message(&self) -> &str {
        match self {
            TransportError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => GENERIC_NETWORK_ERROR,
        }
    }
}

/// Sends a validated submission to the relay
#[async_trait::async_trait]
pub trait ContactTransport: Send + Sync {
    /// Deliver one submission; returns the relay's confirmation text
    async fn send(&self, submission: &ContactSubmission) -> Result<String, TransportError>;
}
