//! Recording transport for tests and offline front ends

use std::sync::{Arc, Mutex};

use super::{ContactTransport, TransportError};
use crate::domain::entities::ContactSubmission;

/// Transport that records submissions and replays a fixed outcome
#[derive(Debug, Clone)]
pub struct MockContactTransport {
    outcome: Result<String, TransportError>,
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl MockContactTransport {
    /// Every send succeeds
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok("Email sent successfully!".to_string()))
    }

    /// Every send is answered with `status` and an optional error message
    pub fn rejecting(status: u16, message: Option<&str>) -> Self {
        Self::with_outcome(Err(TransportError::Rejected {
            status,
            message: message.map(str::to_string),
        }))
    }

    /// Every send fails before reaching the relay
    pub fn unreachable() -> Self {
        Self::with_outcome(Err(TransportError::Network(
            "connection refused".to_string(),
        )))
    }

    pub fn with_outcome(outcome: Result<String, TransportError>) -> Self {
        Self {
            outcome,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Submissions received so far
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ContactTransport for MockContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<String, TransportError> {
        self.sent.lock().unwrap().push(submission.clone());
        self.outcome.clone()
    }
}
