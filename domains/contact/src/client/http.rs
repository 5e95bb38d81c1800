//! reqwest-backed transport posting to `{base_url}/api/contact`

use reqwest::Client;
use serde::Deserialize;

use super::{ContactTransport, TransportError};
use crate::domain::entities::ContactSubmission;

const CONTACT_PATH: &str = "/api/contact";

/// Relay success body
#[derive(Debug, Deserialize)]
struct RelayAccepted {
    #[serde(default)]
    message: String,
}

/// Relay error body
#[derive(Debug, Deserialize)]
struct RelayError {
    error: Option<String>,
}

/// HTTP transport for the contact relay
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: String,
}

impl HttpContactTransport {
    /// Create a transport for the relay served at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a transport reusing an existing client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CONTACT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<String, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact submission");

        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            // The body is informational; a 2xx with an unreadable body still succeeded
            let accepted = response
                .json::<RelayAccepted>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            return Ok(accepted);
        }

        let message = response
            .json::<RelayError>()
            .await
            .ok()
            .and_then(|body| body.error);

        tracing::warn!(status = %status, message = ?message, "Contact relay rejected submission");

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
