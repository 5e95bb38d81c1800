//! Mock Email Service Implementation
//!
//! Provides in-memory email capture for testing without external dependencies.
//! Can also be switched into a failing mode to exercise delivery errors.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService};

const DEFAULT_RECIPIENT: &str = "owner@portfolio.test";
const DEFAULT_FROM: &str = "Contact Form <noreply@portfolio.test>";

/// Email captured by the mock service
#[derive(Debug, Clone)]
pub struct CapturedEmail {
    pub message: EmailMessage,
    pub receipt: EmailReceipt,
    pub captured_at: DateTime<Utc>,
}

/// Mock email service for testing
#[derive(Debug, Clone)]
pub struct MockEmailService {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
    attempts: Arc<Mutex<usize>>,
    failure: Option<String>,
    recipient: String,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            emails: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(Mutex::new(0)),
            failure: None,
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }

    /// Create a mock whose every send fails with a provider error
    pub fn new_failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Override the recipient address
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Get all captured emails
    pub fn get_all_emails(&self) -> Vec<CapturedEmail> {
        self.emails.lock().unwrap().clone()
    }

    /// Get the most recently captured email
    pub fn last_email(&self) -> Option<CapturedEmail> {
        self.emails.lock().unwrap().last().cloned()
    }

    /// Get count of emails delivered
    pub fn email_count(&self) -> usize {
        self.emails.lock().unwrap().len()
    }

    /// Get count of send attempts, failed ones included
    pub fn attempt_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    /// Clear all captured emails and attempt counts
    pub fn clear(&self) {
        self.emails.lock().unwrap().clear();
        *self.attempts.lock().unwrap() = 0;
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailService for MockEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(reason) = &self.failure {
            tracing::warn!("Mock email service failing send to: {}", message.to);
            return Err(EmailError::Provider(reason.clone()));
        }

        tracing::info!("Mock email service capturing email to: {}", message.to);

        let receipt = EmailReceipt {
            message_id: format!("mock-{}", Uuid::new_v4()),
            sent_at: Utc::now(),
            provider: "mock".to_string(),
            metadata: message.metadata.clone(),
        };

        let captured = CapturedEmail {
            message,
            receipt: receipt.clone(),
            captured_at: Utc::now(),
        };

        self.emails.lock().unwrap().push(captured);

        tracing::info!(
            "Email captured successfully, message ID: {}",
            receipt.message_id
        );

        Ok(receipt)
    }

    fn default_from(&self) -> String {
        DEFAULT_FROM.to_string()
    }

    fn recipient(&self) -> &str {
        &self.recipient
    }

    fn service_name(&self) -> &'static str {
        "mock"
    }
}
