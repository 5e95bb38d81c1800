//! Portfolio Email Service
//!
//! Provides email delivery for the contact relay with support for:
//! - Mailgun integration for production email delivery
//! - Mock email service for testing and development
//! - Shared contact-message content used by every provider

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod content;
pub mod mailgun;
pub mod mock;

const DEFAULT_MAILGUN_BASE_URL: &str = "https://api.mailgun.net";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email configuration error: {0}")]
    Configuration(String),

    #[error("Email validation error: {0}")]
    Validation(String),

    #[error("Email request error: {0}")]
    Request(String),

    #[error("Email provider error: {0}")]
    Provider(String),

    #[error("Email template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email message to be sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub body_html: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl EmailMessage {
    /// Create a new email message
    pub fn new(to: String, from: String, subject: String, body_text: String) -> Self {
        Self {
            to,
            from,
            reply_to: None,
            subject,
            body_text,
            body_html: None,
            metadata: HashMap::new(),
        }
    }

    /// Add HTML body content
    pub fn with_html(mut self, body_html: String) -> Self {
        self.body_html = Some(body_html);
        self
    }

    /// Add reply-to address
    pub fn with_reply_to(mut self, reply_to: String) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Add metadata for tracking
    pub fn with_metadata(mut self, key: String, value: String) -> Self {
        self.metadata.insert(key, value);
        self
    }
}

/// Email delivery receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
    pub provider: String,
    pub metadata: HashMap<String, String>,
}

/// Credentials the Mailgun provider cannot run without
#[derive(Debug, Clone, PartialEq)]
pub struct MailgunCredentials {
    pub api_key: String,
    pub domain: String,
    pub recipient: String,
}

/// Email service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    /// Email service provider (mailgun, mock)
    pub provider: String,
    /// Enable email sending (can disable for testing)
    pub enabled: bool,
    /// Mailgun API key
    pub api_key: Option<String>,
    /// Mailgun sending domain; also used for the `noreply@` sender
    pub domain: Option<String>,
    /// Address that receives contact form messages
    pub recipient: Option<String>,
    /// Mailgun API base URL (overridable for EU region or local stubs)
    pub base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: "mailgun".to_string(),
            enabled: true,
            api_key: None,
            domain: None,
            recipient: None,
            base_url: DEFAULT_MAILGUN_BASE_URL.to_string(),
        }
    }
}

impl EmailConfig {
    /// Create email config from environment variables.
    ///
    /// Missing credentials are not an error here: the relay reports them
    /// per request so the process still starts and serves the catalog.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mailgun".to_string());

        let enabled = std::env::var("EMAIL_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .unwrap_or(true);

        let base_url = std::env::var("MAILGUN_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_MAILGUN_BASE_URL.to_string());

        Self {
            provider,
            enabled,
            api_key: non_blank_env("MAILGUN_API_KEY"),
            domain: non_blank_env("MAILGUN_DOMAIN"),
            recipient: non_blank_env("RECIPIENT_EMAIL"),
            base_url,
        }
    }

    /// Resolve the three delivery credentials, naming any that are missing
    pub fn credentials(&self) -> Result<MailgunCredentials, EmailError> {
        match (&self.api_key, &self.domain, &self.recipient) {
            (Some(api_key), Some(domain), Some(recipient)) => Ok(MailgunCredentials {
                api_key: api_key.clone(),
                domain: domain.clone(),
                recipient: recipient.clone(),
            }),
            _ => {
                let missing: Vec<&str> = [
                    ("MAILGUN_API_KEY", self.api_key.is_none()),
                    ("MAILGUN_DOMAIN", self.domain.is_none()),
                    ("RECIPIENT_EMAIL", self.recipient.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();

                Err(EmailError::Configuration(format!(
                    "Missing Mailgun configuration: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Email service trait for different implementations
#[async_trait::async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError>;

    /// Return the "from" address for outgoing emails
    fn default_from(&self) -> String;

    /// Return the address contact messages are delivered to
    fn recipient(&self) -> &str;

    /// Short provider name for logs
    fn service_name(&self) -> &'static str;

    /// Send a contact form submission to the site owner
    async fn send_contact_message(
        &self,
        sender_name: &str,
        sender_email: &str,
        body: &str,
    ) -> Result<EmailReceipt, EmailError> {
        let subject = content::contact_subject(sender_name);
        let body_text = content::contact_text(sender_name, sender_email, body)?;
        let body_html = content::contact_html(sender_name, sender_email, body)?;

        let message = EmailMessage::new(
            self.recipient().to_string(),
            self.default_from(),
            subject,
            body_text,
        )
        .with_html(body_html)
        .with_reply_to(sender_email.to_string())
        .with_metadata("email_type".to_string(), "contact_form".to_string());

        self.send_email(message).await
    }
}

/// Email service factory
pub struct EmailServiceFactory;

impl EmailServiceFactory {
    /// Create email service based on configuration
    pub fn create(config: EmailConfig) -> Result<Box<dyn EmailService>, EmailError> {
        if !config.enabled {
            tracing::info!("Email service disabled, using mock implementation");
            return Ok(Box::new(mock::MockEmailService::new()));
        }

        match config.provider.as_str() {
            "mailgun" => {
                tracing::info!("Creating Mailgun email service");
                let credentials = config.credentials()?;
                let service = mailgun::MailgunEmailService::new(credentials, config.base_url);
                Ok(Box::new(service))
            }
            "mock" => {
                tracing::info!("Creating mock email service");
                Ok(Box::new(mock::MockEmailService::new()))
            }
            provider => Err(EmailError::Configuration(format!(
                "Unknown email provider: {}. Supported providers: mailgun, mock",
                provider
            ))),
        }
    }
}
