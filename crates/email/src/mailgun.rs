//! Mailgun Email Service Implementation
//!
//! Sends mail through the Mailgun Messages API
//! (`POST {base}/v3/{domain}/messages`) using the reqwest HTTP client.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{EmailError, EmailMessage, EmailReceipt, EmailService, MailgunCredentials};

/// Mailgun API user for HTTP basic auth
const API_USER: &str = "api";

/// Mailgun send response body
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
    #[serde(default)]
    message: String,
}

/// Mailgun email service implementation
pub struct MailgunEmailService {
    client: Client,
    credentials: MailgunCredentials,
    base_url: String,
}

impl MailgunEmailService {
    /// Create a new Mailgun email service
    pub fn new(credentials: MailgunCredentials, base_url: String) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v3/{}/messages", self.base_url, self.credentials.domain)
    }

    /// Convert an email message into Mailgun form fields
    fn build_form(message: &EmailMessage) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("from", message.from.clone()),
            ("to", message.to.clone()),
            ("subject", message.subject.clone()),
            ("text", message.body_text.clone()),
        ];

        if let Some(html) = &message.body_html {
            form.push(("html", html.clone()));
        }

        if let Some(reply_to) = &message.reply_to {
            form.push(("h:Reply-To", reply_to.clone()));
        }

        form
    }
}

#[async_trait::async_trait]
impl EmailService for MailgunEmailService {
    async fn send_email(&self, message: EmailMessage) -> Result<EmailReceipt, EmailError> {
        tracing::info!("Sending email via Mailgun to: {}", message.to);

        if !message.to.contains('@') {
            return Err(EmailError::Validation(
                "Invalid recipient address format".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(API_USER, Some(&self.credentials.api_key))
            .form(&Self::build_form(&message))
            .send()
            .await
            .map_err(|e| EmailError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            return Err(EmailError::Provider(format!(
                "Mailgun returned {}: {}",
                status, error_body
            )));
        }

        let sent: SendResponse = response
            .json()
            .await
            .map_err(|e| EmailError::Provider(format!("Failed to parse response: {}", e)))?;

        tracing::info!(
            message_id = %sent.id,
            status_message = %sent.message,
            "Email sent successfully via Mailgun"
        );

        Ok(EmailReceipt {
            message_id: sent.id,
            sent_at: Utc::now(),
            provider: "mailgun".to_string(),
            metadata: message.metadata.clone(),
        })
    }

    fn default_from(&self) -> String {
        format!("Contact Form <noreply@{}>", self.credentials.domain)
    }

    fn recipient(&self) -> &str {
        &self.credentials.recipient
    }

    fn service_name(&self) -> &'static str {
        "mailgun"
    }
}
