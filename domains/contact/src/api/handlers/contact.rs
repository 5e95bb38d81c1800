//! Contact relay handler
//!
//! Validates a submission and forwards it to the site owner through the
//! configured `EmailService`.

use axum::{extract::State, Json};
use portfolio_common::{Error, JsonBody, Result};
use serde::{Deserialize, Serialize};

use crate::api::middleware::ContactState;
use crate::domain::entities::ContactSubmission;

pub const ACCEPTED_MESSAGE: &str = "Email sent successfully!";
const CONFIGURATION_ERROR: &str = "Email service configuration error";
const DELIVERY_ERROR: &str = "Failed to send email. Please try again later.";

/// Request body; absent fields are reported as missing rather than malformed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactAccepted {
    pub message: String,
}

/// Relay a contact submission by email
pub async fn submit_contact(
    State(state): State<ContactState>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> Result<Json<ContactAccepted>> {
    let submission = ContactSubmission::from_parts(request.name, request.email, request.message)?;

    let Some(email) = state.email.as_ref() else {
        tracing::error!("Contact submission received but email delivery is not configured");
        return Err(Error::Configuration(CONFIGURATION_ERROR.to_string()));
    };

    let receipt = email
        .send_contact_message(&submission.name, &submission.email, &submission.message)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                provider = email.service_name(),
                "Failed to deliver contact message"
            );
            Error::Internal(DELIVERY_ERROR.to_string())
        })?;

    tracing::info!(
        message_id = %receipt.message_id,
        provider = %receipt.provider,
        "Contact message delivered"
    );

    Ok(Json(ContactAccepted {
        message: ACCEPTED_MESSAGE.to_string(),
    }))
}
