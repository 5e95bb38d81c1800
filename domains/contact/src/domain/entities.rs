//! Domain entities for the Contact domain
//!
//! The same validation runs in the form (before any network call) and in the
//! relay endpoint (before any delivery attempt).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use portfolio_common::Error;

/// Basic `local@domain.tld` shape
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check an address against the accepted email shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validation failures, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl From<ContactValidationError> for Error {
    fn from(err: ContactValidationError) -> Self {
        Error::Validation(err.to_string())
    }
}

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// A validated contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate the three fields: all non-empty first, then email shape
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        let (name, email, message) = (name.into(), email.into(), message.into());

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactValidationError::MissingFields);
        }

        if !is_valid_email(&email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    /// Validate fields that may be absent from a request body
    pub fn from_parts(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactValidationError> {
        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Self::new(name, email, message),
            _ => Err(ContactValidationError::MissingFields),
        }
    }
}
