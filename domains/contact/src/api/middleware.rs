//! Contact domain state

use portfolio_email::EmailService;
use std::sync::Arc;

/// Application state for the Contact domain.
///
/// `email` is `None` when the delivery credentials are not configured; the
/// relay then answers every valid submission with a configuration error.
#[derive(Clone)]
pub struct ContactState {
    pub email: Option<Arc<dyn EmailService>>,
}

impl ContactState {
    pub fn new(email: Arc<dyn EmailService>) -> Self {
        Self { email: Some(email) }
    }

    pub fn unconfigured() -> Self {
        Self { email: None }
    }
}
