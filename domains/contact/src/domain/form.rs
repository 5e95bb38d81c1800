//! Contact form model driven by `SubmissionStateMachine`

use thiserror::Error;

use super::entities::{ContactField, ContactSubmission, ContactValidationError};
use super::state::{StateError, SubmissionEvent, SubmissionState, SubmissionStateMachine};
use crate::client::{ContactTransport, TransportError};

/// Banner text after the relay accepted a message
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),

    #[error(transparent)]
    State(#[from] StateError),
}

/// Field values plus submission status for one contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: SubmissionState,
    status_message: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> SubmissionState {
        self.status
    }

    /// Banner or inline text for the current status
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The submit control is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        SubmissionStateMachine::can_transition(self.status, SubmissionEvent::Submit)
    }

    fn fire(&mut self, event: SubmissionEvent) -> Result<SubmissionState, StateError> {
        let next = SubmissionStateMachine::transition(self.status, event)?;
        if next != self.status {
            tracing::debug!(from = %self.status, to = %next, event = %event, "Contact form transition");
        }
        self.status = next;
        Ok(next)
    }

    /// Update one field. A showing banner is dismissed.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }

        let had_banner = self.status.has_banner();
        // Edit is defined for every state
        if self.fire(SubmissionEvent::Edit).is_ok() && had_banner {
            self.status_message = None;
        }
    }

    /// Validate the fields and enter `Submitting`.
    ///
    /// Invalid input moves the form to `Failure` with the validation message
    /// and no request is made.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if !self.can_submit() {
            return Err(StateError::InvalidTransition {
                from: self.status.to_string(),
                event: SubmissionEvent::Submit.to_string(),
            }
            .into());
        }

        match ContactSubmission::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
        ) {
            Ok(submission) => {
                self.fire(SubmissionEvent::Submit)?;
                self.status_message = None;
                Ok(submission)
            }
            Err(err) => {
                self.fire(SubmissionEvent::Rejected)?;
                self.status_message = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Apply the relay's answer. Returns false when no submission is in
    /// flight, e.g. the panel was collapsed meanwhile.
    pub fn complete(&mut self, outcome: Result<String, TransportError>) -> bool {
        if self.status != SubmissionState::Submitting {
            tracing::debug!(status = %self.status, "Discarding late contact response");
            return false;
        }

        match outcome {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status_message = Some(SUCCESS_MESSAGE.to_string());
                self.fire(SubmissionEvent::Succeeded).is_ok()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission failed");
                self.status_message = Some(err.user_message().to_string());
                self.fire(SubmissionEvent::Failed).is_ok()
            }
        }
    }

    /// Validate, send through `transport` and apply the outcome
    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmissionState, FormError>
    where
        T: ContactTransport + ?Sized,
    {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(FormError::Invalid(_)) => return Ok(self.status),
            Err(err) => return Err(err),
        };

        let outcome = transport.send(&submission).await;
        self.complete(outcome);
        Ok(self.status)
    }

    /// The containing panel closed: clear the fields, any banner and any
    /// pending submission
    pub fn collapse(&mut self) {
        if self.fire(SubmissionEvent::Collapse).is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.status_message = None;
        }
    }
}
