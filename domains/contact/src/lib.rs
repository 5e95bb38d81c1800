//! Contact domain: form state, submission client, mail relay endpoint

pub mod api;
pub mod client;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{ContactField, ContactSubmission, ContactValidationError};
pub use domain::form::{ContactForm, FormError};
pub use domain::state::{SubmissionEvent, SubmissionState, SubmissionStateMachine};

// Re-export client types
pub use client::{ContactTransport, HttpContactTransport, MockContactTransport, TransportError};

// Re-export API types
pub use api::routes;
pub use api::ContactState;
