//! Route definitions for Contact domain API

use axum::{routing::post, Router};

use super::handlers::contact;
use super::middleware::ContactState;

/// Create all Contact domain API routes
pub fn routes() -> Router<ContactState> {
    Router::new().route("/api/contact", post(contact::submit_contact))
}
