//! End-to-end contact flow: form model -> HTTP transport -> relay -> email
//!
//! Serves the full application on an ephemeral port and drives it through
//! `HttpContactTransport` the way a front end would.

#![allow(dead_code)]

mod common;

use portfolio_contact::{
    ContactField, ContactForm, HttpContactTransport, SubmissionState,
};
use portfolio_email::mock::MockEmailService;

use crate::common::TestApp;

fn filled(name: &str, email: &str, message: &str) -> ContactForm {
    let mut form = ContactForm::new();
    form.edit(ContactField::Name, name);
    form.edit(ContactField::Email, email);
    form.edit(ContactField::Message, message);
    form
}

#[test_log::test(tokio::test)]
async fn test_successful_submission_reaches_mailbox() {
    let app = TestApp::new();
    let addr = app.spawn().await;
    let transport = HttpContactTransport::new(&format!("http://{}", addr));

    let mut form = filled("Ada", "ada@example.com", "Loved the launch film");
    let status = form.submit(&transport).await.unwrap();

    assert_eq!(status, SubmissionState::Success);
    assert_eq!(
        form.status_message(),
        Some("Thank you! Your message has been sent.")
    );
    assert_eq!(form.name(), "");
    assert_eq!(app.email.email_count(), 1);
    assert_eq!(
        app.email.last_email().unwrap().message.reply_to.as_deref(),
        Some("ada@example.com")
    );
}

#[test_log::test(tokio::test)]
async fn test_relay_error_message_is_shown() {
    let app = TestApp::with_email(MockEmailService::new_failing("quota exceeded"));
    let addr = app.spawn().await;
    let transport = HttpContactTransport::new(&format!("http://{}", addr));

    let mut form = filled("Ada", "ada@example.com", "hi");
    let status = form.submit(&transport).await.unwrap();

    assert_eq!(status, SubmissionState::Failure);
    assert_eq!(
        form.status_message(),
        Some("Failed to send email. Please try again later.")
    );
    assert_eq!(form.message(), "hi");
}

#[test_log::test(tokio::test)]
async fn test_unconfigured_relay_message_is_shown() {
    let app = TestApp::unconfigured();
    let addr = app.spawn().await;
    let transport = HttpContactTransport::new(&format!("http://{}", addr));

    let mut form = filled("Ada", "ada@example.com", "hi");
    form.submit(&transport).await.unwrap();

    assert_eq!(form.status(), SubmissionState::Failure);
    assert_eq!(
        form.status_message(),
        Some("Email service configuration error")
    );
}

#[test_log::test(tokio::test)]
async fn test_invalid_input_never_hits_the_network() {
    let app = TestApp::new();
    let addr = app.spawn().await;
    let transport = HttpContactTransport::new(&format!("http://{}", addr));

    let mut form = filled("Ada", "not-an-email", "hi");
    form.submit(&transport).await.unwrap();

    assert_eq!(form.status(), SubmissionState::Failure);
    assert_eq!(form.status_message(), Some("Invalid email format"));
    assert_eq!(app.email.attempt_count(), 0);
}

#[test_log::test(tokio::test)]
async fn test_retry_after_failure_succeeds() {
    let down = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let mut form = filled("Ada", "ada@example.com", "hi");

    form.submit(&HttpContactTransport::new(&format!("http://{}", down)))
        .await
        .unwrap();
    assert_eq!(form.status(), SubmissionState::Failure);
    assert_eq!(
        form.status_message(),
        Some("Network error. Please try again later.")
    );

    let app = TestApp::new();
    let addr = app.spawn().await;
    let status = form
        .submit(&HttpContactTransport::new(&format!("http://{}", addr)))
        .await
        .unwrap();

    assert_eq!(status, SubmissionState::Success);
    assert_eq!(app.email.email_count(), 1);
}
