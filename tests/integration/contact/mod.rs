//! Contact relay integration tests

use axum::http::{Method, StatusCode};
use portfolio_email::mock::MockEmailService;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{json_request, parse_body, TestApp};

async fn post_contact(app: &TestApp, body: Value) -> (StatusCode, Value) {
    let response = app
        .router
        .clone()
        .oneshot(json_request(Method::POST, "/api/contact", Some(body)))
        .await
        .unwrap();
    let status = response.status();
    (status, parse_body(response).await)
}

#[tokio::test]
async fn test_valid_submission_sends_one_email() {
    let app = TestApp::new();

    let (status, body) = post_contact(
        &app,
        json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello there" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Email sent successfully!" }));
    assert_eq!(app.email.email_count(), 1);

    let email = app.email.last_email().unwrap().message;
    assert_eq!(email.to, "owner@portfolio.test");
    assert_eq!(email.subject, "Portfolio Contact: Message from Ada");
    assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
    assert!(email.body_text.contains("Message: Hello there"));
}

#[tokio::test]
async fn test_submitter_text_is_escaped_in_html() {
    let app = TestApp::new();

    let (status, _) = post_contact(
        &app,
        json!({
            "name": "<b>Ada</b>",
            "email": "ada@example.com",
            "message": "line one\n<script>alert(1)</script>"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let html = app.email.last_email().unwrap().message.body_html.unwrap();
    assert!(html.contains("&lt;b&gt;Ada"));
    assert!(!html.contains("<b>Ada"));
    assert!(html.contains("line one<br>&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_oversized_body_rejected_as_json() {
    let app = TestApp::new();

    let (status, response) = post_contact(
        &app,
        json!({ "name": "Ada", "email": "ada@example.com", "message": "x".repeat(70 * 1024) }),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response, json!({ "error": "Request body too large" }));
    assert_eq!(app.email.attempt_count(), 0);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let app = TestApp::new();

    for body in [
        json!({}),
        json!({ "email": "ada@example.com", "message": "hi" }),
        json!({ "name": "Ada", "email": "", "message": "hi" }),
        json!({ "name": "Ada", "email": "ada@example.com", "message": null }),
    ] {
        let (status, response) = post_contact(&app, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
        assert_eq!(response, json!({ "error": "All fields are required" }));
    }

    assert_eq!(app.email.attempt_count(), 0);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = TestApp::new();

    for email in ["ada", "ada@example", "ada @example.com", "ada@@example.com"] {
        let (status, response) = post_contact(
            &app,
            json!({ "name": "Ada", "email": email, "message": "hi" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "email {}", email);
        assert_eq!(response, json!({ "error": "Invalid email format" }));
    }

    assert_eq!(app.email.attempt_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = TestApp::new();

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        parse_body(response).await,
        json!({ "error": "Invalid request body" })
    );
    assert_eq!(app.email.attempt_count(), 0);
}

#[tokio::test]
async fn test_delivery_failure_is_generic() {
    let app = TestApp::with_email(MockEmailService::new_failing(
        "Mailgun returned 401: Forbidden",
    ));

    let (status, body) = post_contact(
        &app,
        json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to send email. Please try again later." })
    );
    assert_eq!(app.email.attempt_count(), 1);
    assert_eq!(app.email.email_count(), 0);
}

#[tokio::test]
async fn test_missing_credentials_reported_per_request() {
    let app = TestApp::unconfigured();

    let (status, body) = post_contact(
        &app,
        json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Email service configuration error" }));

    // The catalog is unaffected
    let response = app
        .router
        .clone()
        .oneshot(json_request(Method::GET, "/api/projects", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(json_request(Method::GET, "/api/contact", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
