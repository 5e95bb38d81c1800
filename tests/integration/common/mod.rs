//! Common test utilities and fixtures for integration tests
//!
//! Builds the full application router over an in-memory catalog and a
//! capturing mock email service, plus request/response helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use portfolio_catalog::{Catalog, CatalogState, SiteContent};
use portfolio_common::config::ServerConfig;
use portfolio_contact::ContactState;
use portfolio_email::mock::MockEmailService;
use serde_json::Value;

/// Seven projects across every preset tag, in the wire format the catalog
/// file uses. Project 6 has no assets.
pub const CATALOG_JSON: &str = r#"[
  {"id": 1, "tag": "brand", "project_title": "Launch Film", "client": "Peerspace",
   "overview": "Brand film", "contribution": ["Direction"], "deliverables": ["Film"],
   "impact": ["Reach"], "tags": ["Brand"],
   "asssets": [{"type": "video", "url": "https://cdn.example.com/1.mp4"}]},
  {"id": 2, "tag": "ux/ui", "project_title": "Onboarding", "client": "Betr",
   "overview": "Flow redesign", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["UX/UI"],
   "asssets": [{"type": "figma", "url": "https://www.figma.com/embed?x=2"}]},
  {"id": 3, "tag": "brand", "project_title": "Identity", "client": "Clover",
   "overview": "Logo suite", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["Brand"],
   "asssets": [{"type": "image", "url": "https://cdn.example.com/3.png"}]},
  {"id": 4, "tag": "strategy", "project_title": "Narrative", "client": "Consensys",
   "overview": "Messaging", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["Strategy"],
   "asssets": [{"type": "image", "url": "https://cdn.example.com/4.png"}]},
  {"id": 5, "tag": "go-to-market", "project_title": "Premiere", "client": "Conde Nast",
   "overview": "Rollout", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["Go to Market"],
   "asssets": [{"type": "gif", "url": "https://cdn.example.com/5.gif"}]},
  {"id": 6, "tag": "brand", "project_title": "Under NDA", "client": "Confidential",
   "overview": "Withheld", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["Brand"], "asssets": []},
  {"id": 7, "tag": "brand", "project_title": "Packaging", "client": "Clover",
   "overview": "Retail", "contribution": [], "deliverables": [], "impact": [],
   "tags": ["Brand"],
   "asssets": [{"type": "image", "url": "https://cdn.example.com/7.png"}]}
]"#;

/// Test application with a capturing email service
pub struct TestApp {
    pub router: Router,
    pub email: MockEmailService,
}

impl TestApp {
    /// Application whose relay delivers into a mock
    pub fn new() -> Self {
        Self::with_email(MockEmailService::new())
    }

    /// Application using a specific mock (e.g. a failing one)
    pub fn with_email(email: MockEmailService) -> Self {
        let contact = ContactState::new(Arc::new(email.clone()));
        Self {
            router: build_router(contact),
            email,
        }
    }

    /// Application whose relay has no delivery credentials
    pub fn unconfigured() -> Self {
        Self {
            router: build_router(ContactState::unconfigured()),
            email: MockEmailService::new(),
        }
    }

    /// Serve the application on an ephemeral local port
    pub async fn spawn(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = self.router.clone();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }
}

pub fn catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).unwrap()
}

fn build_router(contact: ContactState) -> Router {
    let catalog = CatalogState::new(catalog(), SiteContent::default());
    portfolio_app::with_middleware(
        portfolio_app::router(catalog, contact),
        &ServerConfig::default(),
    )
}

/// Helper: build a request with an optional JSON body
pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(b) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
