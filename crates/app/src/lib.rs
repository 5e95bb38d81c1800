//! Portfolio application composition root
//!
//! Composes the catalog and contact routers into a single application and
//! owns the HTTP middleware stack shared by both binaries.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use portfolio_catalog::{Catalog, CatalogState, SiteContent};
use portfolio_common::config::ServerConfig;
use portfolio_contact::ContactState;
use portfolio_email::{EmailConfig, EmailServiceFactory};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Everything the process reads from its environment
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}

/// Create the main application router with all routes and middleware
pub async fn create_app(config: &AppConfig) -> Result<Router, anyhow::Error> {
    let catalog = Catalog::load(&config.server.catalog_path)?;

    let contact_state = contact_state(&config.email);
    let catalog_state = CatalogState::new(catalog, SiteContent::default());

    Ok(with_middleware(
        router(catalog_state, contact_state),
        &config.server,
    ))
}

/// Build the relay state.
///
/// Delivery needs an enabled provider and all three Mailgun credentials;
/// otherwise the relay is left unconfigured and each valid submission is
/// answered with a configuration error.
fn contact_state(config: &EmailConfig) -> ContactState {
    if !config.enabled {
        tracing::warn!("Email delivery disabled; contact submissions will fail");
        return ContactState::unconfigured();
    }

    if let Err(e) = config.credentials() {
        tracing::warn!(error = %e, "Email delivery unavailable; contact submissions will fail");
        return ContactState::unconfigured();
    }

    match EmailServiceFactory::create(config.clone()) {
        Ok(service) => {
            tracing::info!(provider = service.service_name(), "Email delivery configured");
            ContactState::new(Arc::from(service))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Email delivery unavailable; contact submissions will fail");
            ContactState::unconfigured()
        }
    }
}

/// Compose domain routers with shared infrastructure routes
pub fn router(catalog: CatalogState, contact: ContactState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(portfolio_catalog::routes().with_state(catalog))
        .merge(portfolio_contact::routes().with_state(contact))
}

/// Apply the shared middleware stack, outermost last
pub fn with_middleware(app: Router, server: &ServerConfig) -> Router {
    app.layer(body_limit_layer(server.max_body_bytes))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(server.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins; permissive when none are configured
pub fn build_cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Cap request bodies at `max_bytes`; `JsonBody` turns an overflow into a 413
pub fn body_limit_layer(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
