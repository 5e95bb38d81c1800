//! Portfolio - AWS Lambda Runtime

use lambda_http::{run, Error};
use tracing::info;

use portfolio_app::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing portfolio Lambda");

    let config = AppConfig::from_env();

    if config.server.cors_allowed_origins.is_none() {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing any origin");
    }

    let app = create_app(&config)
        .await
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?;

    info!("Portfolio Lambda ready to serve requests");

    run(app).await
}
