//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CATALOG_PATH: &str = "assets/projects.json";
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port for the local development server
    pub port: u16,

    /// Path of the JSON project catalog
    pub catalog_path: PathBuf,

    /// Allowed CORS origins; `None` means permissive (local development)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            cors_allowed_origins: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self {
            port: parse_or("PORT", DEFAULT_PORT),
            catalog_path: env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH)),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|raw| parse_origins(&raw))
                .filter(|origins| !origins.is_empty()),
            max_body_bytes: parse_or("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key = %key, value = %raw, "Unparseable environment value, using default");
            default
        }),
        Err(_) => default,
    }
}
