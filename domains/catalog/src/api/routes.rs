//! Route definitions for Catalog domain API

use axum::{routing::get, Router};

use super::handlers::{page, projects};
use super::middleware::CatalogState;

/// Create project routes
fn project_routes() -> Router<CatalogState> {
    Router::new()
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{id}", get(projects::get_project))
        .route("/api/filters", get(projects::list_filters))
}

/// Create page view routes
fn page_routes() -> Router<CatalogState> {
    Router::new().route("/api/page", get(page::get_page))
}

/// Create all Catalog domain API routes
pub fn routes() -> Router<CatalogState> {
    Router::new().merge(project_routes()).merge(page_routes())
}
