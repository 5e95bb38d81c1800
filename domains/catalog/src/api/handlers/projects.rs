//! Project catalog API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use portfolio_common::{Error, QueryParams, Result};
use serde::Deserialize;

use crate::api::middleware::CatalogState;
use crate::domain::entities::{Project, ProjectId};
use crate::domain::filter::{filter, ActiveFilter};
use crate::domain::view::{header, FilterButton};

/// Query params for listing projects
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Category tag; absent means `all`
    pub tag: Option<String>,
}

/// Query params for listing header filters
#[derive(Debug, Deserialize)]
pub struct ListFiltersQuery {
    pub active: Option<String>,
}

/// List projects under a filter, in catalog order
pub async fn list_projects(
    State(state): State<CatalogState>,
    QueryParams(query): QueryParams<ListProjectsQuery>,
) -> Json<Vec<Project>> {
    let active = query
        .tag
        .as_deref()
        .map(ActiveFilter::parse)
        .unwrap_or_default();

    let projects: Vec<Project> = filter(&state.catalog, &active)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(filter = %active, count = projects.len(), "Listed projects");
    Json(projects)
}

/// Get a single project by ID
pub async fn get_project(
    State(state): State<CatalogState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Project>> {
    raw_id
        .parse::<ProjectId>()
        .ok()
        .and_then(|id| state.catalog.get(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Project {} not found", raw_id)))
}

/// List the header filter buttons
pub async fn list_filters(
    QueryParams(query): QueryParams<ListFiltersQuery>,
) -> Json<Vec<FilterButton>> {
    let active = query
        .active
        .as_deref()
        .map(ActiveFilter::parse)
        .unwrap_or_default();
    Json(header(&active))
}
