//! Composed page view API handler

use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use portfolio_common::{Error, QueryParams, Result};
use serde::Deserialize;

use crate::api::middleware::CatalogState;
use crate::domain::entities::ProjectId;
use crate::domain::filter::ActiveFilter;
use crate::domain::state::PortfolioView;
use crate::domain::view::{compose, PageView};

/// Query params describing the session state to render
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub filter: Option<String>,
    pub selected: Option<ProjectId>,
}

/// Render the page for a filter and optional selection.
///
/// The selection is applied after the filter, so it must belong to the
/// filtered set.
pub async fn get_page(
    State(state): State<CatalogState>,
    QueryParams(query): QueryParams<PageQuery>,
) -> Result<Json<PageView>> {
    let mut view = PortfolioView::new(Arc::clone(&state.catalog));

    if let Some(raw) = query.filter.as_deref() {
        view.change_filter(ActiveFilter::parse(raw));
    }

    if let Some(id) = query.selected {
        view.select(id).map_err(|e| {
            tracing::debug!(error = %e, project_id = id, "Rejected page selection");
            Error::NotFound(format!("Project {} not found", id))
        })?;
    }

    Ok(Json(compose(&view, &state.site)))
}
