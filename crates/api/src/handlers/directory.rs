//! Handlers for the randomized grid and the project listing.
//!
//! Both views are rebuilt on every request with a fresh [`RenderPass`]. Store
//! failures degrade to the unavailable views rather than an error status.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use hackdir_core::grid::GridGeometry;
use hackdir_core::projects::ProjectListingMode;
use hackdir_core::render::{self, RenderPass};
use hackdir_core::store::fetch_grid_sample;

use crate::error::{AppError, AppResult};
use crate::query::{GridParams, ProjectsParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/grid
///
/// Lay out a random sample of participants on the grid, with the featured
/// card at the center. `highlight` pins a just-added participant first.
pub async fn grid_view(
    State(state): State<AppState>,
    params: Result<Query<GridParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let highlight = params.highlight_id();
    let geometry = GridGeometry::new(
        params.cols.unwrap_or(state.config.grid.cols),
        params.rows.unwrap_or(state.config.grid.rows),
    )?;
    let general_slots = geometry.slot_count() - 1;

    let sampled = fetch_grid_sample(state.store.as_ref(), general_slots, highlight).await;

    let view = match sampled {
        Ok(participants) => {
            let view = RenderPass::from_entropy().grid(&participants, geometry, highlight)?;
            if highlight.is_some() && !view.highlight_placed {
                tracing::debug!(?highlight, "Highlighted participant not placed");
            }
            view
        }
        Err(e) => {
            tracing::error!(error = %e, "Error loading participants for grid");
            render::unavailable_grid(geometry)
        }
    };

    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/projects
///
/// Project listing in the requested mode, or the configured default.
pub async fn project_listing(
    State(state): State<AppState>,
    Query(params): Query<ProjectsParams>,
) -> AppResult<impl IntoResponse> {
    let mode = match params.mode.as_deref() {
        Some(raw) => raw.parse::<ProjectListingMode>()?,
        None => state.config.project_listing_mode,
    };

    let view = match state.store.fetch_all().await {
        Ok(participants) => RenderPass::from_entropy().projects(&participants, mode),
        Err(e) => {
            tracing::error!(error = %e, "Error loading projects");
            render::unavailable_projects(mode)
        }
    };

    Ok(Json(DataResponse { data: view }))
}
