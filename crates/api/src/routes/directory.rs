//! Route definitions for the randomized directory views.

use axum::routing::get;
use axum::Router;

use crate::handlers::directory;
use crate::state::AppState;

/// Directory views, merged at the `/api/v1` root.
///
/// ```text
/// GET    /grid       -> grid_view
/// GET    /projects   -> project_listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grid", get(directory::grid_view))
        .route("/projects", get(directory::project_listing))
}
