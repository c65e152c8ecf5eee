pub mod avatars;
pub mod directory;
pub mod health;
pub mod participants;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                         WebSocket (participant snapshots)
///
/// /participants               list (all participants view), create
/// /participants/count         participant count
/// /participants/{id}          get one
///
/// /grid                       randomized grid view (?cols=&rows=&highlight=)
/// /projects                   project listing (?mode=grouped|deduplicated)
///
/// /avatars                    avatar upload (multipart)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/participants", participants::router())
        .merge(directory::router())
        .nest("/avatars", avatars::router())
}
