//! Route definitions for participants.

use axum::routing::get;
use axum::Router;

use crate::handlers::participants;
use crate::state::AppState;

/// Participant routes mounted at `/participants`.
///
/// ```text
/// GET    /          -> list_participants
/// POST   /          -> create_participant
/// GET    /count     -> count_participants
/// GET    /{id}      -> get_participant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(participants::list_participants).post(participants::create_participant),
        )
        .route("/count", get(participants::count_participants))
        .route("/{id}", get(participants::get_participant))
}
