use axum::routing::post;
use axum::Router;

use crate::handlers::avatars;
use crate::state::AppState;

/// Avatar routes mounted at `/avatars`.
///
/// ```text
/// POST   /          -> upload_avatar (multipart, field `avatar`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(avatars::upload_avatar))
}
