//! Handlers for listing, reading and registering participants.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hackdir_core::announce::{self, Announcement};
use hackdir_core::error::CoreError;
use hackdir_core::participant::{NewParticipant, Participant};
use hackdir_core::render::{self, RenderPass};
use hackdir_core::types::ParticipantId;
use hackdir_core::validation::validate_submission;
use hackdir_events::DirectoryEvent;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a successful registration.
#[derive(Debug, Serialize)]
pub struct CreatedParticipant {
    pub participant: Participant,
    /// Pass back as `?highlight=` to pin the new card on the grid.
    pub highlight_id: ParticipantId,
    pub announcement: Announcement,
}

#[derive(Debug, Serialize)]
pub struct ParticipantCount {
    pub count: usize,
}

/// GET /api/v1/participants
///
/// Every participant in shuffled order with avatars assigned. A store failure
/// still answers 200 with an empty view and an error announcement.
pub async fn list_participants(State(state): State<AppState>) -> impl IntoResponse {
    let view = match state.store.fetch_all().await {
        Ok(participants) => RenderPass::from_entropy().all_participants(&participants),
        Err(e) => {
            tracing::error!(error = %e, "Error loading participants");
            render::unavailable_participants()
        }
    };

    Json(DataResponse { data: view })
}

/// POST /api/v1/participants
///
/// Validate and store a submission, then announce the change on the bus.
pub async fn create_participant(
    State(state): State<AppState>,
    Json(input): Json<NewParticipant>,
) -> AppResult<impl IntoResponse> {
    let clean = validate_submission(&input)?;

    let participant = state
        .store
        .create(clean)
        .await
        .map_err(AppError::PersistFailed)?;

    state
        .event_bus
        .publish(DirectoryEvent::participant_added(participant.id));

    tracing::info!(participant_id = %participant.id, "Participant created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedParticipant {
                highlight_id: participant.id,
                participant,
                announcement: Announcement::new(announce::PARTICIPANT_ADDED),
            },
        }),
    ))
}

/// GET /api/v1/participants/count
pub async fn count_participants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = state.store.count().await?;

    Ok(Json(DataResponse {
        data: ParticipantCount { count },
    }))
}

/// GET /api/v1/participants/{id}
pub async fn get_participant(
    State(state): State<AppState>,
    Path(id): Path<ParticipantId>,
) -> AppResult<impl IntoResponse> {
    let participant = state
        .store
        .fetch_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id,
        }))?;

    Ok(Json(DataResponse { data: participant }))
}
