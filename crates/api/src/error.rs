use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hackdir_core::announce::{self, Announcement};
use hackdir_core::error::CoreError;
use hackdir_core::store::StoreError;
use hackdir_core::upload::UploadError;
use hackdir_core::validation::{FieldError, SubmissionField, MSG_SUBMIT_FAILED};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain, store and upload errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error", "code", "fields"?, "announcement"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hackdir_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The participant store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An avatar upload was rejected.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A valid submission could not be stored.
    #[error("Failed to persist participant: {0}")]
    PersistFailed(StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields: Vec<FieldError> = Vec::new();
        let mut announcement: Option<Announcement> = None;

        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => {
                let summary = core.to_string();
                match core {
                    CoreError::NotFound { entity, id } => (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} with id {id} not found"),
                    ),
                    CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
                    CoreError::InvalidFields(errors) => {
                        fields = errors;
                        (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", summary)
                    }
                    CoreError::Internal(msg) => {
                        tracing::error!(error = %msg, "Internal core error");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "INTERNAL_ERROR",
                            "An internal error occurred".to_string(),
                        )
                    }
                }
            }

            // --- Store errors ---
            AppError::Store(StoreError::Unavailable(msg)) => {
                tracing::warn!(error = %msg, "Participant store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The participant directory is temporarily unavailable".to_string(),
                )
            }
            AppError::Store(StoreError::Backend(msg)) => {
                tracing::error!(error = %msg, "Participant store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- Submission errors ---
            AppError::Upload(err) => {
                fields.push(FieldError::new(SubmissionField::Avatar, err.to_string()));
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            AppError::PersistFailed(err) => {
                tracing::error!(error = %err, "Failed to add participant");
                fields.push(FieldError::new(SubmissionField::Name, MSG_SUBMIT_FAILED));
                announcement = Some(Announcement::new(announce::PARTICIPANT_ADD_FAILED));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSIST_FAILED",
                    announce::PARTICIPANT_ADD_FAILED.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if !fields.is_empty() {
            body["fields"] = json!(fields);
        }
        if let Some(announcement) = announcement {
            body["announcement"] = json!(announcement);
        }

        (status, axum::Json(body)).into_response()
    }
}
