//! Avatar upload handler.

use axum::extract::Multipart;
use axum::response::IntoResponse;
use axum::Json;
use hackdir_core::upload::encode_avatar;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Multipart field carrying the image.
const AVATAR_FIELD: &str = "avatar";

/// POST /api/v1/avatars
///
/// Accepts a multipart form with an `avatar` file field. The image is checked
/// (type, then size) and returned as an inline `data:` URL to submit with the
/// participant.
pub async fn upload_avatar(mut multipart: Multipart) -> AppResult<impl IntoResponse> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((content_type, data.to_vec()));
    }

    let (content_type, data) = upload
        .ok_or_else(|| AppError::BadRequest(format!("Missing required '{AVATAR_FIELD}' field")))?;

    let encoded = encode_avatar(&data, &content_type)?;
    tracing::debug!(
        content_type = encoded.content_type,
        size_bytes = encoded.size_bytes,
        "Avatar accepted"
    );

    Ok(Json(DataResponse { data: encoded }))
}
