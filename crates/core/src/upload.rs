//! Avatar upload checks and inline `data:` URL encoding.
//!
//! Uploaded avatars are stored inline, so they are capped at
//! [`MAX_AVATAR_BYTES`] and restricted to [`ACCEPTED_AVATAR_TYPES`]. The
//! declared content type must agree with the sniffed file header.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use serde::Serialize;

/// Size ceiling for an avatar image (500 KiB).
pub const MAX_AVATAR_BYTES: usize = 500 * 1024;

pub const ACCEPTED_AVATAR_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid file type. Please upload a JPG, PNG, GIF, or WebP image")]
    InvalidType,

    #[error("File is too large. Maximum size is 500KB")]
    TooLarge { size: usize },

    #[error("Could not read the uploaded image")]
    MalformedDataUrl,
}

/// An avatar ready to be stored on a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedAvatar {
    pub data_url: String,
    pub content_type: &'static str,
    pub size_bytes: usize,
}

/// Check `bytes` against the declared type and encode them as a `data:` URL.
pub fn encode_avatar(bytes: &[u8], declared_type: &str) -> Result<EncodedAvatar, UploadError> {
    let content_type = check_avatar(bytes, declared_type)?;
    Ok(EncodedAvatar {
        data_url: format!("data:{content_type};base64,{}", STANDARD.encode(bytes)),
        content_type,
        size_bytes: bytes.len(),
    })
}

/// Re-check an avatar that arrives already encoded as a `data:` URL.
pub fn check_data_url(data_url: &str) -> Result<(), UploadError> {
    let (declared_type, bytes) = decode_data_url(data_url)?;
    check_avatar(&bytes, &declared_type).map(|_| ())
}

/// Split a base64 `data:` URL into its media type and decoded payload.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), UploadError> {
    let rest = data_url
        .trim()
        .strip_prefix("data:")
        .ok_or(UploadError::MalformedDataUrl)?;
    let (media_type, payload) = rest
        .split_once(";base64,")
        .ok_or(UploadError::MalformedDataUrl)?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|_| UploadError::MalformedDataUrl)?;
    Ok((media_type.to_string(), bytes))
}

/// Validate type first, then size. Returns the canonical content type.
fn check_avatar(bytes: &[u8], declared_type: &str) -> Result<&'static str, UploadError> {
    let declared = accepted_type(declared_type).ok_or(UploadError::InvalidType)?;
    if sniffed_type(bytes) != Some(declared) {
        return Err(UploadError::InvalidType);
    }
    if bytes.len() > MAX_AVATAR_BYTES {
        return Err(UploadError::TooLarge { size: bytes.len() });
    }
    Ok(declared)
}

/// Match a declared content type (parameters ignored) against the accepted list.
fn accepted_type(declared: &str) -> Option<&'static str> {
    let essence = declared.split(';').next()?.trim().to_lowercase();
    ACCEPTED_AVATAR_TYPES
        .iter()
        .copied()
        .find(|accepted| *accepted == essence)
}

fn sniffed_type(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
