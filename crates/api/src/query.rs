//! Query parameter types for API handlers.

use hackdir_core::types::ParticipantId;
use serde::Deserialize;

/// `?cols=&rows=&highlight=` for the grid view.
///
/// Missing dimensions fall back to the configured grid shape. `highlight`
/// names a just-added participant to pin and mark.
#[derive(Debug, Default, Deserialize)]
pub struct GridParams {
    pub cols: Option<u32>,
    pub rows: Option<u32>,
    pub highlight: Option<String>,
}

impl GridParams {
    /// The highlighted participant, if `highlight` is a well-formed id.
    ///
    /// A malformed id cannot match anyone, so it is treated as absent.
    pub fn highlight_id(&self) -> Option<ParticipantId> {
        self.highlight
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
    }
}

/// `?mode=grouped|deduplicated` for the project listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsParams {
    pub mode: Option<String>,
}
