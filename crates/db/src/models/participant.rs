//! Row model for the `participants` table.

use hackdir_core::participant::Participant;
use hackdir_core::types::{ParticipantId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `participants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ParticipantRow {
    pub id: ParticipantId,
    pub name: String,
    pub linkedin_url: String,
    pub portfolio_url: Option<String>,
    pub project_url: Option<String>,
    pub project_name: Option<String>,
    pub avatar_image: Option<String>,
    pub created_at: Timestamp,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant {
            id: row.id,
            name: row.name,
            linkedin_url: row.linkedin_url,
            portfolio_url: row.portfolio_url,
            project_url: row.project_url,
            project_name: row.project_name,
            avatar_image: row.avatar_image,
            created_at: row.created_at,
        }
    }
}
