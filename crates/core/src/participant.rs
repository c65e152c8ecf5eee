//! Participant records and the submission payload that creates them.

use serde::{Deserialize, Serialize};

use crate::types::{ParticipantId, Timestamp};

/// One registered hackathon attendee.
///
/// Records are immutable once stored. `project_url` and `project_name` are
/// either both present or both absent; submission validation enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub linkedin_url: String,
    pub portfolio_url: Option<String>,
    pub project_url: Option<String>,
    pub project_name: Option<String>,
    /// Inline `data:` URL of the uploaded avatar, if any.
    pub avatar_image: Option<String>,
    pub created_at: Timestamp,
}

impl Participant {
    /// The `(name, url)` of the submitted project, when both are non-blank.
    pub fn project(&self) -> Option<(&str, &str)> {
        let name = self.project_name.as_deref().map(str::trim)?;
        let url = self.project_url.as_deref().map(str::trim)?;
        if name.is_empty() || url.is_empty() {
            return None;
        }
        Some((name, url))
    }

    /// Whether the participant uploaded their own avatar image.
    pub fn has_avatar_image(&self) -> bool {
        self.avatar_image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Submission payload for a new participant.
///
/// Fields arrive as typed by the user; [`crate::validation::validate_submission`]
/// trims them and turns blank optional fields into `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub avatar_image: Option<String>,
}

impl NewParticipant {
    /// Materialize the stored record once the store has assigned identity.
    pub fn into_participant(self, id: ParticipantId, created_at: Timestamp) -> Participant {
        Participant {
            id,
            name: self.name,
            linkedin_url: self.linkedin_url,
            portfolio_url: self.portfolio_url,
            project_url: self.project_url,
            project_name: self.project_name,
            avatar_image: self.avatar_image,
            created_at,
        }
    }
}
