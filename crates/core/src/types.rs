/// Participants are keyed by an opaque, time-ordered UUID (v7).
pub type ParticipantId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
