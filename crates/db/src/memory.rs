//! Process-local [`ParticipantStore`] used when no database is configured.

use async_trait::async_trait;
use hackdir_core::participant::{NewParticipant, Participant};
use hackdir_core::store::{ParticipantStore, StoreError};
use hackdir_core::types::ParticipantId;
use tokio::sync::RwLock;

/// Participants held in insertion order behind a `RwLock`.
#[derive(Default)]
pub struct InMemoryParticipantStore {
    participants: RwLock<Vec<Participant>>,
}

impl InMemoryParticipantStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of records.
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        Self {
            participants: RwLock::new(participants),
        }
    }
}

#[async_trait]
impl ParticipantStore for InMemoryParticipantStore {
    async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError> {
        Ok(self.participants.read().await.clone())
    }

    async fn create(&self, input: NewParticipant) -> Result<Participant, StoreError> {
        let participant = input.into_participant(uuid::Uuid::now_v7(), chrono::Utc::now());
        self.participants.write().await.push(participant.clone());
        Ok(participant)
    }

    async fn fetch_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError> {
        Ok(self
            .participants
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.participants.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> NewParticipant {
        NewParticipant {
            name: name.to_string(),
            linkedin_url: format!("https://www.linkedin.com/in/{name}"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let store = InMemoryParticipantStore::new();

        let ada = store.create(submission("ada")).await.unwrap();
        let grace = store.create(submission("grace")).await.unwrap();

        assert_ne!(ada.id, grace.id);
        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(
            store.fetch_by_id(grace.id).await.unwrap().map(|p| p.name),
            Some("grace".to_string())
        );

        let names: Vec<_> = store
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["ada", "grace"]);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let store = InMemoryParticipantStore::new();
        assert!(store.fetch_by_id(uuid::Uuid::now_v7()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn random_sample_is_bounded() {
        let store = InMemoryParticipantStore::new();
        for i in 0..15 {
            store.create(submission(&format!("p{i}"))).await.unwrap();
        }

        assert_eq!(store.fetch_random(11).await.unwrap().len(), 11);
        assert!(store.health_check().await.is_ok());
    }
}
