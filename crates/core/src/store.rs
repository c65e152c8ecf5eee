//! The participant store seam.
//!
//! Implementations live in `hackdir-db`; the API only sees
//! `Arc<dyn ParticipantStore>`.

use async_trait::async_trait;

use crate::participant::{NewParticipant, Participant};
use crate::shuffle::sample;
use crate::types::ParticipantId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Participant store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the operation failed.
    #[error("Participant store error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Every stored participant, in storage order.
    async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError>;

    /// Persist a validated submission, assigning `id` and `created_at`.
    async fn create(&self, input: NewParticipant) -> Result<Participant, StoreError>;

    async fn fetch_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError> {
        Ok(self.fetch_all().await?.into_iter().find(|p| p.id == id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.fetch_all().await?.len())
    }

    /// A shuffled sample of at most `count` participants.
    async fn fetch_random(&self, count: usize) -> Result<Vec<Participant>, StoreError> {
        let all = self.fetch_all().await?;
        Ok(sample(&all, count, &mut rand::rng()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.count().await.map(|_| ())
    }
}

/// Participants to feed a grid with `general_slots` non-featured slots.
///
/// Starts from a random sample. When `highlight` is set but missed the
/// sample, the store is asked for it directly and it replaces the tail of
/// the sample, so the just-added participant can still be placed.
pub async fn fetch_grid_sample(
    store: &dyn ParticipantStore,
    general_slots: usize,
    highlight: Option<ParticipantId>,
) -> Result<Vec<Participant>, StoreError> {
    let mut sampled = store.fetch_random(general_slots).await?;

    let Some(id) = highlight else {
        return Ok(sampled);
    };
    if general_slots == 0 || sampled.iter().any(|p| p.id == id) {
        return Ok(sampled);
    }

    if let Some(found) = store.fetch_by_id(id).await? {
        sampled.insert(0, found);
        sampled.truncate(general_slots);
    }
    Ok(sampled)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;

    use super::*;
    use crate::participant::fixtures::participant;

    /// Minimal store relying on every default method.
    struct VecStore(Mutex<Vec<Participant>>);

    impl VecStore {
        fn with(n: usize) -> Self {
            Self(Mutex::new(
                (0..n).map(|i| participant(&format!("P{i}"))).collect(),
            ))
        }

        fn ids(&self) -> Vec<ParticipantId> {
            self.0.lock().unwrap().iter().map(|p| p.id).collect()
        }
    }

    #[async_trait]
    impl ParticipantStore for VecStore {
        async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError> {
            Ok(self.0.lock().unwrap().clone())
        }

        async fn create(&self, input: NewParticipant) -> Result<Participant, StoreError> {
            let p = input.into_participant(uuid::Uuid::now_v7(), chrono::Utc::now());
            self.0.lock().unwrap().push(p.clone());
            Ok(p)
        }
    }

    struct DownStore;

    #[async_trait]
    impl ParticipantStore for DownStore {
        async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn create(&self, _input: NewParticipant) -> Result<Participant, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn default_methods_scan_fetch_all() {
        let store = VecStore::with(4);
        let ids = store.ids();

        assert_eq!(store.count().await.unwrap(), 4);
        assert_eq!(store.fetch_by_id(ids[2]).await.unwrap().unwrap().id, ids[2]);
        assert!(store.fetch_by_id(uuid::Uuid::now_v7()).await.unwrap().is_none());
        assert!(store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn fetch_random_caps_the_sample() {
        let store = VecStore::with(20);

        assert_eq!(store.fetch_random(11).await.unwrap().len(), 11);
        assert_eq!(store.fetch_random(50).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn grid_sample_always_contains_highlight() {
        let store = VecStore::with(40);
        let target = store.ids()[39];

        for _ in 0..20 {
            let sampled = fetch_grid_sample(&store, 11, Some(target)).await.unwrap();
            assert_eq!(sampled.len(), 11);
            assert_eq!(sampled.iter().filter(|p| p.id == target).count(), 1);
        }
    }

    #[tokio::test]
    async fn grid_sample_ignores_unknown_highlight() {
        let store = VecStore::with(3);

        let sampled = fetch_grid_sample(&store, 11, Some(uuid::Uuid::now_v7()))
            .await
            .unwrap();

        assert_eq!(sampled.len(), 3);
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        assert_matches!(DownStore.count().await, Err(StoreError::Unavailable(_)));
        assert_matches!(
            fetch_grid_sample(&DownStore, 11, None).await,
            Err(StoreError::Unavailable(_))
        );
    }

    #[tokio::test]
    async fn create_assigns_identity() {
        let store = VecStore::with(0);
        let created = store
            .create(NewParticipant {
                name: "Ada".into(),
                linkedin_url: "https://linkedin.com/in/ada".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(store.ids(), vec![created.id]);
    }
}
