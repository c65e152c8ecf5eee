//! PostgreSQL-backed [`ParticipantStore`].

use async_trait::async_trait;
use hackdir_core::participant::{NewParticipant, Participant};
use hackdir_core::store::{ParticipantStore, StoreError};
use hackdir_core::types::ParticipantId;

use crate::repositories::ParticipantRepo;
use crate::DbPool;

#[derive(Clone)]
pub struct PgParticipantStore {
    pool: DbPool,
}

impl PgParticipantStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantStore for PgParticipantStore {
    async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError> {
        let rows = ParticipantRepo::list_all(&self.pool).await.map_err(store_error)?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn create(&self, input: NewParticipant) -> Result<Participant, StoreError> {
        let row = ParticipantRepo::insert(&self.pool, &input)
            .await
            .map_err(store_error)?;
        tracing::debug!(participant_id = %row.id, "Participant row inserted");
        Ok(row.into())
    }

    async fn fetch_by_id(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError> {
        let row = ParticipantRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(Participant::from))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = ParticipantRepo::count(&self.pool).await.map_err(store_error)?;
        Ok(count.max(0) as usize)
    }

    async fn fetch_random(&self, count: usize) -> Result<Vec<Participant>, StoreError> {
        let limit = i64::try_from(count).unwrap_or(i64::MAX);
        let rows = ParticipantRepo::list_random(&self.pool, limit)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }
}

/// Connection-level failures mean the store is unavailable; anything else is
/// a backend error.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            tracing::warn!(error = %err, "Participant store unreachable");
            StoreError::Unavailable(err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Participant store query failed");
            StoreError::Backend(other.to_string())
        }
    }
}
