//! Repository for the `participants` table.

use hackdir_core::participant::NewParticipant;
use hackdir_core::types::ParticipantId;
use sqlx::PgPool;

use crate::models::participant::ParticipantRow;

/// Column list for `participants` queries.
const COLUMNS: &str = "\
    id, name, linkedin_url, portfolio_url, project_url, project_name, \
    avatar_image, created_at";

/// Insert and read operations for participants. Rows are never updated.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Insert a validated submission under a fresh time-ordered id.
    pub async fn insert(pool: &PgPool, input: &NewParticipant) -> Result<ParticipantRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants \
                (id, name, linkedin_url, portfolio_url, project_url, project_name, avatar_image) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(uuid::Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.linkedin_url)
            .bind(input.portfolio_url.as_deref())
            .bind(input.project_url.as_deref())
            .bind(input.project_name.as_deref())
            .bind(input.avatar_image.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Every participant, oldest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ParticipantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants ORDER BY created_at, id");
        sqlx::query_as::<_, ParticipantRow>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: ParticipantId,
    ) -> Result<Option<ParticipantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Up to `limit` participants in random order.
    pub async fn list_random(pool: &PgPool, limit: i64) -> Result<Vec<ParticipantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants ORDER BY RANDOM() LIMIT $1");
        sqlx::query_as::<_, ParticipantRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM participants")
            .fetch_one(pool)
            .await
    }
}
