//! Integration tests for the participant repository and the PostgreSQL store.
//!
//! `#[sqlx::test]` provisions a fresh database per test from `DATABASE_URL`.

use hackdir_core::participant::NewParticipant;
use hackdir_core::store::{fetch_grid_sample, ParticipantStore};
use hackdir_db::repositories::ParticipantRepo;
use hackdir_db::PgParticipantStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn submission(name: &str) -> NewParticipant {
    NewParticipant {
        name: name.to_string(),
        linkedin_url: format!("https://www.linkedin.com/in/{}", name.to_lowercase()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_returns_row_with_optional_fields(pool: PgPool) {
    let input = NewParticipant {
        project_name: Some("Engine".to_string()),
        project_url: Some("https://engine.dev".to_string()),
        ..submission("Ada")
    };

    let row = ParticipantRepo::insert(&pool, &input).await.unwrap();

    assert_eq!(row.name, "Ada");
    assert_eq!(row.project_name.as_deref(), Some("Engine"));
    assert!(row.portfolio_url.is_none());

    let found = ParticipantRepo::find_by_id(&pool, row.id).await.unwrap();
    assert_eq!(found.map(|r| r.id), Some(row.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_is_oldest_first(pool: PgPool) {
    for name in ["Ada", "Grace", "Katherine"] {
        ParticipantRepo::insert(&pool, &submission(name)).await.unwrap();
    }

    let names: Vec<_> = ParticipantRepo::list_all(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, vec!["Ada", "Grace", "Katherine"]);
    assert_eq!(ParticipantRepo::count(&pool).await.unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_random_sample_and_highlight(pool: PgPool) {
    let store = PgParticipantStore::new(pool);
    let mut last = None;
    for i in 0..20 {
        last = Some(store.create(submission(&format!("P{i}"))).await.unwrap());
    }
    let target = last.unwrap().id;

    assert_eq!(store.fetch_random(5).await.unwrap().len(), 5);

    let sampled = fetch_grid_sample(&store, 5, Some(target)).await.unwrap();
    assert_eq!(sampled.len(), 5);
    assert!(sampled.iter().any(|p| p.id == target));
    assert!(store.health_check().await.is_ok());
}
