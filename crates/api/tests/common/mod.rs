#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use hackdir_core::grid::GridGeometry;
use hackdir_core::participant::{NewParticipant, Participant};
use hackdir_core::projects::ProjectListingMode;
use hackdir_core::store::{ParticipantStore, StoreError};
use hackdir_db::InMemoryParticipantStore;
use hackdir_events::EventBus;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hackdir_api::config::ServerConfig;
use hackdir_api::router::build_app_router;
use hackdir_api::state::AppState;
use hackdir_api::ws::WsManager;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        grid: GridGeometry::default(),
        project_listing_mode: ProjectListingMode::Grouped,
        change_debounce_ms: 250,
        database_url: None,
    }
}

pub fn test_state(store: Arc<dyn ParticipantStore>) -> AppState {
    AppState {
        store,
        config: Arc::new(test_config()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::new(EventBus::default()),
    }
}

/// Full application router over an empty in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemoryParticipantStore::new()))
}

/// Full application router, with the production middleware stack, over `store`.
pub fn build_test_app_with(store: Arc<dyn ParticipantStore>) -> Router {
    let state = test_state(store);
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn submission(name: &str) -> NewParticipant {
    NewParticipant {
        name: name.to_string(),
        linkedin_url: format!("https://www.linkedin.com/in/{}", name.to_lowercase()),
        ..Default::default()
    }
}

pub fn with_project(name: &str, project_name: &str, project_url: &str) -> NewParticipant {
    NewParticipant {
        project_name: Some(project_name.to_string()),
        project_url: Some(project_url.to_string()),
        ..submission(name)
    }
}

/// In-memory store pre-filled with one participant per name.
pub async fn seeded_store(names: &[&str]) -> Arc<InMemoryParticipantStore> {
    let store = Arc::new(InMemoryParticipantStore::new());
    for name in names {
        store.create(submission(name)).await.unwrap();
    }
    store
}

/// A store whose every call fails as if the database were down.
pub struct FailingStore;

#[async_trait]
impl ParticipantStore for FailingStore {
    async fn fetch_all(&self) -> Result<Vec<Participant>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn create(&self, _input: NewParticipant) -> Result<Participant, StoreError> {
        Err(StoreError::Backend("insert failed".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a single-file multipart form.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "hackdir-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"upload\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Minimal PNG header padded with zeros to `len` bytes.
pub fn png_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
    bytes.resize(len.max(16), 0);
    bytes
}
