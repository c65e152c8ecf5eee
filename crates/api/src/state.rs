use std::sync::Arc;

use hackdir_core::store::ParticipantStore;
use hackdir_events::EventBus;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Participant store (PostgreSQL or in-memory).
    pub store: Arc<dyn ParticipantStore>,
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Publishes directory changes to background services.
    pub event_bus: Arc<EventBus>,
}
