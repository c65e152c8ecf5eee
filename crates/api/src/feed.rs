//! Live participant snapshots for WebSocket subscribers.
//!
//! [`SnapshotBroadcaster`] listens on the event bus, waits for each burst of
//! changes to settle, then pushes the full participant set to every client.

use std::sync::Arc;

use axum::extract::ws::Message;
use hackdir_core::participant::Participant;
use hackdir_core::store::ParticipantStore;
use hackdir_events::{Debouncer, DirectoryEvent};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Wire shape of a snapshot push.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum FeedMessage {
    Participants(Vec<Participant>),
}

/// Build the snapshot message for the current participant set.
///
/// A store failure is logged and pushed as an empty set.
pub async fn snapshot_message(store: &dyn ParticipantStore) -> Message {
    let participants = store.fetch_all().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load participants for snapshot");
        Vec::new()
    });

    let payload = serde_json::to_string(&FeedMessage::Participants(participants))
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize participant snapshot");
            r#"{"type":"participants","data":[]}"#.to_string()
        });

    Message::Text(payload.into())
}

/// Pushes a fresh snapshot to all WebSocket clients after each settled burst
/// of directory changes.
pub struct SnapshotBroadcaster {
    store: Arc<dyn ParticipantStore>,
    ws_manager: Arc<WsManager>,
    debouncer: Debouncer,
}

impl SnapshotBroadcaster {
    pub fn new(
        store: Arc<dyn ParticipantStore>,
        ws_manager: Arc<WsManager>,
        debouncer: Debouncer,
    ) -> Self {
        Self {
            store,
            ws_manager,
            debouncer,
        }
    }

    /// Run until the [`EventBus`](hackdir_events::EventBus) is dropped.
    pub async fn run(self, mut receiver: broadcast::Receiver<DirectoryEvent>) {
        while let Some(changes) = self.debouncer.next_burst(&mut receiver).await {
            let clients = self.ws_manager.connection_count().await;
            tracing::debug!(changes, clients, "Broadcasting participant snapshot");
            if clients == 0 {
                continue;
            }
            let message = snapshot_message(self.store.as_ref()).await;
            self.ws_manager.broadcast(message).await;
        }
        tracing::info!("Event bus closed, snapshot broadcaster shutting down");
    }
}
