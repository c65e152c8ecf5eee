//! Tests for the live participant snapshot feed.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use hackdir_api::feed::{snapshot_message, SnapshotBroadcaster};
use hackdir_api::ws::WsManager;
use hackdir_core::store::ParticipantStore;
use hackdir_events::{Debouncer, DirectoryEvent, EventBus};

fn text_json(message: Message) -> serde_json::Value {
    match message {
        Message::Text(text) => serde_json::from_str(text.as_str()).unwrap(),
        other => panic!("expected a text frame, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: snapshot message shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn snapshot_lists_every_participant() {
    let store = common::seeded_store(&["Ada", "Grace"]).await;

    let json = text_json(snapshot_message(store.as_ref()).await);

    assert_eq!(json["type"], "participants");
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
}

#[tokio::test]
async fn snapshot_of_failing_store_is_empty() {
    let json = text_json(snapshot_message(&common::FailingStore).await);

    assert_eq!(json["type"], "participants");
    assert_eq!(json["data"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Test: a burst of changes produces one push
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn burst_of_changes_is_pushed_once() {
    let store = common::seeded_store(&["Ada"]).await;
    let ws_manager = Arc::new(WsManager::new());
    let mut rx = ws_manager.add("conn-1".to_string()).await;

    let bus = EventBus::default();
    let broadcaster = SnapshotBroadcaster::new(
        store.clone(),
        Arc::clone(&ws_manager),
        Debouncer::new(Duration::from_millis(250)),
    );
    let handle = tokio::spawn(broadcaster.run(bus.subscribe()));

    for name in ["Grace", "Linus", "Margaret"] {
        let created = store.create(common::submission(name)).await.unwrap();
        bus.publish(DirectoryEvent::participant_added(created.id));
    }

    tokio::time::sleep(Duration::from_secs(1)).await;

    let json = text_json(rx.try_recv().unwrap());
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
    assert!(rx.try_recv().is_err());

    drop(bus);
    handle.await.unwrap();
}
