//! Unit tests for `WsManager`.
//!
//! These exercise the connection manager directly, without any HTTP upgrade.

use axum::extract::ws::Message;
use hackdir_api::ws::WsManager;

// ---------------------------------------------------------------------------
// Test: add/remove track the connection count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_and_remove_track_count() {
    let manager = WsManager::new();
    assert_eq!(manager.connection_count().await, 0);

    let _rx1 = manager.add("conn-1".to_string()).await;
    let _rx2 = manager.add("conn-2".to_string()).await;
    assert_eq!(manager.connection_count().await, 2);
    assert!(manager.connected_at("conn-1").await.is_some());

    manager.remove("conn-1").await;
    manager.remove("nonexistent").await;
    assert_eq!(manager.connection_count().await, 1);
    assert!(manager.connected_at("conn-1").await.is_none());
}

// ---------------------------------------------------------------------------
// Test: send_to reaches only the addressed connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn send_to_targets_one_connection() {
    let manager = WsManager::new();
    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    assert!(manager.send_to("conn-1", Message::Text("hi".into())).await);
    assert!(!manager.send_to("missing", Message::Text("hi".into())).await);

    assert!(matches!(rx1.try_recv(), Ok(Message::Text(t)) if t.as_str() == "hi"));
    assert!(rx2.try_recv().is_err());
}

#[tokio::test]
async fn send_to_closed_receiver_reports_false() {
    let manager = WsManager::new();
    let rx = manager.add("conn-1".to_string()).await;
    drop(rx);

    assert!(!manager.send_to("conn-1", Message::Text("hi".into())).await);
}

// ---------------------------------------------------------------------------
// Test: broadcast reaches every connection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn broadcast_reaches_all_connections() {
    let manager = WsManager::new();
    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;
    let dropped = manager.add("conn-3".to_string()).await;
    drop(dropped);

    manager.broadcast(Message::Text("snapshot".into())).await;

    for rx in [&mut rx1, &mut rx2] {
        assert!(matches!(rx.try_recv(), Ok(Message::Text(t)) if t.as_str() == "snapshot"));
    }
}

// ---------------------------------------------------------------------------
// Test: ping_all and shutdown_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_all_sends_ping_frames() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string()).await;

    manager.ping_all().await;

    assert!(matches!(rx.try_recv(), Ok(Message::Ping(_))));
}

#[tokio::test]
async fn shutdown_all_closes_and_clears() {
    let manager = WsManager::new();
    let mut rx1 = manager.add("conn-1".to_string()).await;
    let mut rx2 = manager.add("conn-2".to_string()).await;

    manager.shutdown_all().await;

    assert_eq!(manager.connection_count().await, 0);
    assert!(matches!(rx1.try_recv(), Ok(Message::Close(None))));
    assert!(matches!(rx2.try_recv(), Ok(Message::Close(None))));
}
