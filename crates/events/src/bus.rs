//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is shared via `Arc<EventBus>` across the application.

use chrono::{DateTime, Utc};
use hackdir_core::types::ParticipantId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// DirectoryEvent
// ---------------------------------------------------------------------------

/// A change to the participant directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectoryEvent {
    ParticipantAdded {
        participant_id: ParticipantId,
        timestamp: DateTime<Utc>,
    },
}

impl DirectoryEvent {
    pub fn participant_added(participant_id: ParticipantId) -> Self {
        Self::ParticipantAdded {
            participant_id,
            timestamp: Utc::now(),
        }
    }

    /// Dot-separated event name, for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ParticipantAdded { .. } => "participant.added",
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Any number of subscribers independently receive every published
/// [`DirectoryEvent`].
///
/// ```rust
/// use hackdir_events::bus::{DirectoryEvent, EventBus};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(DirectoryEvent::participant_added(uuid::Uuid::now_v7()));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<DirectoryEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed messages are dropped
    /// and slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With no subscribers the event is dropped.
    pub fn publish(&self, event: DirectoryEvent) {
        // SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DirectoryEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();
        let id = uuid::Uuid::now_v7();

        bus.publish(DirectoryEvent::participant_added(id));

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.event_type(), "participant.added");
        match received {
            DirectoryEvent::ParticipantAdded { participant_id, .. } => {
                assert_eq!(participant_id, id)
            }
        }
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        let event = DirectoryEvent::participant_added(uuid::Uuid::now_v7());
        bus.publish(event.clone());

        assert_eq!(rx1.recv().await.unwrap(), event);
        assert_eq!(rx2.recv().await.unwrap(), event);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(DirectoryEvent::participant_added(uuid::Uuid::now_v7()));
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = DirectoryEvent::participant_added(uuid::Uuid::now_v7());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "participant_added");
        assert!(json["participant_id"].is_string());
    }
}
