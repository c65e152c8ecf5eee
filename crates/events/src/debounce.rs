//! Quiescence-window debouncing over a broadcast receiver.

use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time::timeout;

/// Default quiescence window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Groups events that arrive within `window` of each other into one burst.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window: Duration,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Wait for the next burst and return how many events it held.
    ///
    /// The burst ends once `window` passes with no new event. Returns `None`
    /// when the channel is closed and nothing is pending. Lagged events are
    /// counted as part of the burst.
    pub async fn next_burst<T: Clone>(&self, receiver: &mut broadcast::Receiver<T>) -> Option<u64> {
        let mut count = match receiver.recv().await {
            Ok(_) => 1,
            Err(RecvError::Lagged(n)) => n,
            Err(RecvError::Closed) => return None,
        };

        loop {
            match timeout(self.window, receiver.recv()).await {
                Ok(Ok(_)) => count += 1,
                Ok(Err(RecvError::Lagged(n))) => {
                    tracing::warn!(skipped = n, "Debouncer lagged");
                    count += n;
                }
                Ok(Err(RecvError::Closed)) | Err(_) => return Some(count),
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn rapid_events_coalesce_into_one_burst() {
        let (tx, mut rx) = broadcast::channel::<u32>(16);
        let debouncer = Debouncer::default();

        tokio::spawn(async move {
            for i in 0..5 {
                tx.send(i).unwrap();
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            // Keep the sender alive past the window.
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let start = Instant::now();
        assert_eq!(debouncer.next_burst(&mut rx).await, Some(5));
        assert!(start.elapsed() >= Duration::from_millis(650));
    }

    #[tokio::test(start_paused = true)]
    async fn events_separated_by_the_window_are_separate_bursts() {
        let (tx, mut rx) = broadcast::channel::<u32>(16);
        let debouncer = Debouncer::new(Duration::from_millis(50));

        tokio::spawn(async move {
            tx.send(1).unwrap();
            tokio::time::sleep(Duration::from_millis(200)).await;
            tx.send(2).unwrap();
            tx.send(3).unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        assert_eq!(debouncer.next_burst(&mut rx).await, Some(1));
        assert_eq!(debouncer.next_burst(&mut rx).await, Some(2));
    }

    #[tokio::test]
    async fn closed_channel_flushes_then_ends() {
        let (tx, mut rx) = broadcast::channel::<u32>(16);
        let debouncer = Debouncer::default();

        tx.send(1).unwrap();
        drop(tx);

        assert_eq!(debouncer.next_burst(&mut rx).await, Some(1));
        assert_eq!(debouncer.next_burst(&mut rx).await, None);
    }
}
