//! Directory change notifications.
//!
//! - [`EventBus`] is the in-process publish/subscribe hub, backed by
//!   `tokio::sync::broadcast`.
//! - [`DirectoryEvent`] is what gets published after a participant is stored.
//! - [`Debouncer`] coalesces bursts of events into a single refresh.

pub mod bus;
pub mod debounce;

pub use bus::{DirectoryEvent, EventBus};
pub use debounce::Debouncer;
