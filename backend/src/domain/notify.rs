//! Change notification broadcast.
//!
//! Every successful mutation announces which collection changed. List views
//! (and the WebSocket change feed) subscribe and re-run their `list()` load
//! against the store; there is no incremental diffing. Receivers that lag or
//! drop simply miss events; the next full reload resynchronises them.

use serde::Serialize;
use tokio::sync::broadcast;

use super::ports::Collection;

/// Broadcast capacity; overflow drops the oldest events for slow receivers.
const CHANNEL_CAPACITY: usize = 16;

/// A single change announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// The collection that was mutated.
    pub collection: Collection,
}

/// Process-wide broadcast handle, cheap to clone into services and adapters.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    /// Create a notifier with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to change events from this point onward.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    /// Announce a mutation. A send with no live receivers is not an error.
    pub fn notify(&self, collection: Collection) {
        let _ = self.sender.send(ChangeEvent { collection });
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
