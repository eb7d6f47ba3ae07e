//! In-process progress events backed by a `tokio::sync::broadcast` channel.
//!
//! The queue state machine publishes a [`QueueEvent`] for every externally
//! observable transition; any number of subscribers (WebSocket fan-out, CLI
//! progress bars, tests) receive each event independently. Publishing never
//! blocks and never fails: events for which no subscriber exists are
//! dropped.

use serde::Serialize;
use tokio::sync::broadcast;
use trustseal_core::verdict::VerdictStatus;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

// ---------------------------------------------------------------------------
// QueueEvent
// ---------------------------------------------------------------------------

/// An observable transition in a batch run.
///
/// `position` is the item's stable submission-order position, not its
/// current index.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueEvent {
    /// An item flipped from pending to analyzing.
    ItemStarted { position: usize },
    /// An item completed analysis successfully.
    ItemCompleted {
        position: usize,
        status: VerdictStatus,
        confidence_score: f64,
    },
    /// An item's analysis failed; the rest of the batch continues.
    ItemFailed { position: usize, message: String },
    /// A `run_pending` pass finished.
    BatchFinished { completed: usize, failed: usize },
}

// ---------------------------------------------------------------------------
// QueueEventBus
// ---------------------------------------------------------------------------

/// Fan-out hub for [`QueueEvent`]s.
#[derive(Debug)]
pub struct QueueEventBus {
    sender: broadcast::Sender<QueueEvent>,
}

impl QueueEventBus {
    /// Create a bus with the default channel capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a bus with an explicit channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<QueueEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: QueueEvent) {
        // A send error only means there are no subscribers right now.
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for QueueEventBus {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
