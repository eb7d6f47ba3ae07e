//! Batch analysis pipeline: the upload queue state machine and its
//! progress event transport.
//!
//! The queue drives the core assembler over an ordered batch of files,
//! one in-flight analysis at a time, isolating per-item failures and
//! publishing a [`events::QueueEvent`] for every observable transition.

pub mod events;
pub mod queue;

pub use events::{QueueEvent, QueueEventBus};
pub use queue::{BulkQueueProcessor, QueueCounts, QueueItem, QueueItemStatus};
