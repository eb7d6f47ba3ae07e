//! The bulk upload queue: per-item state machine and sequential batch
//! driver.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use trustseal_core::assembler;
use trustseal_core::document::Document;
use trustseal_core::error::CoreError;
use trustseal_core::file::FileDescriptor;
use trustseal_core::validation::validate_upload;

use crate::events::{QueueEvent, QueueEventBus};

// ---------------------------------------------------------------------------
// QueueItemStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of one file inside a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueItemStatus {
    Pending,
    Analyzing,
    Complete,
    Error,
}

impl QueueItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueItemStatus::Pending => "pending",
            QueueItemStatus::Analyzing => "analyzing",
            QueueItemStatus::Complete => "complete",
            QueueItemStatus::Error => "error",
        }
    }

    /// Whether no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueueItemStatus::Complete | QueueItemStatus::Error)
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Valid transitions: an item moves through its lifecycle exactly once and
/// never reverts.
pub mod state_machine {
    use super::QueueItemStatus;

    /// Returns the set of valid target statuses reachable from `from`.
    ///
    /// Terminal states return an empty slice.
    pub fn valid_transitions(from: QueueItemStatus) -> &'static [QueueItemStatus] {
        match from {
            QueueItemStatus::Pending => &[QueueItemStatus::Analyzing],
            QueueItemStatus::Analyzing => &[QueueItemStatus::Complete, QueueItemStatus::Error],
            QueueItemStatus::Complete | QueueItemStatus::Error => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: QueueItemStatus, to: QueueItemStatus) -> bool {
        valid_transitions(from).contains(&to)
    }
}

// ---------------------------------------------------------------------------
// QueueItem
// ---------------------------------------------------------------------------

/// One file's progress record within a batch submission.
#[derive(Debug, Clone, Serialize)]
pub struct QueueItem {
    /// Stable submission-order position. Never reused, even after removal
    /// of earlier items.
    pub position: usize,
    pub descriptor: FileDescriptor,
    pub status: QueueItemStatus,
    pub result: Option<Document>,
    pub error_message: Option<String>,
}

impl QueueItem {
    fn new(position: usize, descriptor: FileDescriptor) -> Self {
        Self {
            position,
            descriptor,
            status: QueueItemStatus::Pending,
            result: None,
            error_message: None,
        }
    }

    /// Apply a transition, enforcing the state machine.
    fn transition(&mut self, to: QueueItemStatus) -> Result<(), CoreError> {
        if !state_machine::can_transition(self.status, to) {
            return Err(CoreError::Internal(format!(
                "invalid queue transition: {} -> {}",
                self.status.as_str(),
                to.as_str()
            )));
        }
        self.status = to;
        Ok(())
    }
}

/// Per-status counts for a queue snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueCounts {
    pub total: usize,
    pub pending: usize,
    pub analyzing: usize,
    pub complete: usize,
    pub error: usize,
}

// ---------------------------------------------------------------------------
// BulkQueueProcessor
// ---------------------------------------------------------------------------

/// Sequential batch processor over an ordered file list.
///
/// Items are appended in submission order and keep that order for the life
/// of the batch; there is no reordering and no deduplication. Each item is
/// analyzed at most once, failures are isolated per item, and every
/// transition is published on the embedded [`QueueEventBus`].
pub struct BulkQueueProcessor {
    owner_id: Uuid,
    items: Vec<QueueItem>,
    next_position: usize,
    bus: QueueEventBus,
    /// Simulated per-item analysis time. Purely cosmetic; tests leave it
    /// unset.
    analysis_delay: Option<Duration>,
}

impl BulkQueueProcessor {
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            items: Vec::new(),
            next_position: 0,
            bus: QueueEventBus::new(),
            analysis_delay: None,
        }
    }

    /// Sleep this long before each item's analysis.
    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = Some(delay);
        self
    }

    /// Subscribe to progress events for this queue.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<QueueEvent> {
        self.bus.subscribe()
    }

    /// Append a file to the queue, validating it first. Returns the item's
    /// stable position. Invalid files are rejected here and never reach the
    /// assembler.
    pub fn enqueue(&mut self, descriptor: FileDescriptor) -> Result<usize, CoreError> {
        validate_upload(&descriptor)?;
        let position = self.next_position;
        self.next_position += 1;
        self.items.push(QueueItem::new(position, descriptor));
        Ok(position)
    }

    /// Remove an item by position. Only pending items may be removed;
    /// anything already analyzing or finished is refused.
    pub fn remove(&mut self, position: usize) -> Result<(), CoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.position == position)
            .ok_or_else(|| {
                CoreError::Validation(format!("no queue item at position {position}"))
            })?;

        if self.items[index].status != QueueItemStatus::Pending {
            return Err(CoreError::Conflict(format!(
                "queue item {position} is {} and can no longer be removed",
                self.items[index].status.as_str()
            )));
        }

        self.items.remove(index);
        Ok(())
    }

    /// Current snapshot of all items, in submission order.
    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    /// Per-status counts.
    pub fn counts(&self) -> QueueCounts {
        let mut counts = QueueCounts {
            total: self.items.len(),
            pending: 0,
            analyzing: 0,
            complete: 0,
            error: 0,
        };
        for item in &self.items {
            match item.status {
                QueueItemStatus::Pending => counts.pending += 1,
                QueueItemStatus::Analyzing => counts.analyzing += 1,
                QueueItemStatus::Complete => counts.complete += 1,
                QueueItemStatus::Error => counts.error += 1,
            }
        }
        counts
    }

    /// Process all currently-pending items, strictly in queue order, one at
    /// a time. Items enqueued after the call starts are untouched, as are
    /// items from earlier runs; each item is analyzed at most once.
    ///
    /// Returns the number of items processed in this pass.
    pub async fn run_pending(&mut self, rng: &mut impl Rng) -> usize {
        let pending: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.status == QueueItemStatus::Pending)
            .map(|(index, _)| index)
            .collect();

        let mut completed = 0usize;
        let mut failed = 0usize;

        for index in &pending {
            let index = *index;
            let position = self.items[index].position;

            // Flip to analyzing before the assembler runs so callers observe
            // incremental progress.
            if let Err(e) = self.items[index].transition(QueueItemStatus::Analyzing) {
                tracing::error!(position, error = %e, "Skipping item with broken state");
                continue;
            }
            self.bus.publish(QueueEvent::ItemStarted { position });

            if let Some(delay) = self.analysis_delay {
                tokio::time::sleep(delay).await;
            }

            let outcome = assembler::assemble(&self.items[index].descriptor, self.owner_id, rng);
            match outcome {
                Ok(document) => {
                    tracing::debug!(
                        position,
                        filename = %document.filename,
                        status = document.report.status.as_str(),
                        "Queue item analyzed",
                    );
                    self.bus.publish(QueueEvent::ItemCompleted {
                        position,
                        status: document.report.status,
                        confidence_score: document.report.confidence_score,
                    });
                    let item = &mut self.items[index];
                    item.result = Some(document);
                    let _ = item.transition(QueueItemStatus::Complete);
                    completed += 1;
                }
                Err(e) => {
                    // Per-item failure isolation: record and keep going.
                    tracing::warn!(position, error = %e, "Queue item failed");
                    let message = e.to_string();
                    self.bus.publish(QueueEvent::ItemFailed {
                        position,
                        message: message.clone(),
                    });
                    let item = &mut self.items[index];
                    item.error_message = Some(message);
                    let _ = item.transition(QueueItemStatus::Error);
                    failed += 1;
                }
            }
        }

        self.bus
            .publish(QueueEvent::BatchFinished { completed, failed });

        pending.len()
    }

    /// Completed documents in submission order.
    pub fn completed_documents(&self) -> Vec<Document> {
        self.items
            .iter()
            .filter_map(|item| item.result.clone())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
