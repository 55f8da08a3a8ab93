//! # Run events emitted by the orchestrator.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Phase events**: run lifecycle boundaries (starting, discovered,
//!   scheduled, terminating, completed)
//! - **Node events**: per-node dispatch outcomes (starting, completed,
//!   skipped, failed)
//! - **Termination events**: deferred callback outcomes and the exit signal
//!
//! The [`Event`] struct carries the metadata relevant to its kind: node name,
//! component name, error text, counts.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically; use it to restore order when events are observed out of
//! band.
//!
//! ## Example
//! ```rust
//! use stagevisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::NodeFailed)
//!     .with_node("READ_SETTINGS")
//!     .with_component("settings")
//!     .with_error("file not found");
//!
//! assert_eq!(ev.kind, EventKind::NodeFailed);
//! assert_eq!(ev.node.as_deref(), Some("READ_SETTINGS"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Phase events ===
    /// A run began; per-run state is fresh.
    ///
    /// Sets: `at`, `seq`.
    RunStarting,

    /// Discovery finished; graph and registries are frozen.
    ///
    /// Sets: `count` (registered components), `at`, `seq`.
    DiscoveryCompleted,

    /// The execution order was computed.
    ///
    /// Sets: `count` (scheduled nodes), `at`, `seq`.
    ScheduleResolved,

    /// Execution finished (with or without faults); deferred callbacks are
    /// about to run in reverse registration order.
    ///
    /// Sets: `count` (pending callbacks), `at`, `seq`.
    TerminationStarting,

    /// The run completed and the report is final.
    ///
    /// Sets: `count` (captured faults), `at`, `seq`.
    RunCompleted,

    // === Node events ===
    /// A node is being dispatched to its owning component.
    ///
    /// Sets: `node`, `component`, `at`, `seq`.
    NodeStarting,

    /// A node's entry point returned successfully.
    ///
    /// Sets: `node`, `component`, `at`, `seq`.
    NodeCompleted,

    /// A scheduled node has no owner; it is a pure ordering placeholder.
    ///
    /// Sets: `node`, `at`, `seq`.
    NodeSkipped,

    /// A node's entry point returned an error (captured, not propagated).
    ///
    /// Sets: `node`, `component`, `error`, `at`, `seq`.
    NodeFailed,

    // === Termination events ===
    /// A deferred callback returned an error (captured, not propagated).
    ///
    /// Sets: `callback`, `error`, `at`, `seq`.
    CallbackFailed,

    /// A node requested immediate termination; the run is aborting without
    /// the termination phase.
    ///
    /// Sets: `node`, `component`, `error` (exit description), `at`, `seq`.
    ExitRequested,
}

/// Run event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Graph node name, if applicable.
    pub node: Option<Arc<str>>,
    /// Component name, if applicable.
    pub component: Option<Arc<str>>,
    /// Deferred callback label, if applicable.
    pub callback: Option<Arc<str>>,
    /// Human-readable error text.
    pub error: Option<Arc<str>>,
    /// Kind-specific count (components, nodes, callbacks, faults).
    pub count: Option<usize>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            node: None,
            component: None,
            callback: None,
            error: None,
            count: None,
        }
    }

    /// Attaches a graph node name.
    #[inline]
    pub fn with_node(mut self, node: impl Into<Arc<str>>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Attaches a component name.
    #[inline]
    pub fn with_component(mut self, component: impl Into<Arc<str>>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Attaches a deferred callback label.
    #[inline]
    pub fn with_callback(mut self, callback: impl Into<Arc<str>>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Attaches a human-readable error text.
    #[inline]
    pub fn with_error(mut self, error: impl Into<Arc<str>>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Attaches a kind-specific count.
    #[inline]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_monotonic() {
        let a = Event::new(EventKind::RunStarting);
        let b = Event::new(EventKind::RunCompleted);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builders_attach_metadata() {
        let ev = Event::new(EventKind::NodeFailed)
            .with_node("X")
            .with_component("c")
            .with_error("boom")
            .with_count(1);
        assert_eq!(ev.node.as_deref(), Some("X"));
        assert_eq!(ev.component.as_deref(), Some("c"));
        assert_eq!(ev.error.as_deref(), Some("boom"));
        assert_eq!(ev.count, Some(1));
    }
}
