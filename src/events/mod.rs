//! Run events published by the orchestrator.
//!
//! Every phase boundary and every node dispatch publishes an [`Event`] to the
//! configured subscribers, giving observers a complete, ordered picture of a
//! run without coupling the core to any output format.

mod event;

pub use event::{Event, EventKind};
