//! Event subscribers for run observability.
//!
//! This module provides the [`Subscribe`] trait and the [`SubscriberSet`]
//! fan-out used by the orchestrator to deliver [`Event`](crate::events::Event)s.
//!
//! ## Architecture
//! ```text
//! Orchestrator ── emit(&Event) ──► SubscriberSet
//!                                      ├──► [queue S1] ─► worker S1 ─► on_event()
//!                                      ├──► [queue S2] ─► worker S2 ─► on_event()
//!                                      └──► [queue SN] ─► worker SN ─► on_event()
//! ```
//!
//! Subscribers never slow down the run: delivery is enqueue-only, each
//! subscriber drains its own bounded queue on a dedicated worker task, and a
//! panicking subscriber is isolated from the others.

mod set;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
