//! Orchestrator core: discovery, registries, and the run state machine.
//!
//! This module contains the embedded implementation of the stagevisor run.
//! The public API from this module is [`Orchestrator`] (with its builder),
//! the per-run [`RunContext`]/[`ExecSpec`] handed to components, and the
//! [`RunReport`] returned by a completed run.
//!
//! Internal modules:
//! - [`discovery`]: reads every component's declaration into graph + registry;
//! - [`registry`]: insert-once node-owner and interface maps;
//! - [`context`]: per-run shared state (config values, interfaces, deferred
//!   callbacks);
//! - [`report`]: captured fault records and the final report;
//! - [`orchestrator`]: drives Resetting → Discovering → Scheduling →
//!   Executing → Terminating → Reported.

mod builder;
mod context;
mod discovery;
mod orchestrator;
mod registry;
mod report;

pub use builder::OrchestratorBuilder;
pub use context::{ContextRef, ExecSpec, RunContext};
pub use orchestrator::Orchestrator;
pub use report::{FaultPhase, FaultRecord, RunReport};

pub(crate) use registry::Registry;
