//! # stagevisor
//!
//! **Stagevisor** is a lifecycle orchestration library for Rust.
//!
//! Applications are assembled from independently-developed, pluggable
//! components. Each component declares which named points in a shared
//! lifecycle graph it performs work at, which ordering constraints it
//! requires relative to other points, and which interfaces it implements.
//! The orchestrator merges every declaration with a built-in milestone chain
//! into one directed graph, topologically sorts it, and drives execution of
//! each node in that order — routing each node to the single component
//! responsible for it, aggregating failures instead of dying on the first
//! one, and unwinding deferred termination callbacks at the end.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  Component   │   │  Component   │   │  Component   │
//!     │ (spec: nodes,│   │ (spec: nodes,│   │ (spec: nodes,│
//!     │  seqs, ifcs) │   │  seqs, ifcs) │   │  seqs, ifcs) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ Discovery        ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Orchestrator (run state machine)                                 │
//! │  - ExecutionGraph (milestone chain + declared sequences)          │
//! │  - Registry (node name → owner, interface name → implementation)  │
//! │  - Kahn scheduler (deterministic total order, cycle = fatal)      │
//! │  - RunContext (config values, interface lookup, deferred stack)   │
//! │  - SubscriberSet (fans out run events to subscribers)             │
//! └──────────────┬────────────────────────────────────────────────────┘
//!                ▼ per node, in schedule order
//!         owner.perform(node, ctx) ── Err(Fail) ──► fault log, continue
//!                │                 └─ Err(Exit) ──► abort run (propagates)
//!                ▼ after the last node, always
//!         deferred callbacks, reverse registration order
//!                ▼
//!         RunReport (every captured fault, in capture order)
//! ```
//!
//! ### Lifecycle
//! ```text
//! run(ExecSpec)
//!   ├─► Resetting:    fresh per-run state, merge caller's ExecSpec
//!   ├─► Discovering:  seed Config::stages, fold component declarations
//!   ├─► Scheduling:   Kahn's algorithm  ──cycle──► Err before any effect
//!   ├─► Executing:    dispatch nodes in order, capture faults
//!   ├─► Terminating:  drain deferred callbacks (most recent first)
//!   └─► Reported:     Ok(RunReport)
//! ```
//!
//! ## Features
//! | Area              | Description                                                       | Key types / traits                        |
//! |-------------------|-------------------------------------------------------------------|-------------------------------------------|
//! | **Components**    | Declare nodes, ordering sequences, and interfaces; get dispatched.| [`Component`], [`ComponentFn`], [`ComponentSpec`] |
//! | **Graph**         | Grow-only precedence graph with deterministic scheduling.         | [`ExecutionGraph`]                        |
//! | **Run context**   | Config values, interface lookup, deferred termination callbacks.  | [`RunContext`], [`ExecSpec`]              |
//! | **Errors**        | Typed taxonomy: config vs node vs exit; aggregated fault report.  | [`ConfigError`], [`NodeError`], [`RunReport`] |
//! | **Subscriber API**| Hook into run events (logging, metrics, custom subscribers).      | [`Subscribe`], [`Event`]                  |
//! | **Configuration** | Milestone chain and orchestrator assembly.                        | [`Config`], [`stages`], [`OrchestratorBuilder`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use stagevisor::{
//!     stages, ComponentFn, ComponentRef, ComponentSpec, Config, ContextRef, ExecSpec,
//!     NodeError, Orchestrator,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A component that owns one extra node, ordered between two milestones.
//!     let settings: ComponentRef = ComponentFn::arc(
//!         "settings",
//!         ComponentSpec::new()
//!             .executes(["READ_SETTINGS"])
//!             .requires([stages::ARGPARSE, "READ_SETTINGS", stages::ACTIVATE])
//!             .implements("SETTINGS"),
//!         |node: String, ctx: ContextRef| async move {
//!             assert_eq!(node, "READ_SETTINGS");
//!             // Save on the way out, whatever else happens later.
//!             ctx.defer("flush-settings", || async { Ok(()) });
//!             Ok::<_, NodeError>(())
//!         },
//!     );
//!
//!     let orchestrator = Orchestrator::builder(Config::default())
//!         .with_components(vec![settings])
//!         .build();
//!
//!     let report = orchestrator.run(ExecSpec::new()).await?;
//!     assert!(report.is_clean());
//!     Ok(())
//! }
//! ```

mod components;
mod config;
mod core;
mod error;
mod events;
mod graph;
mod subscribers;

// ---- Public re-exports ----

pub use components::{Component, ComponentFn, ComponentRef, ComponentSpec};
pub use config::{stages, Config};
pub use crate::core::{
    ContextRef, ExecSpec, FaultPhase, FaultRecord, Orchestrator, OrchestratorBuilder, RunContext,
    RunReport,
};
pub use error::{ConfigError, NodeError, RuntimeError};
pub use events::{Event, EventKind};
pub use graph::ExecutionGraph;
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
