//! # Orchestrator: drives one run end to end.
//!
//! The [`Orchestrator`] owns the registered component list, the milestone
//! configuration, and the subscriber fan-out. A single
//! [`run`](Orchestrator::run) call walks the whole lifecycle state machine
//! and returns after the report is final; there is no partial or incremental
//! execution API.
//!
//! ## State machine
//! ```text
//! Idle → Resetting → Discovering → Scheduling → Executing → Terminating → Reported → Idle
//!
//! run(ExecSpec):
//!   ├─ Resetting:    fresh graph/registry/context per call (nothing survives
//!   │                a previous run), merge the caller's ExecSpec
//!   ├─ Discovering:  seed Config::stages as the backbone sequence,
//!   │                then fold every component's declaration in order
//!   │                  └─ duplicate claim ──► Err(Config), nothing ran
//!   ├─ Scheduling:   Kahn's algorithm over the frozen graph
//!   │                  └─ cycle ──► Err(Config), nothing ran
//!   ├─ Executing:    for node in order:
//!   │                  ├─ no owner ──► skip (ordering placeholder)
//!   │                  ├─ perform(node) Ok ──► next
//!   │                  ├─ Err(Exit{code}) ──► Err(ExitRequested), STOP:
//!   │                  │                      no Terminating, no Reported
//!   │                  └─ Err(other) ──► capture fault, next node
//!   ├─ Terminating:  drain deferred callbacks, most recent first,
//!   │                capturing each failure; always runs after Executing
//!   └─ Reported:     Ok(RunReport) with all faults in capture order
//! ```
//!
//! Execution is strictly sequential: one node at a time, each `perform`
//! awaited to completion before the next node is considered. The graph,
//! registries, and interface map are frozen before the first dispatch; only
//! the deferred-callback stack and the fault log grow during Executing.
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
//!     let hello: ComponentRef = ComponentFn::arc(
//!         "hello",
//!         ComponentSpec::new().executes([stages::UP]),
//!         |_node: String, _ctx: ContextRef| async move {
//!             println!("Hello from UP!");
//!             Ok::<_, NodeError>(())
//!         },
//!     );
//!
//!     let orchestrator = Orchestrator::builder(Config::default())
//!         .with_components(vec![hello])
//!         .build();
//!
//!     let report = orchestrator.run(ExecSpec::new()).await?;
//!     assert!(report.is_clean());
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::components::ComponentRef;
use crate::config::Config;
use crate::error::{NodeError, RuntimeError};
use crate::events::{Event, EventKind};
use crate::graph::ExecutionGraph;
use crate::subscribers::SubscriberSet;

use super::context::{ContextRef, ExecSpec, RunContext};
use super::report::{FaultRecord, RunReport};
use super::{discovery, Registry};

/// Coordinates discovery, scheduling, node execution, and termination.
pub struct Orchestrator {
    cfg: Config,
    components: Vec<ComponentRef>,
    subs: Arc<SubscriberSet>,
}

impl Orchestrator {
    /// Starts building an orchestrator with the given configuration.
    pub fn builder(cfg: Config) -> super::OrchestratorBuilder {
        super::OrchestratorBuilder::new(cfg)
    }

    pub(crate) fn new(cfg: Config, components: Vec<ComponentRef>, subs: Arc<SubscriberSet>) -> Self {
        Self {
            cfg,
            components,
            subs,
        }
    }

    /// Drives one complete run with the given execution specification.
    ///
    /// Returns:
    /// - `Ok(report)` — the run completed; the report lists every captured
    ///   node/callback fault in order (possibly none). Faults do NOT make the
    ///   result `Err`: deciding a process exit code is the caller's concern.
    /// - `Err(RuntimeError::Config(_))` — contradictory declarations or a
    ///   graph cycle; no node executed, no callback ran.
    /// - `Err(RuntimeError::ExitRequested { .. })` — a node demanded
    ///   immediate termination; remaining nodes and all deferred callbacks
    ///   were skipped.
    ///
    /// Every call starts from fresh state; runs do not leak into each other.
    pub async fn run(&self, exec_spec: ExecSpec) -> Result<RunReport, RuntimeError> {
        // Resetting + Discovering: build this run's graph and registries.
        self.subs.emit(&Event::new(EventKind::RunStarting));

        let mut graph = ExecutionGraph::new();
        graph.add_sequence(&self.cfg.stages);

        let mut registry = Registry::new();
        discovery::discover(&self.components, &mut graph, &mut registry)?;
        self.subs.emit(
            &Event::new(EventKind::DiscoveryCompleted).with_count(self.components.len()),
        );

        // Scheduling: fatal on cycle, before any side effect.
        let order = graph.schedule()?;
        self.subs
            .emit(&Event::new(EventKind::ScheduleResolved).with_count(order.len()));

        // Executing.
        let interfaces = registry.take_interfaces();
        let ctx: ContextRef = Arc::new(RunContext::new(exec_spec, interfaces));
        let mut faults: Vec<FaultRecord> = Vec::new();

        for node in &order {
            let Some(owner) = registry.node_owner(node) else {
                self.subs
                    .emit(&Event::new(EventKind::NodeSkipped).with_node(node.as_str()));
                continue;
            };
            self.subs.emit(
                &Event::new(EventKind::NodeStarting)
                    .with_node(node.as_str())
                    .with_component(owner.name()),
            );
            match owner.perform(node, Arc::clone(&ctx)).await {
                Ok(()) => {
                    self.subs.emit(
                        &Event::new(EventKind::NodeCompleted)
                            .with_node(node.as_str())
                            .with_component(owner.name()),
                    );
                }
                Err(NodeError::Exit { code }) => {
                    self.subs.emit(
                        &Event::new(EventKind::ExitRequested)
                            .with_node(node.as_str())
                            .with_component(owner.name())
                            .with_error(format!("exit code {code}")),
                    );
                    return Err(RuntimeError::ExitRequested { code });
                }
                Err(error) => {
                    self.subs.emit(
                        &Event::new(EventKind::NodeFailed)
                            .with_node(node.as_str())
                            .with_component(owner.name())
                            .with_error(error.to_string()),
                    );
                    faults.push(FaultRecord::execute(node, owner.name(), error));
                }
            }
        }

        // Terminating: always reached unless Exit propagated above.
        let deferred = ctx.take_deferred();
        self.subs
            .emit(&Event::new(EventKind::TerminationStarting).with_count(deferred.len()));
        for entry in deferred.into_iter().rev() {
            match (entry.callback)().await {
                Ok(()) => {}
                Err(error) => {
                    // An Exit raised here is recorded, not honored: shutdown
                    // is already in progress and later callbacks still run.
                    self.subs.emit(
                        &Event::new(EventKind::CallbackFailed)
                            .with_callback(entry.label.as_str())
                            .with_error(error.to_string()),
                    );
                    faults.push(FaultRecord::terminate(&entry.label, error));
                }
            }
        }

        // Reported.
        let report = RunReport::new(faults);
        self.subs
            .emit(&Event::new(EventKind::RunCompleted).with_count(report.len()));
        Ok(report)
    }

    /// The configured milestone chain.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The registered components, in discovery order.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }
}
