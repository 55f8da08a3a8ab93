//! Error types used by the stagevisor orchestrator and components.
//!
//! This module defines the error taxonomy of a run:
//!
//! - [`ConfigError`] — contradictions in the assembled execution graph or
//!   registry, detected before any node executes. Always fatal to the run.
//! - [`NodeError`] — errors raised by a component's execution entry point or
//!   by a deferred termination callback. Recovered and aggregated, with one
//!   exception: [`NodeError::Exit`] propagates immediately.
//! - [`RuntimeError`] — the error type of [`Orchestrator::run`](crate::Orchestrator::run)
//!   itself.
//!
//! All types provide `as_label()` for logs/metrics and rely on `thiserror`
//! for display formatting.

use thiserror::Error;

/// # Configuration errors.
///
/// These represent contradictions in what the registered components declared:
/// two components claiming the same node or interface, or ordering
/// constraints that admit no total order. They are detected during Discovery
/// or Scheduling, and abort the run before any node executes.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A node name was claimed by two different components.
    #[error("node {node:?} is already owned by component {owner:?}; rejected claim from {claimant:?}")]
    DuplicateNodeOwner {
        /// The contested node name.
        node: String,
        /// Name of the component that claimed the node first.
        owner: String,
        /// Name of the component whose claim was rejected.
        claimant: String,
    },

    /// An interface name was implemented by two different components.
    #[error("interface {interface:?} is already implemented by component {owner:?}; rejected claim from {claimant:?}")]
    DuplicateInterface {
        /// The contested interface name.
        interface: String,
        /// Name of the component that registered the interface first.
        owner: String,
        /// Name of the component whose registration was rejected.
        claimant: String,
    },

    /// The merged edge set admits no total order.
    #[error("cycle detected in execution graph; unschedulable nodes: {remaining:?}")]
    CycleDetected {
        /// Nodes that could not be scheduled (every one of them sits on or
        /// behind a cycle), in graph insertion order.
        remaining: Vec<String>,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::DuplicateNodeOwner { .. } => "duplicate_node_owner",
            ConfigError::DuplicateInterface { .. } => "duplicate_interface",
            ConfigError::CycleDetected { .. } => "cycle_detected",
        }
    }
}

/// # Errors produced by node execution and termination callbacks.
///
/// Returned from [`Component::perform`](crate::Component::perform) and from
/// deferred callbacks registered via [`RunContext::defer`](crate::RunContext::defer).
///
/// Every variant except [`NodeError::Exit`] is recovered by the orchestrator:
/// the error is appended to the run's fault log and execution continues with
/// the next node. `Exit` is the one propagating signal — it aborts the run
/// immediately, skipping remaining nodes, the termination phase, and the
/// report.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// Ordinary execution failure. Logged; later nodes still run.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// A required interface lookup found no implementation.
    ///
    /// Produced by [`RunContext::require_interface`](crate::RunContext::require_interface);
    /// kept distinct from [`NodeError::Fail`] so that a missing collaborator
    /// is distinguishable from a component's own failure in the report.
    #[error("required interface {interface:?} is undefined")]
    InterfaceUndefined {
        /// The interface name that was looked up.
        interface: String,
    },

    /// Explicit request to terminate the whole run now.
    ///
    /// The sole non-recoverable control path: propagates out of
    /// [`Orchestrator::run`](crate::Orchestrator::run) as
    /// [`RuntimeError::ExitRequested`] without running termination callbacks.
    #[error("exit requested (code {code})")]
    Exit {
        /// Process exit code the caller should use.
        code: i32,
    },
}

impl NodeError {
    /// Convenience constructor for [`NodeError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        NodeError::Fail { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NodeError::Fail { .. } => "node_failed",
            NodeError::InterfaceUndefined { .. } => "interface_undefined",
            NodeError::Exit { .. } => "exit_requested",
        }
    }

    /// True for the propagating [`NodeError::Exit`] signal.
    pub fn is_exit(&self) -> bool {
        matches!(self, NodeError::Exit { .. })
    }
}

/// # Errors returned by a run as a whole.
///
/// [`Orchestrator::run`](crate::Orchestrator::run) returns `Err` only for the
/// two abortive paths; aggregated node/callback faults are delivered through
/// the `Ok` side as a [`RunReport`](crate::RunReport).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Contradictory component declarations; nothing was executed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A node requested immediate termination; remaining nodes and all
    /// deferred callbacks were skipped.
    #[error("exit requested during execution (code {code})")]
    ExitRequested {
        /// Process exit code the caller should use.
        code: i32,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::Config(e) => e.as_label(),
            RuntimeError::ExitRequested { .. } => "exit_requested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        let dup = ConfigError::DuplicateNodeOwner {
            node: "N".into(),
            owner: "a".into(),
            claimant: "b".into(),
        };
        assert_eq!(dup.as_label(), "duplicate_node_owner");
        assert_eq!(
            ConfigError::CycleDetected { remaining: vec![] }.as_label(),
            "cycle_detected"
        );
        assert_eq!(NodeError::fail("boom").as_label(), "node_failed");
        assert_eq!(RuntimeError::ExitRequested { code: 2 }.as_label(), "exit_requested");
    }

    #[test]
    fn exit_is_the_only_propagating_variant() {
        assert!(NodeError::Exit { code: 0 }.is_exit());
        assert!(!NodeError::fail("x").is_exit());
        assert!(!NodeError::InterfaceUndefined { interface: "I".into() }.is_exit());
    }

    #[test]
    fn duplicate_owner_names_both_claimants() {
        let err = ConfigError::DuplicateNodeOwner {
            node: "N".into(),
            owner: "first".into(),
            claimant: "second".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"N\""));
        assert!(msg.contains("first"));
        assert!(msg.contains("second"));
    }
}
