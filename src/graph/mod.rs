//! Execution graph primitives.
//!
//! This module provides the graph layer of the orchestrator:
//! - [`ExecutionGraph`] - accumulates nodes and precedence edges from many
//!   independent sources during Discovery
//! - [`ExecutionGraph::schedule`] - Kahn's-algorithm linearizer producing the
//!   total execution order (or a cycle error)
//!
//! The graph only grows: contributions come from the built-in milestone chain
//! and from every registered component's declared sequences, and once the
//! schedule has been computed the graph is not touched again for that run.

mod graph;
mod topo;

pub use graph::ExecutionGraph;
