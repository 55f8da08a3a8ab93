//! # Execution graph: named nodes plus precedence edges.
//!
//! [`ExecutionGraph`] is a grow-only directed graph assembled incrementally
//! during Discovery. Nodes are plain string names; an edge `(before, after)`
//! means "`before` runs strictly earlier than `after`" in the final order.
//!
//! ## Rules
//! - Nodes are kept in **first-seen insertion order**; that order is the
//!   tie-break used by the scheduler, so a stable contribution order yields a
//!   deterministic schedule.
//! - Inserting a node that already exists is a no-op (names are identity;
//!   there is no payload to merge).
//! - Duplicate edges are kept as-is; they are harmless to the scheduler.
//! - Edge endpoints are inserted as nodes automatically.
//! - There is no removal API: the graph only grows, then freezes.

use std::collections::HashSet;

use crate::error::ConfigError;

use super::topo;

/// Grow-only directed graph of named lifecycle nodes.
#[derive(Debug, Default, Clone)]
pub struct ExecutionGraph {
    /// Node names in first-seen insertion order.
    nodes: Vec<String>,
    /// Fast membership check for `nodes`.
    seen: HashSet<String>,
    /// Precedence pairs `(before, after)` in contribution order.
    edges: Vec<(String, String)>,
}

impl ExecutionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node by name. Idempotent.
    pub fn add_node(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.seen.insert(name.clone()) {
            self.nodes.push(name);
        }
    }

    /// Inserts the precedence edge `(before, after)`.
    ///
    /// Both endpoints are added as nodes if not yet present. Duplicate edges
    /// are kept; the scheduler tolerates them.
    pub fn add_edge(&mut self, before: impl Into<String>, after: impl Into<String>) {
        let before = before.into();
        let after = after.into();
        self.add_node(before.clone());
        self.add_node(after.clone());
        self.edges.push((before, after));
    }

    /// Expands a sequence of names into pairwise edges.
    ///
    /// `["A", "B", "C"]` contributes the edges `(A, B)` and `(B, C)`.
    /// Sequences shorter than two names add their nodes but no edges.
    pub fn add_sequence<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            self.add_node(name.as_ref());
        }
        for pair in names.windows(2) {
            self.add_edge(pair[0].as_ref(), pair[1].as_ref());
        }
    }

    /// All node names, in first-seen insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// All edges, in contribution order (duplicates included).
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Computes the total execution order (Kahn's algorithm).
    ///
    /// Returns every node exactly once, consistent with every edge, with
    /// insertion order breaking ties. Fails with
    /// [`ConfigError::CycleDetected`] if the edge set admits no total order;
    /// no partial order is produced.
    pub fn schedule(&self) -> Result<Vec<String>, ConfigError> {
        topo::sort(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nodes_keep_insertion_order_and_dedupe() {
        let mut g = ExecutionGraph::new();
        g.add_node("B");
        g.add_node("A");
        g.add_node("B");
        assert_eq!(g.nodes(), ["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn edges_insert_their_endpoints() {
        let mut g = ExecutionGraph::new();
        g.add_edge("X", "Y");
        assert_eq!(g.nodes(), ["X".to_string(), "Y".to_string()]);
        assert_eq!(g.edges(), [("X".to_string(), "Y".to_string())]);
    }

    #[test]
    fn sequence_expands_to_pairwise_edges() {
        let mut g = ExecutionGraph::new();
        g.add_sequence(&["A", "B", "C"]);
        assert_eq!(
            g.edges(),
            [
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string()),
            ]
        );
    }

    #[test]
    fn short_sequences_add_nodes_only() {
        let mut g = ExecutionGraph::new();
        g.add_sequence(&["solo"]);
        g.add_sequence::<&str>(&[]);
        assert_eq!(g.nodes(), ["solo".to_string()]);
        assert!(g.edges().is_empty());
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut g = ExecutionGraph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "B");
        assert_eq!(g.edges().len(), 2);
        assert_eq!(g.len(), 2);
    }
}
