//! # Topological scheduler (Kahn's algorithm).
//!
//! Given the finished [`ExecutionGraph`], [`sort`] produces a total order of
//! every node that satisfies every precedence edge, or reports a cycle.
//!
//! ## Determinism
//! When several nodes are simultaneously schedulable (in-degree zero), they
//! are consumed first-seen-first-removed: candidates enter the ready queue in
//! graph insertion order and successors are relaxed in edge contribution
//! order. The same graph, built in the same order, always yields the same
//! schedule — runs and tests are reproducible.
//!
//! ## Isolated nodes
//! Nodes that participate in no edge are trivially schedulable and appear in
//! the output at their insertion-order position among the ready candidates;
//! they are never dropped.
//!
//! ## Cycles
//! If the algorithm runs out of ready nodes before consuming the whole graph,
//! the remaining nodes all sit on or behind a cycle. [`sort`] returns
//! [`ConfigError::CycleDetected`] listing them and produces no partial order.

use std::collections::{HashMap, VecDeque};

use crate::error::ConfigError;

use super::ExecutionGraph;

/// Linearizes the graph into a total execution order.
///
/// Returns every node exactly once, consistent with every edge, or
/// [`ConfigError::CycleDetected`] if no such order exists.
pub fn sort(graph: &ExecutionGraph) -> Result<Vec<String>, ConfigError> {
    let nodes = graph.nodes();
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), i))
        .collect();

    let mut in_degree = vec![0usize; nodes.len()];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (before, after) in graph.edges() {
        // Endpoints are always present: ExecutionGraph inserts them on add_edge.
        let u = index[before.as_str()];
        let v = index[after.as_str()];
        successors[u].push(v);
        in_degree[v] += 1;
    }

    let mut ready: VecDeque<usize> = (0..nodes.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(nodes.len());

    while let Some(u) = ready.pop_front() {
        order.push(nodes[u].clone());
        for &v in &successors[u] {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                ready.push_back(v);
            }
        }
    }

    if order.len() < nodes.len() {
        let remaining = (0..nodes.len())
            .filter(|&i| in_degree[i] > 0)
            .map(|i| nodes[i].clone())
            .collect();
        return Err(ConfigError::CycleDetected { remaining });
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn graph_of(sequences: &[&[&str]]) -> ExecutionGraph {
        let mut g = ExecutionGraph::new();
        for seq in sequences {
            g.add_sequence(seq);
        }
        g
    }

    fn position(order: &[String], name: &str) -> usize {
        order.iter().position(|n| n == name).expect(name)
    }

    #[test]
    fn respects_every_edge() {
        let g = graph_of(&[&["A", "B", "C"], &["B", "X", "C"]]);
        let order = sort(&g).unwrap();
        assert_eq!(order.len(), 4);
        for (before, after) in g.edges() {
            assert!(
                position(&order, before) < position(&order, after),
                "{before} must precede {after} in {order:?}"
            );
        }
    }

    #[test]
    fn insertion_order_breaks_ties() {
        // A, P, Q are all ready at the start; P and Q were inserted after A.
        let mut g = ExecutionGraph::new();
        g.add_sequence(&["A", "B"]);
        g.add_node("P");
        g.add_node("Q");
        let order = sort(&g).unwrap();
        assert_eq!(order, ["A", "P", "Q", "B"]);
    }

    #[test]
    fn output_is_deterministic() {
        let build = || graph_of(&[&["A", "B", "C"], &["B", "X", "C"], &["A", "Y"]]);
        assert_eq!(sort(&build()).unwrap(), sort(&build()).unwrap());
    }

    #[test]
    fn duplicate_edges_do_not_disturb_the_order() {
        let mut g = ExecutionGraph::new();
        g.add_edge("A", "B");
        g.add_edge("A", "B");
        assert_eq!(sort(&g).unwrap(), ["A", "B"]);
    }

    #[test]
    fn isolated_nodes_are_scheduled() {
        let mut g = ExecutionGraph::new();
        g.add_node("loner");
        g.add_sequence(&["A", "B"]);
        let order = sort(&g).unwrap();
        assert_eq!(order.len(), 3);
        assert!(order.contains(&"loner".to_string()));
    }

    #[test]
    fn cycle_is_reported_with_remaining_nodes() {
        let g = graph_of(&[&["A", "B"], &["B", "C", "B"]]);
        match sort(&g) {
            Err(ConfigError::CycleDetected { remaining }) => {
                assert_eq!(remaining, ["B".to_string(), "C".to_string()]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn self_edge_is_a_cycle() {
        let mut g = ExecutionGraph::new();
        g.add_edge("A", "A");
        assert!(matches!(sort(&g), Err(ConfigError::CycleDetected { .. })));
    }

    #[test]
    fn empty_graph_yields_empty_order() {
        assert_eq!(sort(&ExecutionGraph::new()).unwrap(), Vec::<String>::new());
    }
}
