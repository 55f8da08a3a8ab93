//! # Discovery: fold component declarations into graph and registry.
//!
//! Reads each registered component's [`ComponentSpec`](crate::ComponentSpec)
//! exactly once, in caller-supplied order, and feeds the execution graph and
//! the registries:
//!
//! - every owned node → graph node + node-owner claim;
//! - every required sequence → pairwise edges;
//! - every implemented interface → interface claim.
//!
//! The caller's component list IS the discovery mechanism: there is no
//! runtime scanning, so the contribution order — and with it the scheduler's
//! tie-break order — is stable across runs by construction.
//!
//! Fails fast on the first duplicate claim; nothing has executed at that
//! point, so aborting is safe.

use crate::components::ComponentRef;
use crate::error::ConfigError;
use crate::graph::ExecutionGraph;

use super::Registry;

/// Populates `graph` and `registry` from `components`, in order.
pub(crate) fn discover(
    components: &[ComponentRef],
    graph: &mut ExecutionGraph,
    registry: &mut Registry,
) -> Result<(), ConfigError> {
    for component in components {
        let spec = component.spec();
        for node in spec.nodes() {
            graph.add_node(node.as_str());
            registry.register_node(node, component)?;
        }
        for sequence in spec.sequences() {
            graph.add_sequence(sequence);
        }
        for interface in spec.interfaces() {
            registry.register_interface(interface, component)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentFn, ComponentSpec};
    use crate::core::ContextRef;
    use crate::error::NodeError;
    use pretty_assertions::assert_eq;

    fn component(name: &'static str, spec: ComponentSpec) -> ComponentRef {
        ComponentFn::arc(name, spec, |_n: String, _c: ContextRef| async {
            Ok::<_, NodeError>(())
        })
    }

    #[test]
    fn declarations_land_in_graph_and_registry() {
        let c = component(
            "settings",
            ComponentSpec::new()
                .executes(["READ_SETTINGS"])
                .requires(["RESET", "READ_SETTINGS", "ACTIVATE"])
                .implements("SETTINGS"),
        );
        let mut graph = ExecutionGraph::new();
        let mut registry = Registry::new();
        discover(&[c], &mut graph, &mut registry).unwrap();

        assert_eq!(
            graph.nodes(),
            ["READ_SETTINGS".to_string(), "RESET".to_string(), "ACTIVATE".to_string()]
        );
        assert_eq!(graph.edges().len(), 2);
        assert!(registry.node_owner("READ_SETTINGS").is_some());
        assert!(registry.node_owner("RESET").is_none());
    }

    #[test]
    fn duplicate_node_claim_fails_discovery() {
        let a = component("a", ComponentSpec::new().executes(["N"]));
        let b = component("b", ComponentSpec::new().executes(["N"]));
        let mut graph = ExecutionGraph::new();
        let mut registry = Registry::new();
        let err = discover(&[a, b], &mut graph, &mut registry).unwrap_err();
        assert_eq!(err.as_label(), "duplicate_node_owner");
    }

    #[test]
    fn contribution_follows_caller_order() {
        let a = component("a", ComponentSpec::new().executes(["A1"]));
        let b = component("b", ComponentSpec::new().executes(["B1"]));
        let mut graph = ExecutionGraph::new();
        let mut registry = Registry::new();
        discover(&[a, b], &mut graph, &mut registry).unwrap();
        assert_eq!(graph.nodes(), ["A1".to_string(), "B1".to_string()]);
    }
}
