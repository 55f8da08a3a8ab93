//! # Insert-once registries for node ownership and interfaces.
//!
//! Two independent mappings, populated during Discovery and frozen before
//! anything executes:
//!
//! - **node name → owning component**: the orchestrator dispatches each
//!   scheduled node to its owner; a node with no owner is a pure ordering
//!   placeholder and is skipped.
//! - **interface name → implementing component**: any component may look up
//!   any interface during execution.
//!
//! ## Rules
//! - At most one component may claim a given node name; a second claim is a
//!   [`ConfigError::DuplicateNodeOwner`] naming both parties.
//! - At most one component may implement a given interface name; a second
//!   registration is a [`ConfigError::DuplicateInterface`].
//! - Re-registering the *same* component is still a duplicate: the claim sets
//!   are declarations, and declaring a name twice is a configuration bug
//!   worth surfacing.

use std::collections::HashMap;

use crate::components::ComponentRef;
use crate::error::ConfigError;

/// Insert-once node-owner and interface maps.
#[derive(Default)]
pub(crate) struct Registry {
    node_owners: HashMap<String, ComponentRef>,
    interfaces: HashMap<String, ComponentRef>,
}

impl Registry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Claims `node` for `component`.
    ///
    /// Fails with [`ConfigError::DuplicateNodeOwner`] if the node is already
    /// claimed.
    pub(crate) fn register_node(
        &mut self,
        node: &str,
        component: &ComponentRef,
    ) -> Result<(), ConfigError> {
        if let Some(owner) = self.node_owners.get(node) {
            return Err(ConfigError::DuplicateNodeOwner {
                node: node.to_string(),
                owner: owner.name().to_string(),
                claimant: component.name().to_string(),
            });
        }
        self.node_owners.insert(node.to_string(), component.clone());
        Ok(())
    }

    /// Registers `component` as the implementation of `interface`.
    ///
    /// Fails with [`ConfigError::DuplicateInterface`] if the interface is
    /// already implemented.
    pub(crate) fn register_interface(
        &mut self,
        interface: &str,
        component: &ComponentRef,
    ) -> Result<(), ConfigError> {
        if let Some(owner) = self.interfaces.get(interface) {
            return Err(ConfigError::DuplicateInterface {
                interface: interface.to_string(),
                owner: owner.name().to_string(),
                claimant: component.name().to_string(),
            });
        }
        self.interfaces
            .insert(interface.to_string(), component.clone());
        Ok(())
    }

    /// Looks up the owner of `node`. Absence is valid (placeholder node).
    pub(crate) fn node_owner(&self, node: &str) -> Option<&ComponentRef> {
        self.node_owners.get(node)
    }

    /// Moves the frozen interface map out (into the run context); the
    /// node-owner map stays behind for execution-time dispatch.
    pub(crate) fn take_interfaces(&mut self) -> HashMap<String, ComponentRef> {
        std::mem::take(&mut self.interfaces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentFn, ComponentSpec};
    use crate::core::ContextRef;
    use crate::error::NodeError;

    fn component(name: &'static str) -> ComponentRef {
        ComponentFn::arc(name, ComponentSpec::new(), |_n: String, _c: ContextRef| async {
            Ok::<_, NodeError>(())
        })
    }

    #[test]
    fn first_claim_wins_second_fails() {
        let mut reg = Registry::new();
        let a = component("a");
        let b = component("b");
        reg.register_node("N", &a).unwrap();
        let err = reg.register_node("N", &b).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateNodeOwner {
                node: "N".into(),
                owner: "a".into(),
                claimant: "b".into(),
            }
        );
    }

    #[test]
    fn same_component_cannot_claim_twice() {
        let mut reg = Registry::new();
        let a = component("a");
        reg.register_node("N", &a).unwrap();
        assert!(reg.register_node("N", &a).is_err());
    }

    #[test]
    fn interfaces_are_insert_once() {
        let mut reg = Registry::new();
        let a = component("a");
        let b = component("b");
        reg.register_interface("SETTINGS", &a).unwrap();
        let err = reg.register_interface("SETTINGS", &b).unwrap_err();
        assert_eq!(err.as_label(), "duplicate_interface");
    }

    #[test]
    fn unclaimed_node_has_no_owner() {
        let reg = Registry::new();
        assert!(reg.node_owner("ghost").is_none());
    }

    #[test]
    fn node_and_interface_namespaces_are_independent() {
        let mut reg = Registry::new();
        let a = component("a");
        let b = component("b");
        reg.register_node("SAME", &a).unwrap();
        // Same string as an interface name is a different namespace.
        reg.register_interface("SAME", &b).unwrap();
    }
}
