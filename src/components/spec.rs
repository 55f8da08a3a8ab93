//! # Component specification: what a component declares to the orchestrator.
//!
//! [`ComponentSpec`] is the record Discovery reads from every registered
//! component, exactly once per run. It declares:
//!
//! - **executed nodes** — graph nodes this component is responsible for
//!   (routed to its [`perform`](crate::Component::perform) entry point);
//! - **required sequences** — ordering constraints, each a chain of two or
//!   more node names expanded into pairwise edges;
//! - **implemented interfaces** — named capabilities other components may
//!   look up, each mapping to this component.
//!
//! ## Rules
//! - A sequence may mention nodes nobody executes; they become pure ordering
//!   placeholders and are skipped at execution time.
//! - Node and interface ownership is exclusive: a second component declaring
//!   the same name fails Discovery before anything runs.
//!
//! ## Example
//! ```rust
//! use stagevisor::{stages, ComponentSpec};
//!
//! let spec = ComponentSpec::new()
//!     .executes(["READ_SETTINGS"])
//!     .requires([stages::ARGPARSE, "READ_SETTINGS", stages::ACTIVATE])
//!     .implements("SETTINGS");
//!
//! assert_eq!(spec.nodes(), ["READ_SETTINGS".to_string()]);
//! assert_eq!(spec.interfaces(), ["SETTINGS".to_string()]);
//! ```

/// Declaration record contributed by each component.
///
/// Built with chained calls; consumed by Discovery and not retained beyond
/// it except as copied into the graph and registries.
#[derive(Debug, Default, Clone)]
pub struct ComponentSpec {
    nodes: Vec<String>,
    sequences: Vec<Vec<String>>,
    interfaces: Vec<String>,
}

impl ComponentSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares graph nodes this component executes.
    ///
    /// May be called several times; calls accumulate.
    pub fn executes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Declares one required ordering sequence (two or more node names).
    ///
    /// An n-length sequence contributes n-1 pairwise edges to the graph.
    /// May be called several times; calls accumulate.
    pub fn requires<I, S>(mut self, sequence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequences
            .push(sequence.into_iter().map(Into::into).collect());
        self
    }

    /// Declares an interface implemented by this component.
    ///
    /// May be called several times; calls accumulate.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Nodes this component executes, in declaration order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Required ordering sequences, in declaration order.
    pub fn sequences(&self) -> &[Vec<String>] {
        &self.sequences
    }

    /// Implemented interface names, in declaration order.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn calls_accumulate() {
        let spec = ComponentSpec::new()
            .executes(["A"])
            .executes(["B"])
            .requires(["A", "B"])
            .implements("I")
            .implements("J");
        assert_eq!(spec.nodes(), ["A".to_string(), "B".to_string()]);
        assert_eq!(spec.sequences(), [vec!["A".to_string(), "B".to_string()]]);
        assert_eq!(spec.interfaces(), ["I".to_string(), "J".to_string()]);
    }

    #[test]
    fn empty_spec_declares_nothing() {
        let spec = ComponentSpec::new();
        assert!(spec.nodes().is_empty());
        assert!(spec.sequences().is_empty());
        assert!(spec.interfaces().is_empty());
    }
}
