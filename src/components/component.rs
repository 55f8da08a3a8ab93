//! # Component trait: the contract for lifecycle participants.
//!
//! A [`Component`] has a stable [`name`](Component::name), a declaration
//! record read once during Discovery ([`spec`](Component::spec)), and a
//! single async execution entry point ([`perform`](Component::perform)) that
//! the orchestrator invokes once per owned node, in schedule order.
//!
//! The shared handle type is [`ComponentRef`], an `Arc<dyn Component>`
//! suitable for the node and interface registries.
//!
//! # Example
//! ```
//! use async_trait::async_trait;
//! use stagevisor::{Component, ComponentSpec, ContextRef, NodeError, stages};
//!
//! struct Greeter;
//!
//! #[async_trait]
//! impl Component for Greeter {
//!     fn name(&self) -> &str { "greeter" }
//!
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//!
//!     fn spec(&self) -> ComponentSpec {
//!         ComponentSpec::new().executes([stages::UP])
//!     }
//!
//!     async fn perform(&self, node: &str, _ctx: ContextRef) -> Result<(), NodeError> {
//!         assert_eq!(node, stages::UP);
//!         println!("hello");
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::ContextRef;
use crate::error::NodeError;

use super::spec::ComponentSpec;

/// Shared reference to a component.
pub type ComponentRef = Arc<dyn Component>;

impl std::fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component").field("name", &self.name()).finish()
    }
}

/// # Pluggable lifecycle participant.
///
/// Implementors declare, via [`spec`](Component::spec), which graph nodes
/// they execute, which ordering sequences they require, and which interfaces
/// they implement. During the Executing phase the orchestrator calls
/// [`perform`](Component::perform) with the firing node's name, so one
/// component can distinguish which of its several owned nodes is firing.
#[async_trait]
pub trait Component: Send + Sync + 'static {
    /// Returns a stable, human-readable component name (used in duplicate
    /// claim diagnostics and fault records).
    fn name(&self) -> &str;

    /// Returns `self` as [`Any`](std::any::Any) so that consumers of a
    /// looked-up interface can downcast to the implementing type and reach
    /// its capability methods.
    ///
    /// The conventional implementation is `fn as_any(&self) -> &dyn Any { self }`.
    fn as_any(&self) -> &dyn std::any::Any;

    /// Returns the declaration record. Read exactly once per run, during
    /// Discovery; must be stable for the duration of the call.
    fn spec(&self) -> ComponentSpec;

    /// Executes one owned node.
    ///
    /// Runs to completion before the next node is considered; there is no
    /// concurrent execution within a run. Errors other than
    /// [`NodeError::Exit`] are recorded and do not block later nodes.
    async fn perform(&self, node: &str, ctx: ContextRef) -> Result<(), NodeError>;
}
