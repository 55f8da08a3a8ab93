//! # Closure-backed component (`ComponentFn`).
//!
//! [`ComponentFn`] wraps a declaration record and a closure
//! `F: Fn(String, ContextRef) -> Fut`, producing a fresh future per node
//! dispatch. This keeps small collaborators and test fixtures to a few lines
//! without a dedicated struct.
//!
//! ## Example
//! ```rust
//! use stagevisor::{ComponentFn, ComponentRef, ComponentSpec, ContextRef, NodeError, stages};
//!
//! let spec = ComponentSpec::new()
//!     .executes(["SAY_HELLO"])
//!     .requires([stages::ACTIVATE, "SAY_HELLO", stages::UP]);
//!
//! let c: ComponentRef = ComponentFn::arc("hello", spec, |node: String, _ctx: ContextRef| async move {
//!     assert_eq!(node, "SAY_HELLO");
//!     Ok::<_, NodeError>(())
//! });
//!
//! assert_eq!(c.name(), "hello");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::ContextRef;
use crate::error::NodeError;

use super::component::Component;
use super::spec::ComponentSpec;

/// Function-backed component implementation.
///
/// The closure receives the firing node's name (owned) and the shared run
/// context, and is called once per owned node in schedule order.
pub struct ComponentFn<F> {
    name: Cow<'static, str>,
    spec: ComponentSpec,
    f: F,
}

impl<F> ComponentFn<F> {
    /// Creates a new closure-backed component.
    ///
    /// Prefer [`ComponentFn::arc`] when you immediately need a
    /// [`ComponentRef`](crate::ComponentRef).
    pub fn new(name: impl Into<Cow<'static, str>>, spec: ComponentSpec, f: F) -> Self {
        Self {
            name: name.into(),
            spec,
            f,
        }
    }

    /// Creates the component and returns it as a shared handle
    /// (`Arc<dyn Component>` once coerced).
    pub fn arc(name: impl Into<Cow<'static, str>>, spec: ComponentSpec, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, spec, f))
    }
}

#[async_trait]
impl<F, Fut> Component for ComponentFn<F>
where
    F: Fn(String, ContextRef) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), NodeError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn spec(&self) -> ComponentSpec {
        self.spec.clone()
    }

    async fn perform(&self, node: &str, ctx: ContextRef) -> Result<(), NodeError> {
        (self.f)(node.to_string(), ctx).await
    }
}
