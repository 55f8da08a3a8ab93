//! # Per-run shared state handed to components.
//!
//! [`RunContext`] is created fresh inside every
//! [`Orchestrator::run`](crate::Orchestrator::run) call — there is no
//! process-wide state, so repeated runs in one process cannot leak into each
//! other. Components receive it as [`ContextRef`] (an `Arc`) and use it for
//! three things:
//!
//! - **configuration values**: the merged [`ExecSpec`], a map of
//!   [`serde_json::Value`]s namespaced by component;
//! - **interface lookup**: [`RunContext::interface`] (optional) and
//!   [`RunContext::require_interface`] (absence is the distinct
//!   [`NodeError::InterfaceUndefined`]);
//! - **termination registration**: [`RunContext::defer`] pushes a labeled
//!   async callback onto the stack that the orchestrator drains in reverse
//!   registration order after execution, whether or not execution failed.
//!
//! The configuration values and the interface map are frozen before the
//! first node executes; only the deferred-callback stack mutates during
//! Executing, behind a mutex.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use serde_json::Value;

use crate::components::ComponentRef;
use crate::error::NodeError;

/// Shared reference to the per-run context.
pub type ContextRef = Arc<RunContext>;

/// A deferred termination callback with its diagnostic label.
pub(crate) struct Deferred {
    pub(crate) label: String,
    pub(crate) callback: Box<dyn FnOnce() -> BoxFuture<'static, Result<(), NodeError>> + Send>,
}

/// # Merged execution specification.
///
/// The union of all caller-supplied configuration values, namespaced by
/// component. Later merges overwrite earlier values for the same namespace.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use stagevisor::ExecSpec;
///
/// let mut spec = ExecSpec::new();
/// spec.set("settings", json!({ "path": "~/.config/app.json" }));
/// assert_eq!(spec.get("settings").unwrap()["path"], "~/.config/app.json");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ExecSpec {
    values: HashMap<String, Value>,
}

impl ExecSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a namespace, replacing any previous value.
    pub fn set(&mut self, namespace: impl Into<String>, value: Value) {
        self.values.insert(namespace.into(), value);
    }

    /// Returns the value for a namespace, if supplied.
    pub fn get(&self, namespace: &str) -> Option<&Value> {
        self.values.get(namespace)
    }

    /// Merges `other` into `self`; `other`'s values win on conflict.
    pub fn merge(&mut self, other: ExecSpec) {
        self.values.extend(other.values);
    }
}

/// # Per-run state shared with components.
///
/// See the module docs for the three capabilities it exposes. Constructed by
/// the orchestrator after Discovery, once the interface registry is frozen.
pub struct RunContext {
    values: ExecSpec,
    interfaces: HashMap<String, ComponentRef>,
    deferred: Mutex<Vec<Deferred>>,
}

impl RunContext {
    pub(crate) fn new(values: ExecSpec, interfaces: HashMap<String, ComponentRef>) -> Self {
        Self {
            values,
            interfaces,
            deferred: Mutex::new(Vec::new()),
        }
    }

    /// Returns the configuration value supplied for `namespace`, if any.
    pub fn value(&self, namespace: &str) -> Option<&Value> {
        self.values.get(namespace)
    }

    /// Looks up an interface implementation. Absence is not an error at this
    /// layer — callers decide whether the capability is optional.
    pub fn interface(&self, name: &str) -> Option<ComponentRef> {
        self.interfaces.get(name).cloned()
    }

    /// Looks up an interface implementation that must exist.
    ///
    /// Absence is [`NodeError::InterfaceUndefined`], distinguishable in the
    /// final report from the calling component's own failures.
    pub fn require_interface(&self, name: &str) -> Result<ComponentRef, NodeError> {
        self.interface(name).ok_or_else(|| NodeError::InterfaceUndefined {
            interface: name.to_string(),
        })
    }

    /// Registers a callback to run during the Terminating phase.
    ///
    /// Callbacks run in reverse registration order (most recently registered
    /// first), whether or not execution produced errors. The `label` appears
    /// in fault records if the callback fails. Meaningful only while the run
    /// is executing; callbacks registered by another callback are not picked
    /// up — the stack is drained once.
    pub fn defer<F, Fut>(&self, label: impl Into<String>, callback: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), NodeError>> + Send + 'static,
    {
        let deferred = Deferred {
            label: label.into(),
            callback: Box::new(move || -> BoxFuture<'static, Result<(), NodeError>> {
                Box::pin(callback())
            }),
        };
        // Lock never poisons: push is the only operation under it.
        self.deferred
            .lock()
            .expect("deferred stack lock")
            .push(deferred);
    }

    /// Drains the deferred stack in registration order. Called exactly once,
    /// by the orchestrator, at the start of the Terminating phase.
    pub(crate) fn take_deferred(&self) -> Vec<Deferred> {
        std::mem::take(&mut *self.deferred.lock().expect("deferred stack lock"))
    }
}
