//! # Builder for [`Orchestrator`].
//!
//! Collects the component list and the subscriber set before constructing
//! the orchestrator. Component order matters: it is the Discovery order, and
//! with it the scheduler's tie-break order — keep it stable for reproducible
//! runs.

use std::sync::Arc;

use crate::components::ComponentRef;
use crate::config::Config;
use crate::subscribers::{Subscribe, SubscriberSet};

use super::Orchestrator;

/// Builder for constructing an [`Orchestrator`].
pub struct OrchestratorBuilder {
    cfg: Config,
    components: Vec<ComponentRef>,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl OrchestratorBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            components: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Sets the registered components, replacing any previous list.
    ///
    /// The list order is the Discovery order.
    pub fn with_components(mut self, components: Vec<ComponentRef>) -> Self {
        self.components = components;
        self
    }

    /// Appends one component to the registration list.
    pub fn register(mut self, component: ComponentRef) -> Self {
        self.components.push(component);
        self
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive run events (phase boundaries, node dispatch
    /// outcomes, captured faults) through dedicated workers with bounded
    /// queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the orchestrator, spawning one worker per subscriber.
    ///
    /// Must be called from within a tokio runtime (the subscriber workers are
    /// spawned here).
    pub fn build(self) -> Orchestrator {
        let subs = Arc::new(SubscriberSet::new(self.subscribers));
        Orchestrator::new(self.cfg, self.components, subs)
    }
}
