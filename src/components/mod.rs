//! Component abstractions and specifications.
//!
//! This module provides the contract every external collaborator satisfies:
//! - [`Component`] - trait for pluggable lifecycle participants
//! - [`ComponentSpec`] - the declaration record read once during Discovery
//! - [`ComponentFn`] - closure-backed component implementation
//! - [`ComponentRef`] - shared reference to a component (`Arc<dyn Component>`)

mod component;
mod component_fn;
mod spec;

pub use component::{Component, ComponentRef};
pub use component_fn::ComponentFn;
pub use spec::ComponentSpec;
