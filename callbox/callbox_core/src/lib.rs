//! # Callbox Core
//!
//! `callbox_core` provides the fundamental building blocks for the Callbox
//! widget loader. This includes error types, typed identifiers, the widget
//! settings model, and the capability traits the lifecycle controller
//! depends on.
//!
//! ## Core Principles
//!
//! 1. **Single Instance**: at most one widget instance is live per
//!    controller at any time. The controller owns the only reference to the
//!    mounted component and is the only party allowed to destroy it.
//!
//! 2. **Capability Interfaces**: the rendered component is opaque to the
//!    controller. It is reachable only through [`traits::RootComponent`]
//!    (instantiate) and [`traits::ComponentHandle`] (destroy), so the
//!    controller never depends on a concrete rendering technology.
//!
//! 3. **Scoped Render Targets**: markup and styles are mounted into an
//!    isolated scope produced by a [`traits::ScopeFactory`]. Each mount gets
//!    a fresh scope; nothing leaks into or out of the host document's style
//!    cascade.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all Callbox components
//! - **id**: Strongly-typed identifier types
//! - **traits**: Capability interfaces for components and scopes
//! - **types**: Settings and lifecycle state data structures

pub mod error;
pub mod id;
pub mod traits;
pub mod types;

// Re-export key types and traits for convenience
pub use error::{ComponentError, ConfigError, Error, RegistryError, Result, ScopeError};
pub use id::{InstanceId, ScopeId};
pub use traits::{ComponentHandle, RenderScope, RootComponent, ScopeFactory};
pub use types::{MountPhase, WidgetSettings};
