//! Scoped render target trait definitions.
//!
//! The isolation boundary is modeled as a capability: a factory that builds
//! a fresh isolated scope per mount, and the scope itself, which exposes the
//! nodes the component needs. Keeping the controller on this interface means
//! it can be tested against a fake, in-memory scope implementation.
//!
//! # Isolation Model
//!
//! - Each mount gets its own scope; scopes are never reused, so stale styles
//!   or nodes from a prior instance cannot collide with a new one.
//! - Style text handed to the factory is injected inside the scope only. It
//!   must never reach the host document's top-level style cascade, and host
//!   stylesheets must not apply inside the scope.
//! - The container node is attached to the host document before
//!   `create_scope` returns, so the component can render synchronously.

use crate::error::Result;
use crate::id::ScopeId;

/// A live isolated scope.
///
/// Dropping the scope releases it. Implementations decide what release
/// means for the host document; the packaged backend detaches the container
/// node so unmount leaves no orphaned host-page node.
pub trait RenderScope<T>: Send + Sync {
    /// The scope's identifier.
    fn scope_id(&self) -> ScopeId;

    /// The container node attached to the host document.
    fn container(&self) -> &T;

    /// The mount target inside the isolated scope.
    ///
    /// This is the node the root component renders into. Markup placed here
    /// is invisible to host-page selectors.
    fn mount_target(&self) -> &T;
}

/// Factory for isolated scopes.
pub trait ScopeFactory<T>: Send + Sync {
    /// Build a fresh scope and inject `style_text` into it.
    ///
    /// # Returns
    ///
    /// * `Ok(scope)` - Container attached, style injected, target ready.
    /// * `Err(ScopeError)` - The scope could not be constructed; the host
    ///   document is left unchanged.
    fn create_scope(&self, style_text: &str) -> Result<Box<dyn RenderScope<T>>>;
}
