//! # Callbox DOM
//!
//! `callbox_dom` provides the default isolation backend for the Callbox
//! widget loader: an in-memory host document with shadow-scope support, and
//! a scope factory that builds the isolated mounting point a widget renders
//! into.
//!
//! Key concepts:
//!
//! 1. **Document**: a shared handle to an in-memory node tree standing in
//!    for the host page.
//!
//! 2. **Node Reference**: a typed handle to one node in a document.
//!
//! 3. **Shadow Root**: an isolated subtree attached to a host element.
//!    Styles injected into it apply only within it, and host-document
//!    queries do not cross into it.
//!
//! 4. **Shadow Scope**: the packaged implementation of the core scope
//!    capability - container in the body, fresh shadow root, injected
//!    style node, inner mount target. Releasing the scope detaches the
//!    container from the document.

pub mod document;
pub mod scope;

// Re-export key types for convenience
pub use document::{Document, NodeRef, TreeRoot};
pub use scope::{ShadowScope, ShadowScopeFactory};
