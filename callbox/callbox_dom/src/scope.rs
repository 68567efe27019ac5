//! Shadow-scope isolation backend.
//!
//! This module implements the core scope capability over the in-memory
//! document: each mount gets a container element appended to `body`, a
//! fresh shadow root on that container, a `style` node carrying the widget
//! stylesheet inside the root, and an inner mount target the component
//! renders into.

use tracing::{debug, trace};

use callbox_core::error::Result;
use callbox_core::id::ScopeId;
use callbox_core::traits::{RenderScope, ScopeFactory};

use crate::document::{Document, NodeRef};

/// Tag of the container element the factory appends to `body`.
pub const CONTAINER_TAG: &str = "callbox-widget";

/// Factory for shadow scopes over a host document.
pub struct ShadowScopeFactory {
    document: Document,
}

impl ShadowScopeFactory {
    /// Create a factory bound to `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document this factory attaches scopes to.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ScopeFactory<NodeRef> for ShadowScopeFactory {
    fn create_scope(&self, style_text: &str) -> Result<Box<dyn RenderScope<NodeRef>>> {
        let scope_id = ScopeId::new();

        let container = self.document.create_element(CONTAINER_TAG);
        self.document.append_child(&self.document.body(), &container)?;

        let shadow = self.document.attach_shadow(&container)?;

        let style = self.document.create_element("style");
        self.document.set_text(&style, style_text)?;
        self.document.append_child(&shadow, &style)?;

        let target = self.document.create_element("div");
        self.document.append_child(&shadow, &target)?;

        debug!(scope = %scope_id, "created shadow scope");

        Ok(Box::new(ShadowScope {
            scope_id,
            document: self.document.clone(),
            container,
            target,
        }))
    }
}

/// A live shadow scope.
///
/// Dropping the scope detaches its container from the host document, taking
/// the shadow subtree (injected style included) with it. Unmount therefore
/// leaves no orphaned host-page node.
pub struct ShadowScope {
    scope_id: ScopeId,
    document: Document,
    container: NodeRef,
    target: NodeRef,
}

impl RenderScope<NodeRef> for ShadowScope {
    fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    fn container(&self) -> &NodeRef {
        &self.container
    }

    fn mount_target(&self) -> &NodeRef {
        &self.target
    }
}

impl Drop for ShadowScope {
    fn drop(&mut self) {
        match self.document.remove_node(&self.container) {
            Ok(()) => debug!(scope = %self.scope_id, "released shadow scope"),
            // Already gone, e.g. the host page tore the document down first
            Err(err) => trace!(scope = %self.scope_id, %err, "container already detached"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callbox_core::error::Error;

    #[test]
    fn test_scope_attaches_container_before_returning() {
        let document = Document::new();
        let factory = ShadowScopeFactory::new(document.clone());

        let scope = factory.create_scope(".modal { color: blue; }").unwrap();
        assert!(scope.container().is_connected());
        assert!(scope.mount_target().is_connected());
        assert_eq!(document.child_count(&document.body()).unwrap(), 1);
    }

    #[test]
    fn test_style_text_lands_inside_scope_only() {
        let document = Document::new();
        let factory = ShadowScopeFactory::new(document.clone());

        let scope = factory.create_scope(".modal { color: blue; }").unwrap();
        let scoped = document.scoped_style_texts(scope.mount_target()).unwrap();
        assert_eq!(scoped, vec![".modal { color: blue; }".to_string()]);
        assert!(document.host_style_texts().is_empty());
    }

    #[test]
    fn test_each_scope_is_fresh() {
        let document = Document::new();
        let factory = ShadowScopeFactory::new(document.clone());

        let first = factory.create_scope(".a {}").unwrap();
        let second = factory.create_scope(".b {}").unwrap();

        assert_ne!(first.scope_id(), second.scope_id());
        assert_ne!(first.mount_target(), second.mount_target());
        // The second scope sees only its own stylesheet
        let scoped = document.scoped_style_texts(second.mount_target()).unwrap();
        assert_eq!(scoped, vec![".b {}".to_string()]);
    }

    #[test]
    fn test_drop_detaches_container() {
        let document = Document::new();
        let factory = ShadowScopeFactory::new(document.clone());

        let scope = factory.create_scope(".modal {}").unwrap();
        assert_eq!(document.child_count(&document.body()).unwrap(), 1);

        drop(scope);
        assert_eq!(document.child_count(&document.body()).unwrap(), 0);
        assert!(document.query_tag(CONTAINER_TAG).is_none());
    }

    #[test]
    fn test_scope_errors_are_scope_errors() {
        let document = Document::new();
        let factory = ShadowScopeFactory::new(document.clone());
        let scope = factory.create_scope(".modal {}").unwrap();

        // Forcing a second shadow root on the same container fails
        let err = document.attach_shadow(scope.container()).unwrap_err();
        assert!(matches!(err, Error::Scope(_)));
    }
}
