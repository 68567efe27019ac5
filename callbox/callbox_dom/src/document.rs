//! In-memory host document.
//!
//! This module models the part of a host page the loader touches: a tree of
//! elements with an optional isolated (shadow) subtree per element. It is
//! deliberately small - enough structure for the isolation contract to be
//! real and observable, nothing more.
//!
//! Style ownership is the load-bearing rule: a stylesheet belongs to the
//! root it was injected under (the document itself, or one shadow root), and
//! style queries for a node resolve against the owning root only. Queries
//! for markup likewise stop at shadow boundaries in both directions.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use callbox_core::error::{Result, ScopeError};

/// Key of a node within its document.
pub type NodeKey = u64;

/// The root that owns a node's subtree for style resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRoot {
    /// The node lives in the host document's light tree.
    Document,

    /// The node lives inside the shadow root with the given key.
    Shadow(NodeKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Element,
    ShadowRoot,
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    tag: String,
    text: Option<String>,
    parent: Option<NodeKey>,
    /// For shadow roots: the element the root is attached to.
    host: Option<NodeKey>,
    children: Vec<NodeKey>,
    /// For elements: the attached shadow root, if any.
    shadow_root: Option<NodeKey>,
}

impl NodeData {
    fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_string(),
            text: None,
            parent: None,
            host: None,
            children: Vec::new(),
            shadow_root: None,
        }
    }

    fn shadow_root(host: NodeKey) -> Self {
        Self {
            kind: NodeKind::ShadowRoot,
            tag: "#shadow-root".to_string(),
            text: None,
            parent: None,
            host: Some(host),
            children: Vec::new(),
            shadow_root: None,
        }
    }
}

#[derive(Debug)]
struct DocumentInner {
    nodes: HashMap<NodeKey, NodeData>,
    next_key: NodeKey,
    root: NodeKey,
    head: NodeKey,
    body: NodeKey,
}

impl DocumentInner {
    fn insert(&mut self, data: NodeData) -> NodeKey {
        let key = self.next_key;
        self.next_key += 1;
        self.nodes.insert(key, data);
        key
    }

    fn node(&self, key: NodeKey) -> Result<&NodeData> {
        self.nodes
            .get(&key)
            .ok_or_else(|| ScopeError::NodeNotFound(key.to_string()).into())
    }

    fn node_mut(&mut self, key: NodeKey) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(&key)
            .ok_or_else(|| ScopeError::NodeNotFound(key.to_string()).into())
    }

    /// Walk up to the root that owns `key` for style resolution.
    fn tree_root_of(&self, key: NodeKey) -> Result<TreeRoot> {
        let mut current = key;
        loop {
            let data = self.node(current)?;
            if data.kind == NodeKind::ShadowRoot {
                return Ok(TreeRoot::Shadow(current));
            }
            match data.parent {
                Some(parent) => current = parent,
                // Detached nodes resolve against the document cascade.
                None => return Ok(TreeRoot::Document),
            }
        }
    }

    /// Collect the text of `style` elements under `key`, without crossing
    /// into attached shadow roots.
    fn collect_styles(&self, key: NodeKey, out: &mut Vec<String>) {
        let Some(data) = self.nodes.get(&key) else {
            return;
        };
        if data.kind == NodeKind::Element && data.tag == "style" {
            if let Some(text) = &data.text {
                out.push(text.clone());
            }
        }
        for child in &data.children {
            self.collect_styles(*child, out);
        }
    }

    /// Depth-first search for the first element with `tag` under `key`,
    /// stopping at shadow boundaries.
    fn find_tag(&self, key: NodeKey, tag: &str) -> Option<NodeKey> {
        let data = self.nodes.get(&key)?;
        if data.kind == NodeKind::Element && data.tag == tag {
            return Some(key);
        }
        for child in &data.children {
            if let Some(found) = self.find_tag(*child, tag) {
                return Some(found);
            }
        }
        None
    }

    /// Delete `key` and its whole subtree, including attached shadow roots.
    fn delete_subtree(&mut self, key: NodeKey) {
        let Some(data) = self.nodes.remove(&key) else {
            return;
        };
        if let Some(shadow) = data.shadow_root {
            self.delete_subtree(shadow);
        }
        for child in data.children {
            self.delete_subtree(child);
        }
    }
}

/// A shared handle to an in-memory host document.
///
/// Clones share the same underlying tree. A fresh document carries the
/// usual `html` / `head` / `body` skeleton.
#[derive(Debug, Clone)]
pub struct Document {
    inner: Arc<RwLock<DocumentInner>>,
}

impl Document {
    /// Create a new, empty host document.
    pub fn new() -> Self {
        let mut inner = DocumentInner {
            nodes: HashMap::new(),
            next_key: 1,
            root: 0,
            head: 0,
            body: 0,
        };
        let root = inner.insert(NodeData::element("html"));
        let head = inner.insert(NodeData::element("head"));
        let body = inner.insert(NodeData::element("body"));
        inner.nodes.get_mut(&head).unwrap().parent = Some(root);
        inner.nodes.get_mut(&body).unwrap().parent = Some(root);
        inner.nodes.get_mut(&root).unwrap().children = vec![head, body];
        inner.root = root;
        inner.head = head;
        inner.body = body;

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    fn make_ref(&self, key: NodeKey) -> NodeRef {
        NodeRef {
            document: self.clone(),
            key,
        }
    }

    /// The document's `body` element.
    pub fn body(&self) -> NodeRef {
        let key = self.inner.read().body;
        self.make_ref(key)
    }

    /// The document's `head` element.
    pub fn head(&self) -> NodeRef {
        let key = self.inner.read().head;
        self.make_ref(key)
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeRef {
        let key = self.inner.write().insert(NodeData::element(tag));
        self.make_ref(key)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&self, parent: &NodeRef, child: &NodeRef) -> Result<()> {
        let mut inner = self.inner.write();
        inner.node(parent.key)?;
        let previous = inner.node(child.key)?.parent;
        if let Some(previous) = previous {
            if let Ok(node) = inner.node_mut(previous) {
                node.children.retain(|k| *k != child.key);
            }
        }
        inner.node_mut(child.key)?.parent = Some(parent.key);
        inner.node_mut(parent.key)?.children.push(child.key);
        Ok(())
    }

    /// Set the text content of a node.
    pub fn set_text(&self, node: &NodeRef, text: &str) -> Result<()> {
        self.inner.write().node_mut(node.key)?.text = Some(text.to_string());
        Ok(())
    }

    /// Get the text content of a node.
    pub fn text(&self, node: &NodeRef) -> Result<Option<String>> {
        Ok(self.inner.read().node(node.key)?.text.clone())
    }

    /// Get the tag name of a node.
    pub fn tag(&self, node: &NodeRef) -> Result<String> {
        Ok(self.inner.read().node(node.key)?.tag.clone())
    }

    /// Attach a fresh shadow root to `host`.
    ///
    /// Fails if the element already carries one; a scope is never layered
    /// onto an existing scope.
    pub fn attach_shadow(&self, host: &NodeRef) -> Result<NodeRef> {
        let mut inner = self.inner.write();
        let host_data = inner.node(host.key)?;
        if host_data.shadow_root.is_some() {
            return Err(ScopeError::ShadowAlreadyAttached(host_data.tag.clone()).into());
        }
        let shadow = inner.insert(NodeData::shadow_root(host.key));
        inner.node_mut(host.key)?.shadow_root = Some(shadow);
        Ok(self.make_ref(shadow))
    }

    /// Remove a node and its whole subtree from the document.
    pub fn remove_node(&self, node: &NodeRef) -> Result<()> {
        let mut inner = self.inner.write();
        let parent = inner.node(node.key)?.parent;
        if let Some(parent) = parent {
            if let Ok(data) = inner.node_mut(parent) {
                data.children.retain(|k| *k != node.key);
            }
        }
        inner.delete_subtree(node.key);
        Ok(())
    }

    /// Whether the node is reachable from the document root, crossing
    /// shadow boundaries upward through their hosts.
    pub fn is_connected(&self, node: &NodeRef) -> bool {
        let inner = self.inner.read();
        let mut current = node.key;
        loop {
            if current == inner.root {
                return true;
            }
            let Some(data) = inner.nodes.get(&current) else {
                return false;
            };
            match (data.parent, data.host) {
                (Some(parent), _) => current = parent,
                (None, Some(host)) => current = host,
                (None, None) => return false,
            }
        }
    }

    /// Number of children of a node.
    pub fn child_count(&self, node: &NodeRef) -> Result<usize> {
        Ok(self.inner.read().node(node.key)?.children.len())
    }

    /// The root that owns `node` for style resolution.
    pub fn tree_root_of(&self, node: &NodeRef) -> Result<TreeRoot> {
        self.inner.read().tree_root_of(node.key)
    }

    /// Add a host-page stylesheet (a `style` element in `head`).
    pub fn add_host_style(&self, css: &str) -> Result<NodeRef> {
        let style = self.create_element("style");
        self.set_text(&style, css)?;
        self.append_child(&self.head(), &style)?;
        Ok(style)
    }

    /// Stylesheet texts belonging to the document's own cascade.
    pub fn host_style_texts(&self) -> Vec<String> {
        let inner = self.inner.read();
        let mut out = Vec::new();
        inner.collect_styles(inner.root, &mut out);
        out
    }

    /// Stylesheet texts that apply to `node`: the stylesheets of the root
    /// owning it, and nothing else.
    pub fn scoped_style_texts(&self, node: &NodeRef) -> Result<Vec<String>> {
        let inner = self.inner.read();
        let mut out = Vec::new();
        match inner.tree_root_of(node.key)? {
            TreeRoot::Document => inner.collect_styles(inner.root, &mut out),
            TreeRoot::Shadow(shadow) => inner.collect_styles(shadow, &mut out),
        }
        Ok(out)
    }

    /// Find the first element with `tag` visible from the document root.
    /// Does not cross into shadow roots, like a host-page selector.
    pub fn query_tag(&self, tag: &str) -> Option<NodeRef> {
        let inner = self.inner.read();
        let found = inner.find_tag(inner.root, tag)?;
        drop(inner);
        Some(self.make_ref(found))
    }

    /// Find the first element with `tag` within `node`'s subtree.
    pub fn query_tag_within(&self, node: &NodeRef, tag: &str) -> Result<Option<NodeRef>> {
        let inner = self.inner.read();
        inner.node(node.key)?;
        let found = inner.find_tag(node.key, tag);
        drop(inner);
        Ok(found.map(|key| self.make_ref(key)))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A typed handle to one node in a document.
#[derive(Debug, Clone)]
pub struct NodeRef {
    document: Document,
    key: NodeKey,
}

impl NodeRef {
    /// The node's key within its document.
    pub fn key(&self) -> NodeKey {
        self.key
    }

    /// The document this node belongs to.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the node is still attached to its document.
    pub fn is_connected(&self) -> bool {
        self.document.is_connected(self)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Arc::ptr_eq(&self.document.inner, &other.document.inner)
    }
}

impl Eq for NodeRef {}
