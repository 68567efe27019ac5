//! Callbox Runtime - lifecycle controller for the Callbox widget loader
//!
//! This crate wires the pieces together: the controller that enforces the
//! single-instance contract, the loader configuration, the shadow-scope
//! isolation backend from `callbox_dom`, and the one-time global surface a
//! host page calls `mount` / `unmount` through.

pub mod config;
pub mod controller;
pub mod global;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use callbox_core::id::InstanceId;
use callbox_core::traits::RootComponent;
use callbox_core::types::{MountPhase, WidgetSettings};
use callbox_dom::{Document, NodeRef, ShadowScopeFactory};

pub use config::LoaderConfig;
pub use controller::{InstanceInfo, WidgetController};

/// Loader facade binding a controller to a host document.
///
/// This is the unit the global surface installs: one host document, one
/// shadow-scope factory over it, one lifecycle controller. The root
/// component stays opaque; the embedder supplies whatever renders the
/// actual call-assistance UI.
pub struct Callbox {
    document: Document,
    controller: Arc<WidgetController<NodeRef>>,
}

impl Callbox {
    /// Create a loader over a fresh host document.
    pub fn new(config: LoaderConfig, root: Arc<dyn RootComponent<NodeRef>>) -> Result<Self> {
        Self::with_document(Document::new(), config, root)
    }

    /// Create a loader over an existing host document.
    pub fn with_document(
        document: Document,
        config: LoaderConfig,
        root: Arc<dyn RootComponent<NodeRef>>,
    ) -> Result<Self> {
        info!("initializing Callbox loader");

        let scopes = Arc::new(ShadowScopeFactory::new(document.clone()));
        let controller = Arc::new(WidgetController::new(scopes, root, config));

        Ok(Self {
            document,
            controller,
        })
    }

    /// Mount a widget instance. See [`WidgetController::mount`].
    pub fn mount(&self, settings: WidgetSettings) -> Result<Option<InstanceId>> {
        Ok(self.controller.mount(settings)?)
    }

    /// Mount a widget instance from a host-page JSON settings payload.
    pub fn mount_json(&self, json: &str) -> Result<Option<InstanceId>> {
        let settings: WidgetSettings = serde_json::from_str(json).map_err(|err| {
            callbox_core::Error::from(callbox_core::ConfigError::ParseFailed(err.to_string()))
        })?;
        self.mount(settings)
    }

    /// Unmount the live widget instance, if any. See
    /// [`WidgetController::unmount`].
    pub fn unmount(&self) -> Result<()> {
        Ok(self.controller.unmount()?)
    }

    /// The controller's current phase.
    pub fn phase(&self) -> MountPhase {
        self.controller.phase()
    }

    /// Metadata of the live instance, if any.
    pub fn current_instance(&self) -> Option<InstanceInfo> {
        self.controller.current_instance()
    }

    /// The host document this loader mounts into.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The underlying lifecycle controller.
    pub fn controller(&self) -> &Arc<WidgetController<NodeRef>> {
        &self.controller
    }
}
