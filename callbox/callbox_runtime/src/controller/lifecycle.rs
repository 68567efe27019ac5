//! The widget lifecycle controller.
//!
//! A controller is a two-state machine over one slot: `Unmounted` until a
//! successful mount, `Mounted` until the matching unmount. The first mount
//! wins; a second mount while an instance is live is a guarded no-op, never
//! a replacement. State lives on the controller itself, so independent
//! controllers (one per embedding context) never share anything.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

use callbox_core::error::Result;
use callbox_core::id::InstanceId;
use callbox_core::traits::{ComponentHandle, RenderScope, RootComponent, ScopeFactory};
use callbox_core::types::{MountPhase, WidgetSettings};

use crate::config::LoaderConfig;

/// Observable metadata of a live instance.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceInfo {
    /// The instance's identifier
    pub id: InstanceId,

    /// When the instance was mounted
    pub mounted_at: DateTime<Utc>,
}

/// The record held in the controller's singleton slot.
struct MountedInstance<T> {
    id: InstanceId,
    handle: Box<dyn ComponentHandle>,
    scope: Box<dyn RenderScope<T>>,
    mounted_at: DateTime<Utc>,
}

/// The lifecycle controller for a single widget instance.
///
/// `T` is the render target type shared by the scope factory and the root
/// component the controller was wired with.
pub struct WidgetController<T> {
    /// Builds one fresh isolation scope per mount
    scopes: Arc<dyn ScopeFactory<T>>,

    /// The opaque component rendered into each scope
    root: Arc<dyn RootComponent<T>>,

    /// Loader configuration
    config: LoaderConfig,

    /// The singleton slot. The lock is held across the guard check and the
    /// state mutation, so the double-mount race cannot occur even on
    /// multi-threaded hosts.
    slot: Mutex<Option<MountedInstance<T>>>,
}

impl<T> WidgetController<T> {
    /// Create a new controller.
    pub fn new(
        scopes: Arc<dyn ScopeFactory<T>>,
        root: Arc<dyn RootComponent<T>>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            scopes,
            root,
            config,
            slot: Mutex::new(None),
        }
    }

    /// Mount a widget instance with the given settings.
    ///
    /// If an instance is already live this is a safe no-op: a diagnostic is
    /// logged, nothing in the host document changes, the settings are never
    /// forwarded anywhere, and `Ok(None)` is returned.
    ///
    /// Otherwise a fresh isolation scope is built, the root component is
    /// instantiated inside it with the settings delivered unmodified, and
    /// the new instance's identifier is returned. Component failures
    /// propagate unmodified; the scope built for the failed attempt is
    /// released and the controller stays unmounted.
    pub fn mount(&self, settings: WidgetSettings) -> Result<Option<InstanceId>> {
        let mut slot = self.slot.lock();

        if let Some(instance) = slot.as_ref() {
            warn!(
                instance = %instance.id,
                "widget already mounted; call unmount() first"
            );
            return Ok(None);
        }

        if self.config.enforce_identity {
            settings.validate_identity()?;
        }

        let scope = self.scopes.create_scope(&self.config.style_text)?;
        // On failure the scope is dropped here, which releases it.
        let handle = self.root.instantiate(scope.mount_target(), settings)?;

        let id = InstanceId::new();
        info!(instance = %id, scope = %scope.scope_id(), "widget mounted");

        *slot = Some(MountedInstance {
            id,
            handle,
            scope,
            mounted_at: Utc::now(),
        });

        Ok(Some(id))
    }

    /// Unmount the live widget instance, if any.
    ///
    /// Calls `destroy` exactly once on the stored handle, then releases the
    /// isolation scope. With no live instance this is a silent no-op.
    pub fn unmount(&self) -> Result<()> {
        let mut slot = self.slot.lock();

        // Nothing mounted: silently ignored, not even diagnosed
        let Some(instance) = slot.take() else {
            return Ok(());
        };

        instance.handle.destroy();
        drop(instance.scope);

        info!(instance = %instance.id, "widget unmounted");
        Ok(())
    }

    /// The controller's current phase.
    pub fn phase(&self) -> MountPhase {
        if self.slot.lock().is_some() {
            MountPhase::Mounted
        } else {
            MountPhase::Unmounted
        }
    }

    /// Metadata of the live instance, if any.
    pub fn current_instance(&self) -> Option<InstanceInfo> {
        self.slot.lock().as_ref().map(|instance| InstanceInfo {
            id: instance.id,
            mounted_at: instance.mounted_at,
        })
    }

    /// The loader configuration this controller was built with.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }
}
