//! One-time global registration surface.
//!
//! The host page does not use a module system; it reaches the loader
//! through a well-known namespace carrying exactly two entry points,
//! `mount` and `unmount`. This module is that namespace: a process-wide
//! slot holding one installed [`Callbox`], filled exactly once when the
//! embedding script initializes.
//!
//! Registration never overwrites: if a surface is already installed, a
//! second `install` is rejected and the existing entry stays in place.
//! There is no retry logic anywhere here; installation is a synchronous,
//! one-shot operation.

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use anyhow::Result;
use callbox_core::error::{ConfigError, Error, RegistryError};
use callbox_core::id::InstanceId;
use callbox_core::types::WidgetSettings;

use crate::Callbox;

static GLOBAL: OnceCell<Callbox> = OnceCell::new();

/// Install `callbox` as the process-wide widget surface.
///
/// # Returns
///
/// * `Ok(())` - This is now the installed surface.
/// * `Err(RegistryError::AlreadyInstalled)` - A surface was installed
///   earlier; it remains in place and `callbox` is discarded.
pub fn install(callbox: Callbox) -> Result<()> {
    GLOBAL.set(callbox).map_err(|_| {
        warn!("global widget surface already installed; keeping the existing entry");
        Error::from(RegistryError::AlreadyInstalled)
    })?;
    info!("global widget surface installed");
    Ok(())
}

/// Whether a surface has been installed.
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}

fn installed() -> Result<&'static Callbox> {
    GLOBAL
        .get()
        .ok_or_else(|| Error::from(RegistryError::NotInstalled).into())
}

/// Mount a widget through the installed surface.
pub fn mount(settings: WidgetSettings) -> Result<Option<InstanceId>> {
    installed()?.mount(settings)
}

/// Mount a widget from a host-page JSON settings payload.
///
/// Field names follow the embed surface (camelCase); unknown fields are
/// ignored, unset fields stay unset.
pub fn mount_json(json: &str) -> Result<Option<InstanceId>> {
    let settings: WidgetSettings = serde_json::from_str(json)
        .map_err(|err| Error::from(ConfigError::ParseFailed(err.to_string())))?;
    mount(settings)
}

/// Unmount the live widget through the installed surface.
pub fn unmount() -> Result<()> {
    installed()?.unmount()
}
