//! Widget lifecycle control.
//!
//! This module owns the single permitted widget instance: the controller
//! wires the scope factory to the root component, enforces the singleton
//! guard, and runs mount and unmount to completion.

pub mod lifecycle;

// Re-export key types for convenience
pub use lifecycle::{InstanceInfo, WidgetController};
