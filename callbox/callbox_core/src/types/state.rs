//! Lifecycle state for the widget controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The controller's mount state.
///
/// The lifecycle is a two-state machine: `Unmounted` at load time, `Mounted`
/// after a successful mount, back to `Unmounted` on unmount. There is no
/// transitional state because mount and unmount run to completion without
/// yielding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountPhase {
    /// No widget instance is live.
    Unmounted,

    /// Exactly one widget instance is live.
    Mounted,
}

impl MountPhase {
    /// Check if a widget instance is currently live.
    pub fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted)
    }
}

impl fmt::Display for MountPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmounted => write!(f, "Unmounted"),
            Self::Mounted => write!(f, "Mounted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_phase() {
        assert!(!MountPhase::Unmounted.is_mounted());
        assert!(MountPhase::Mounted.is_mounted());
        assert_eq!(MountPhase::Mounted.to_string(), "Mounted");
    }
}
