//! Data types used throughout the Callbox system.
//!
//! - **settings**: the caller-supplied widget configuration
//! - **state**: the lifecycle controller's mount state machine

pub mod settings;
pub mod state;

pub use settings::WidgetSettings;
pub use state::MountPhase;
