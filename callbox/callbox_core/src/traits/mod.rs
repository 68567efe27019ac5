//! Capability interfaces for the Callbox widget loader.
//!
//! These are the seams the lifecycle controller is written against:
//!
//! - `RootComponent`: the opaque mountable component that renders the
//!   actual call-assistance UI
//! - `ComponentHandle`: the destroy capability of a live instance
//! - `ScopeFactory` / `RenderScope`: the scoped render target that keeps
//!   the widget's markup and styles isolated from the host page

pub mod component;
pub mod scope;

pub use component::{ComponentHandle, RootComponent};
pub use scope::{RenderScope, ScopeFactory};
