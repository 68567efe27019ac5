//! Root component trait definitions.
//!
//! The widget's visual implementation is an external collaborator. The
//! controller sees it only through these two capabilities: a factory that
//! mounts the component against a render target, and the handle it returns,
//! which supports exactly one operation.

use crate::error::Result;
use crate::types::WidgetSettings;

/// The destroy capability of a live widget instance.
///
/// `destroy` consumes the handle, so a handle can never be destroyed twice;
/// the "call destroy exactly once" contract is enforced by ownership rather
/// than by a runtime flag.
pub trait ComponentHandle: Send {
    /// Tear down the live instance.
    ///
    /// Failures inside the component propagate to the caller unmodified;
    /// the controller does not catch or wrap them.
    fn destroy(self: Box<Self>);
}

/// Factory for the opaque root component.
///
/// `T` is the render target type produced by the scope factory the
/// controller was wired with. The controller itself never inspects the
/// target; it only threads it through from the scope to the component.
///
/// # Examples
///
/// ```
/// use callbox_core::traits::{ComponentHandle, RootComponent};
/// use callbox_core::types::WidgetSettings;
/// use callbox_core::error::Result;
///
/// struct NullHandle;
///
/// impl ComponentHandle for NullHandle {
///     fn destroy(self: Box<Self>) {}
/// }
///
/// struct NullComponent;
///
/// impl RootComponent<()> for NullComponent {
///     fn instantiate(
///         &self,
///         _target: &(),
///         _props: WidgetSettings,
///     ) -> Result<Box<dyn ComponentHandle>> {
///         Ok(Box::new(NullHandle))
///     }
/// }
/// ```
pub trait RootComponent<T>: Send + Sync {
    /// Mount the component against `target` with the given props.
    ///
    /// The props are delivered exactly as the caller supplied them; the
    /// loader neither validates nor back-fills them (beyond the opt-in
    /// identity check, which runs before this point).
    ///
    /// # Returns
    ///
    /// * `Ok(handle)` - The destroy capability of the new instance.
    /// * `Err(_)` - Construction failed; no instance exists.
    fn instantiate(&self, target: &T, props: WidgetSettings) -> Result<Box<dyn ComponentHandle>>;
}
