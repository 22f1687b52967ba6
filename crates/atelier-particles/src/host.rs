//! The environment seam the animator runs against.

use atelier_core::Viewport;

use crate::surface::Surface;

/// Handle for a pending "call me before the next repaint" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Handle for a registered notification listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Notification streams the animator subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The viewport changed size.
    Resize,
    /// The view was shown or hidden.
    VisibilityChange,
}

/// Everything the animator reads from, or registers with, its environment.
///
/// All calls happen on one thread. The host never calls back into the
/// animator itself; the owner routes due frames and notifications to
/// [`FieldAnimator`](crate::FieldAnimator) methods.
pub trait Host {
    /// Drawing surface this host can provide.
    type Surface: Surface;

    /// Current viewport in virtual pixels.
    fn viewport(&self) -> Viewport;

    /// Whether the user asked for non-essential animation to be suppressed.
    fn prefers_reduced_motion(&self) -> bool;

    /// Allocate a surface sized to `viewport`, or `None` when drawing is not
    /// supported.
    fn acquire_surface(&mut self, viewport: Viewport) -> Option<Self::Surface>;

    /// Ask for one frame callback before the next repaint.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a frame request that has not fired yet.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Register interest in a notification stream.
    fn subscribe(&mut self, event: HostEvent) -> ListenerId;

    /// Remove a listener registered with [`Host::subscribe`].
    fn unsubscribe(&mut self, listener: ListenerId);
}
