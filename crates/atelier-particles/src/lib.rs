//! Ambient particle field backdrop.
//!
//! A fixed set of drifting points drawn to a surface sized to exactly one
//! viewport. The field is regenerated wholesale when the viewport settles
//! after a resize, pauses while the view is hidden, throttles its draw rate
//! by device class and never starts when reduced motion is requested.
//!
//! The environment is abstracted behind [`Host`] (viewport, frame
//! scheduling, notifications) and [`Surface`] (clear and fill circles), so
//! the animator runs the same against a terminal or a test double.

mod animator;
mod chars;
mod debounce;
mod host;
mod particle;
mod surface;
mod throttle;

#[cfg(test)]
mod testing;

pub use animator::{AnimatorPhase, FieldAnimator, FieldSettings, FrameOutcome};
pub use debounce::Debouncer;
pub use host::{FrameRequest, Host, HostEvent, ListenerId};
pub use particle::{Particle, generate_particles, wrap_coord};
pub use surface::{CellSurface, Surface};
pub use throttle::FrameThrottle;
