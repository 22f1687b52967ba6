//! Page effects for atelier.
//!
//! Small time-driven state machines the page composes: one-shot reveals,
//! the hero typewriter, the loader splash, the spring-smoothed scroll
//! progress, stat counters and the cursor trail. All of them are pure
//! functions of the millisecond clock they are handed, which keeps them
//! independent of the terminal.

pub mod easing;
mod counter;
mod loader;
mod progress;
mod reveal;
mod trail;
mod typewriter;

pub use counter::AnimatedCounter;
pub use loader::PageLoader;
pub use progress::{ScrollProgress, Spring};
pub use reveal::Reveal;
pub use trail::{CursorTrail, TrailDot};
pub use typewriter::{TypeWriter, TypeWriterState};
