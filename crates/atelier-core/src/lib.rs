//! Core types for the atelier terminal portfolio.
//!
//! Plain value types shared by the particle backdrop, the page effects and
//! the binary: viewport geometry, device classification, colours and the
//! page's section order.

mod color;
mod section;
mod viewport;

pub use color::{Palette, Rgba, blend, hsl_to_rgb};
pub use section::Section;
pub use viewport::{DeviceClass, ParticleVariant, Viewport, Visibility};
