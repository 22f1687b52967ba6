//! One-shot reveal when an element first scrolls into view.

use std::ops::Range;

/// Flips to revealed the first time its element intersects the viewport
/// and never flips back.
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    /// Rows the element must be inside the viewport edges before it counts.
    margin: u32,
    revealed_at: Option<u64>,
}

impl Reveal {
    pub fn new(margin: u32) -> Self {
        Self {
            margin,
            revealed_at: None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Check the element's rows against the visible rows. Returns true only
    /// on the observation that reveals it.
    pub fn observe(&mut self, element: Range<u32>, viewport: Range<u32>, now_ms: u64) -> bool {
        if self.is_revealed() || element.is_empty() {
            return false;
        }
        let top = viewport.start.saturating_add(self.margin);
        let bottom = viewport.end.saturating_sub(self.margin).max(top.saturating_add(1));
        if element.start < bottom && element.end > top {
            self.revealed_at = Some(now_ms);
            tracing::trace!(?element, now_ms, "revealed");
            return true;
        }
        false
    }

    /// Milliseconds since the reveal, or `None` while hidden.
    pub fn elapsed(&self, now_ms: u64) -> Option<u64> {
        self.revealed_at.map(|at| now_ms.saturating_sub(at))
    }

    /// Fade-in progress over `duration_ms`, 0.0 while unrevealed.
    pub fn progress(&self, now_ms: u64, duration_ms: u64) -> f32 {
        self.elapsed(now_ms)
            .map_or(0.0, |elapsed| crate::easing::window(elapsed, 0, duration_ms))
    }
}
