//! Voluntary frame-rate cap.

/// Lets a draw through only when at least `min_interval_ms` has passed
/// since the previous one. The first frame always passes.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    min_interval_ms: u64,
    last_draw_ms: Option<u64>,
}

impl FrameThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_draw_ms: None,
        }
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    /// Change the cap. The last draw time is kept.
    pub fn set_min_interval(&mut self, min_interval_ms: u64) {
        self.min_interval_ms = min_interval_ms;
    }

    /// Whether a draw may happen at `now_ms`; records it when it may.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last_draw_ms {
            Some(last) if now_ms.saturating_sub(last) < self.min_interval_ms => false,
            _ => {
                self.last_draw_ms = Some(now_ms);
                true
            }
        }
    }
}
