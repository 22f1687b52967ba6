//! Fading dots following the mouse.

/// Size of the reusable dot pool.
pub const MAX_DOTS: usize = 5;
/// Minimum time between placed dots.
const THROTTLE_MS: u64 = 80;
/// Time a dot stays at full strength.
const HOLD_MS: u64 = 150;
/// Time a dot takes to fade out after the hold.
const FADE_MS: u64 = 400;
/// Strength of a freshly placed dot.
const PEAK: f32 = 0.6;

/// A placed trail dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailDot {
    pub col: u16,
    pub row: u16,
    placed_at: u64,
}

impl TrailDot {
    /// Strength at `now_ms`, from 0.6 down to 0.0.
    pub fn intensity(&self, now_ms: u64) -> f32 {
        let age = now_ms.saturating_sub(self.placed_at);
        if age < HOLD_MS {
            PEAK
        } else if age < HOLD_MS + FADE_MS {
            PEAK * (1.0 - (age - HOLD_MS) as f32 / FADE_MS as f32)
        } else {
            0.0
        }
    }
}

/// Round-robin pool of trail dots.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    dots: [Option<TrailDot>; MAX_DOTS],
    next: usize,
    last_placed: Option<u64>,
    enabled: bool,
}

impl CursorTrail {
    /// Disabled under reduced motion.
    pub fn new(enabled: bool) -> Self {
        Self {
            dots: [None; MAX_DOTS],
            next: 0,
            last_placed: None,
            enabled,
        }
    }

    /// Record a mouse move. Returns whether a dot was placed.
    pub fn on_move(&mut self, col: u16, row: u16, now_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        if let Some(last) = self.last_placed
            && now_ms.saturating_sub(last) < THROTTLE_MS
        {
            return false;
        }
        self.dots[self.next % MAX_DOTS] = Some(TrailDot {
            col,
            row,
            placed_at: now_ms,
        });
        self.next = (self.next + 1) % MAX_DOTS;
        self.last_placed = Some(now_ms);
        true
    }

    /// Dots still visible at `now_ms`, with their strength.
    pub fn visible(&self, now_ms: u64) -> impl Iterator<Item = (TrailDot, f32)> + '_ {
        self.dots
            .iter()
            .flatten()
            .map(move |dot| (*dot, dot.intensity(now_ms)))
            .filter(|(_, intensity)| *intensity > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttles_moves() {
        let mut trail = CursorTrail::new(true);
        assert!(trail.on_move(1, 1, 0));
        assert!(!trail.on_move(2, 1, 79));
        assert!(trail.on_move(3, 1, 80));
        assert_eq!(trail.visible(100).count(), 2);
    }

    #[test]
    fn test_pool_is_reused() {
        let mut trail = CursorTrail::new(true);
        for i in 0..8u16 {
            assert!(trail.on_move(i, 0, u64::from(i) * 100));
        }
        let cols: Vec<u16> = trail.visible(700).map(|(dot, _)| dot.col).collect();
        assert!(cols.len() <= MAX_DOTS);
        assert!(cols.contains(&7));
        assert!(!cols.contains(&2));
    }

    #[test]
    fn test_dot_fades() {
        let mut trail = CursorTrail::new(true);
        trail.on_move(4, 4, 1000);
        let (_, fresh) = trail.visible(1100).next().unwrap();
        assert_eq!(fresh, 0.6);
        let (_, half) = trail.visible(1350).next().unwrap();
        assert!((half - 0.3).abs() < 1e-6);
        assert_eq!(trail.visible(1550).count(), 0);
    }

    #[test]
    fn test_disabled_trail_places_nothing() {
        let mut trail = CursorTrail::new(false);
        assert!(!trail.on_move(1, 1, 0));
        assert_eq!(trail.visible(0).count(), 0);
    }
}
