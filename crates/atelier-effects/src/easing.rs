//! Easing curves over `t` in 0.0-1.0.

/// Cubic ease-in-out.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Progress of `elapsed_ms` through a `duration_ms` window starting at
/// `start_ms`, clamped to 0.0-1.0.
pub fn window(elapsed_ms: u64, start_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return if elapsed_ms >= start_ms { 1.0 } else { 0.0 };
    }
    (elapsed_ms.saturating_sub(start_ms) as f32 / duration_ms as f32).clamp(0.0, 1.0)
}
