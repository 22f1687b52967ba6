//! Spring-smoothed scroll progress.

/// Damped spring chasing a target value.
#[derive(Debug, Clone)]
pub struct Spring {
    stiffness: f32,
    damping: f32,
    rest_delta: f32,
    value: f32,
    velocity: f32,
    target: f32,
}

/// Longest integration step, in seconds.
const MAX_STEP_S: f32 = 0.004;

impl Spring {
    pub fn new(stiffness: f32, damping: f32, rest_delta: f32) -> Self {
        Self {
            stiffness,
            damping,
            rest_delta,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance the simulation by `dt_ms` (unit mass, semi-implicit Euler).
    pub fn tick(&mut self, dt_ms: u64) {
        let mut remaining = dt_ms as f32 / 1000.0;
        while remaining > 0.0 && !self.is_at_rest() {
            let dt = remaining.min(MAX_STEP_S);
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force * dt;
            self.value += self.velocity * dt;
            remaining -= dt;

            if (self.value - self.target).abs() < self.rest_delta
                && self.velocity.abs() < self.rest_delta
            {
                self.value = self.target;
                self.velocity = 0.0;
            }
        }
    }
}

/// Page scroll progress bar state.
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    spring: Spring,
    enabled: bool,
}

impl ScrollProgress {
    /// Disabled under reduced motion.
    pub fn new(enabled: bool) -> Self {
        Self {
            spring: Spring::new(80.0, 25.0, 0.005),
            enabled,
        }
    }

    /// Feed the current scroll offset.
    pub fn set_scroll(&mut self, offset: u32, max_offset: u32) {
        let target = if max_offset == 0 {
            0.0
        } else {
            (offset as f32 / max_offset as f32).clamp(0.0, 1.0)
        };
        self.spring.set_target(target);
    }

    pub fn tick(&mut self, dt_ms: u64) {
        if self.enabled {
            self.spring.tick(dt_ms);
        }
    }

    /// Smoothed progress, or `None` when the bar is disabled.
    pub fn value(&self) -> Option<f32> {
        self.enabled.then(|| self.spring.value().clamp(0.0, 1.0))
    }
}
