//! The particle field animator and its lifecycle.

use atelier_core::{DeviceClass, Viewport, Visibility};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::debounce::Debouncer;
use crate::host::{FrameRequest, Host, HostEvent, ListenerId};
use crate::particle::{Particle, generate_particles};
use crate::surface::Surface;
use crate::throttle::FrameThrottle;

/// Tuning for the particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSettings {
    /// Viewport width below which the device is compact.
    pub mobile_breakpoint: u32,
    /// Particle count on compact viewports.
    pub compact_count: usize,
    /// Particle count on wide viewports.
    pub wide_count: usize,
    /// Minimum milliseconds between draws on compact viewports.
    pub compact_frame_ms: u64,
    /// Minimum milliseconds between draws on wide viewports.
    pub wide_frame_ms: u64,
    /// Quiet period that ends a resize burst.
    pub resize_quiet_ms: u64,
    /// Chance that a particle is an accent.
    pub accent_probability: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            compact_count: 15,
            wide_count: 25,
            compact_frame_ms: 33,
            wide_frame_ms: 16,
            resize_quiet_ms: 250,
            accent_probability: 0.3,
        }
    }
}

impl FieldSettings {
    /// Number of particles for a device class.
    pub fn particle_count(&self, class: DeviceClass) -> usize {
        match class {
            DeviceClass::Compact => self.compact_count,
            DeviceClass::Wide => self.wide_count,
        }
    }

    /// Minimum draw interval for a device class.
    pub fn frame_interval_ms(&self, class: DeviceClass) -> u64 {
        match class {
            DeviceClass::Compact => self.compact_frame_ms,
            DeviceClass::Wide => self.wide_frame_ms,
        }
    }

    fn classify(&self, viewport: Viewport) -> DeviceClass {
        DeviceClass::classify(viewport.width, self.mobile_breakpoint)
    }
}

/// Lifecycle phase of a [`FieldAnimator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorPhase {
    /// Not mounted yet.
    Uninitialized,
    /// Drawing on every frame the throttle lets through.
    Running,
    /// View hidden; frames are still scheduled but draw nothing.
    Paused,
    /// Replacing the particle set after a resize.
    Regenerating,
    /// Torn down, or never started.
    Terminated,
}

/// What a frame callback did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Particles advanced and the surface was redrawn.
    Drawn,
    /// Too soon after the previous draw.
    Throttled,
    /// View hidden; nothing touched.
    Paused,
    /// Animator not running; nothing scheduled.
    Inactive,
}

/// Owns the particle set and its surface, and drives them from host frames.
#[derive(Debug)]
pub struct FieldAnimator<S> {
    phase: AnimatorPhase,
    settings: FieldSettings,
    rng: StdRng,
    surface: Option<S>,
    particles: Vec<Particle>,
    device: DeviceClass,
    visibility: Visibility,
    throttle: FrameThrottle,
    resize: Debouncer<Viewport>,
    pending_frame: Option<FrameRequest>,
    listeners: Vec<ListenerId>,
    regenerations: u64,
}

impl<S: Surface> FieldAnimator<S> {
    fn uninitialized(settings: FieldSettings, rng: StdRng) -> Self {
        let throttle = FrameThrottle::new(settings.wide_frame_ms);
        let resize = Debouncer::new(settings.resize_quiet_ms);
        Self {
            phase: AnimatorPhase::Uninitialized,
            settings,
            rng,
            surface: None,
            particles: Vec::new(),
            device: DeviceClass::Wide,
            visibility: Visibility::Visible,
            throttle,
            resize,
            pending_frame: None,
            listeners: Vec::new(),
            regenerations: 0,
        }
    }

    /// Start the field on `host`.
    ///
    /// With reduced motion requested, or without a drawing surface, the
    /// animator goes straight to [`AnimatorPhase::Terminated`] without
    /// touching the host any further.
    pub fn mount<H: Host<Surface = S>>(host: &mut H, settings: FieldSettings, rng: StdRng) -> Self {
        let mut animator = Self::uninitialized(settings, rng);

        if host.prefers_reduced_motion() {
            info!("reduced motion requested, particle field disabled");
            animator.phase = AnimatorPhase::Terminated;
            return animator;
        }

        let viewport = host.viewport();
        let Some(surface) = host.acquire_surface(viewport) else {
            debug!("no drawing surface available, particle field disabled");
            animator.phase = AnimatorPhase::Terminated;
            return animator;
        };
        animator.surface = Some(surface);
        animator.populate(viewport);

        animator.listeners.push(host.subscribe(HostEvent::Resize));
        animator
            .listeners
            .push(host.subscribe(HostEvent::VisibilityChange));
        animator.pending_frame = Some(host.request_frame());
        animator.phase = AnimatorPhase::Running;

        info!(
            width = viewport.width,
            height = viewport.height,
            device = ?animator.device,
            particles = animator.particles.len(),
            "particle field mounted"
        );
        animator
    }

    /// Handle a frame callback at `timestamp_ms`.
    ///
    /// The next frame is requested before anything else so the loop keeps
    /// running through hidden and throttled passes.
    pub fn on_frame<H: Host<Surface = S>>(&mut self, host: &mut H, timestamp_ms: u64) -> FrameOutcome {
        if self.phase == AnimatorPhase::Terminated || self.phase == AnimatorPhase::Uninitialized {
            return FrameOutcome::Inactive;
        }
        self.pending_frame = Some(host.request_frame());

        if self.visibility == Visibility::Hidden {
            return FrameOutcome::Paused;
        }
        if !self.throttle.ready(timestamp_ms) {
            return FrameOutcome::Throttled;
        }
        let Some(surface) = self.surface.as_mut() else {
            return FrameOutcome::Inactive;
        };

        let size = surface.size();
        let (width, height) = (size.width as f32, size.height as f32);
        surface.clear();
        for particle in &mut self.particles {
            particle.step(width, height);
            surface.fill_circle(particle.x, particle.y, particle.radius, particle.color());
        }
        FrameOutcome::Drawn
    }

    /// Note a viewport change. Regeneration waits for the burst to settle;
    /// see [`FieldAnimator::poll_timers`].
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) {
        if self.is_active() {
            self.resize.push(viewport, now_ms);
        }
    }

    /// Track the view being shown or hidden.
    pub fn on_visibility(&mut self, visibility: Visibility) {
        if !self.is_active() {
            return;
        }
        self.visibility = visibility;
        self.phase = match visibility {
            Visibility::Visible => AnimatorPhase::Running,
            Visibility::Hidden => AnimatorPhase::Paused,
        };
        debug!(?visibility, "particle field visibility changed");
    }

    /// Fire the resize debounce if its quiet period has passed. Returns
    /// whether the field was regenerated.
    pub fn poll_timers(&mut self, now_ms: u64) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(viewport) = self.resize.poll(now_ms) else {
            return false;
        };

        self.phase = AnimatorPhase::Regenerating;
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(viewport);
        }
        self.populate(viewport);
        self.regenerations += 1;
        self.phase = match self.visibility {
            Visibility::Visible => AnimatorPhase::Running,
            Visibility::Hidden => AnimatorPhase::Paused,
        };

        info!(
            width = viewport.width,
            height = viewport.height,
            device = ?self.device,
            particles = self.particles.len(),
            "particle field regenerated"
        );
        true
    }

    /// Stop the field: cancel the pending frame, drop the pending resize,
    /// remove every listener and release the surface. Safe to call twice.
    pub fn unmount<H: Host<Surface = S>>(&mut self, host: &mut H) {
        if let Some(request) = self.pending_frame.take() {
            host.cancel_frame(request);
        }
        self.resize.cancel();
        for listener in self.listeners.drain(..) {
            host.unsubscribe(listener);
        }
        self.surface = None;
        self.particles.clear();
        if self.phase != AnimatorPhase::Terminated {
            debug!("particle field unmounted");
        }
        self.phase = AnimatorPhase::Terminated;
    }

    /// Replace the whole particle set for `viewport`.
    fn populate(&mut self, viewport: Viewport) {
        self.device = self.settings.classify(viewport);
        self.throttle
            .set_min_interval(self.settings.frame_interval_ms(self.device));
        let count = self.settings.particle_count(self.device);
        self.particles = generate_particles(
            &mut self.rng,
            viewport,
            count,
            self.settings.accent_probability,
        );
    }

    pub fn phase(&self) -> AnimatorPhase {
        self.phase
    }

    /// Whether the animator is mounted and not yet torn down.
    pub fn is_active(&self) -> bool {
        matches!(
            self.phase,
            AnimatorPhase::Running | AnimatorPhase::Paused | AnimatorPhase::Regenerating
        )
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    /// Minimum interval between draws currently in force.
    pub fn frame_interval_ms(&self) -> u64 {
        self.throttle.min_interval_ms()
    }

    /// How many times a settled resize has regenerated the field.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    /// When the pending resize regeneration is due, if one is pending.
    pub fn resize_deadline(&self) -> Option<u64> {
        self.resize.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingHost, RecordingSurface};
    use rand::SeedableRng;

    fn mount(host: &mut RecordingHost) -> FieldAnimator<RecordingSurface> {
        FieldAnimator::mount(host, FieldSettings::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_desktop_mount_end_to_end() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);

        assert_eq!(animator.phase(), AnimatorPhase::Running);
        assert_eq!(host.surfaces_acquired, 1);
        let surface = animator.surface().unwrap();
        assert_eq!(surface.size(), Viewport::new(1024, 768));
        assert_eq!(animator.particles().len(), 25);
        assert_eq!(animator.device_class(), DeviceClass::Wide);
        assert_eq!(animator.frame_interval_ms(), 16);
        for p in animator.particles() {
            assert!(p.dx.abs() <= 0.3 && p.dy.abs() <= 0.3);
        }

        // One frame was requested at mount and the first callback draws
        assert_eq!(host.requested.len(), 1);
        assert_eq!(animator.on_frame(&mut host, 16), FrameOutcome::Drawn);
        let surface = animator.surface().unwrap();
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills.len(), 25);
        assert_eq!(host.requested.len(), 2);
        assert_eq!(host.active_listeners(), 2);
    }

    #[test]
    fn test_compact_mount_uses_fewer_particles_and_slower_cadence() {
        let mut host = RecordingHost::new(Viewport::new(390, 844));
        let animator = mount(&mut host);
        assert_eq!(animator.device_class(), DeviceClass::Compact);
        assert_eq!(animator.particles().len(), 15);
        assert_eq!(animator.frame_interval_ms(), 33);
    }

    #[test]
    fn test_reduced_motion_has_no_side_effects() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        host.reduced_motion = true;
        let mut animator = mount(&mut host);

        assert_eq!(animator.phase(), AnimatorPhase::Terminated);
        assert!(animator.surface().is_none());
        assert_eq!(host.surfaces_acquired, 0);
        assert!(host.requested.is_empty());
        assert!(host.subscribed.is_empty());

        // Stray callbacks do nothing either
        assert_eq!(animator.on_frame(&mut host, 16), FrameOutcome::Inactive);
        animator.on_resize(Viewport::new(800, 600), 0);
        assert!(!animator.poll_timers(10_000));
        assert!(host.requested.is_empty());
    }

    #[test]
    fn test_missing_surface_falls_back_silently() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        host.drawing_supported = false;
        let animator = mount(&mut host);

        assert_eq!(animator.phase(), AnimatorPhase::Terminated);
        assert!(animator.particles().is_empty());
        assert!(host.requested.is_empty());
        assert!(host.subscribed.is_empty());
    }

    #[test]
    fn test_hidden_frames_skip_drawing_but_keep_scheduling() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);
        assert_eq!(animator.on_frame(&mut host, 16), FrameOutcome::Drawn);

        animator.on_visibility(Visibility::Hidden);
        assert_eq!(animator.phase(), AnimatorPhase::Paused);
        let positions: Vec<_> = animator.particles().iter().map(|p| (p.x, p.y)).collect();
        let requested = host.requested.len();

        for t in 1..=20 {
            assert_eq!(animator.on_frame(&mut host, 16 + t * 16), FrameOutcome::Paused);
        }
        let surface = animator.surface().unwrap();
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.total_fills, 25);
        let after: Vec<_> = animator.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(positions, after);
        assert_eq!(host.requested.len(), requested + 20);

        animator.on_visibility(Visibility::Visible);
        assert_eq!(animator.phase(), AnimatorPhase::Running);
        assert_eq!(animator.on_frame(&mut host, 400), FrameOutcome::Drawn);
        assert_eq!(animator.surface().unwrap().clears, 2);
    }

    #[test]
    fn test_throttle_skips_early_frames() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);
        assert_eq!(animator.on_frame(&mut host, 100), FrameOutcome::Drawn);
        assert_eq!(animator.on_frame(&mut host, 110), FrameOutcome::Throttled);
        assert_eq!(animator.on_frame(&mut host, 116), FrameOutcome::Drawn);
        assert_eq!(animator.surface().unwrap().clears, 2);
    }

    #[test]
    fn test_resize_burst_regenerates_once_with_final_size() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);
        let before = animator.particles().to_vec();

        let burst = [(1000, 760), (900, 700), (800, 650), (700, 600), (640, 480)];
        for (i, (w, h)) in burst.into_iter().enumerate() {
            let now = i as u64 * 50;
            animator.on_resize(Viewport::new(w, h), now);
            assert!(!animator.poll_timers(now + 10));
        }
        assert_eq!(animator.resize_deadline(), Some(200 + 250));
        assert!(!animator.poll_timers(449));
        assert!(animator.poll_timers(450));
        assert!(!animator.poll_timers(5_000));
        assert_eq!(animator.regenerations(), 1);

        let surface = animator.surface().unwrap();
        assert_eq!(surface.size(), Viewport::new(640, 480));
        assert_eq!(surface.resizes, 1);
        assert_eq!(animator.device_class(), DeviceClass::Compact);
        assert_eq!(animator.particles().len(), 15);
        assert!(animator.particles().iter().all(|p| !before.contains(p)));
        for p in animator.particles() {
            assert!(p.x < 640.0 && p.y < 480.0);
        }
        assert_eq!(animator.phase(), AnimatorPhase::Running);
    }

    #[test]
    fn test_regeneration_while_hidden_stays_paused() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);
        animator.on_visibility(Visibility::Hidden);
        animator.on_resize(Viewport::new(1280, 800), 0);
        assert!(animator.poll_timers(250));
        assert_eq!(animator.phase(), AnimatorPhase::Paused);
        assert_eq!(animator.particles().len(), 25);
    }

    #[test]
    fn test_unmount_cancels_once_and_removes_listeners() {
        let mut host = RecordingHost::new(Viewport::new(1024, 768));
        let mut animator = mount(&mut host);
        animator.on_frame(&mut host, 16);
        animator.on_resize(Viewport::new(800, 600), 20);

        let pending = *host.requested.last().unwrap();
        animator.unmount(&mut host);
        assert_eq!(animator.phase(), AnimatorPhase::Terminated);
        assert_eq!(host.cancelled, vec![pending]);
        assert_eq!(host.active_listeners(), 0);
        assert!(animator.surface().is_none());

        // A stale callback after teardown is a no-op
        let requested = host.requested.len();
        assert_eq!(animator.on_frame(&mut host, 32), FrameOutcome::Inactive);
        assert_eq!(host.requested.len(), requested);
        assert!(!animator.poll_timers(10_000));

        animator.unmount(&mut host);
        assert_eq!(host.cancelled.len(), 1);
    }
}
