use std::time::{Duration, Instant};

use atelier_config::{Config, ParticlesConfig};
use atelier_core::{DeviceClass, Section, Visibility};
use atelier_effects::{CursorTrail, PageLoader, ScrollProgress};
use atelier_particles::{CellSurface, FieldAnimator, FieldSettings, FrameOutcome, Host, HostEvent};
use chrono::{Datelike, Local};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::Paragraph,
};
use tracing::{debug, info, trace};

use crate::chrome;
use crate::guard::InputGuard;
use crate::host::{TerminalHost, terminal_supports_drawing};
use crate::page::{Page, content_column};

/// Longest the loop sleeps waiting for input, so effects keep moving.
const IDLE_POLL_MS: u64 = 33;
/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Settings the app was started with.
    config: Config,
    /// Terminal side of the particle field.
    host: TerminalHost,
    /// Animated backdrop.
    field: FieldAnimator<CellSurface>,
    page: Page,
    loader: PageLoader,
    progress: ScrollProgress,
    trail: CursorTrail,
    guard: InputGuard,
    /// Clock the whole page is timed against.
    started: Instant,
    last_tick_ms: u64,
}

impl App {
    /// Construct a new instance of [`App`] and mount the particle field on
    /// the current terminal.
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (cols, rows) = crossterm::terminal::size()?;
        let term = std::env::var("TERM").ok();
        Ok(Self::with_terminal(
            config,
            cols,
            rows,
            terminal_supports_drawing(term.as_deref()),
        ))
    }

    /// Build the app for a terminal of `cols` x `rows` cells.
    fn with_terminal(config: Config, cols: u16, rows: u16, drawing_supported: bool) -> Self {
        let mut host = TerminalHost::new(
            cols,
            rows,
            config.cells,
            config.particles.layer_opacity,
            config.reduced_motion,
            drawing_supported,
        );
        let rng = match config.particles.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let field = FieldAnimator::mount(&mut host, field_settings(&config.particles), rng);
        info!(cols, rows, phase = ?field.phase(), "page mounted");

        let motion = !config.reduced_motion;
        Self {
            running: false,
            page: Page::new(config.reduced_motion),
            loader: PageLoader::new(),
            progress: ScrollProgress::new(motion),
            trail: CursorTrail::new(motion),
            guard: InputGuard::new(config.input_guards),
            config,
            host,
            field,
            started: Instant::now(),
            last_tick_ms: 0,
        }
    }

    /// Run the application's main loop. The particle field is unmounted on
    /// the way out, whether or not the loop failed.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let result = self.event_loop(&mut terminal);
        self.field.unmount(&mut self.host);
        info!("page unmounted");
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Fire due frames and timers, then advance the scroll easing.
    fn tick(&mut self) {
        let now = self.now_ms();
        if self.host.take_due_frame(now).is_some() {
            let outcome = self.field.on_frame(&mut self.host, now);
            if outcome != FrameOutcome::Throttled {
                trace!(?outcome, now, "frame");
            }
        }
        if self.field.poll_timers(now) {
            debug!(
                regenerations = self.field.regenerations(),
                particles = self.field.particles().len(),
                "particle field regenerated"
            );
        }

        let dt = now.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now;
        self.page.tick(dt);
        self.progress
            .set_scroll(self.page.scroll_offset(), self.page.max_scroll());
        self.progress.tick(dt);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.now_ms();
        let area = frame.area();

        if self.loader.is_loading(now) {
            chrome::loader(frame, area, &self.loader, now);
            return;
        }

        if let Some(surface) = self.field.surface() {
            frame.render_widget(surface, area);
        }

        let [progress_area, nav_area, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let column = content_column(content_area);
        let lines = self
            .page
            .compose(column.width, column.height, now, Local::now().year());
        frame.render_widget(Paragraph::new(lines), column);

        chrome::progress_bar(frame, progress_area, self.progress.value());
        chrome::nav_bar(frame, nav_area, self.page.active_section(), self.is_compact());
        if self.page.shows_back_to_top() {
            chrome::back_to_top(frame, content_area);
        }
        chrome::trail(frame, &self.trail, now);

        if let Some(cursor) = self.page.sidebar() {
            chrome::sidebar(frame, content_area, cursor);
        }
        if let Some(index) = self.page.lightbox() {
            chrome::lightbox(frame, area, index);
        }
    }

    /// Navigation collapses at the same breakpoint the particle field uses.
    fn is_compact(&self) -> bool {
        DeviceClass::classify(
            self.host.viewport().width,
            self.config.particles.mobile_breakpoint,
        ) == DeviceClass::Compact
    }

    /// Waits until the next frame or timer is due, then drains every queued
    /// event.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            self.on_event(event::read()?);
            while event::poll(Duration::ZERO)? {
                self.on_event(event::read()?);
            }
        }
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        let now = self.now_ms();
        let due = [self.host.next_frame_at(), self.field.resize_deadline()]
            .into_iter()
            .flatten()
            .min();
        let wait = due.map_or(IDLE_POLL_MS, |at| at.saturating_sub(now).min(IDLE_POLL_MS));
        Duration::from_millis(wait)
    }

    fn on_event(&mut self, event: Event) {
        if self.guard.blocks(&event) {
            debug!(?event, "input guard swallowed event");
            return;
        }
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(cols, rows) => self.on_resize(cols, rows),
            Event::FocusLost => self.on_visibility(Visibility::Hidden),
            Event::FocusGained => self.on_visibility(Visibility::Visible),
            _ => {}
        }
    }

    fn on_resize(&mut self, cols: u16, rows: u16) {
        self.host.set_size(cols, rows);
        if self.host.listens_to(HostEvent::Resize) {
            let viewport = self.host.viewport();
            self.field.on_resize(viewport, self.now_ms());
        }
    }

    fn on_visibility(&mut self, visibility: Visibility) {
        if self.host.listens_to(HostEvent::VisibilityChange) {
            self.field.on_visibility(visibility);
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.page.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.page.scroll_by(WHEEL_ROWS),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let now = self.now_ms();
                self.trail.on_move(mouse.column, mouse.row, now);
            }
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`]. Overlays
    /// take keys before the page does.
    fn on_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            self.quit();
            return;
        }
        if self.loader.is_loading(self.now_ms()) {
            self.loader.dismiss();
            return;
        }
        if self.page.contact().is_editing() {
            self.page.contact_mut().handle_key(key);
            return;
        }
        if self.page.lightbox().is_some() {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.page.step_lightbox(-1),
                KeyCode::Right | KeyCode::Char('l') => self.page.step_lightbox(1),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.page.close_lightbox(),
                _ => {}
            }
            return;
        }
        if self.page.sidebar().is_some() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.page.sidebar_move(-1),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.page.sidebar_move(1),
                KeyCode::Enter => self.page.sidebar_confirm(),
                KeyCode::Esc | KeyCode::Char('m') => self.page.close_sidebar(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.page.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.page.scroll_by(1),
            KeyCode::PageUp => self.page.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.page.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.page.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.page.scroll_to_end(),
            KeyCode::Tab => self.page.jump_to(self.page.active_section().next()),
            KeyCode::BackTab => self.page.jump_to(self.page.active_section().prev()),
            KeyCode::Char('m') => self.page.toggle_sidebar(),
            KeyCode::Left | KeyCode::Char('h') => self.page.select_work(-1),
            KeyCode::Right | KeyCode::Char('l') => self.page.select_work(1),
            KeyCode::Enter if self.page.active_section() == Section::Portfolio => {
                self.page.open_lightbox();
            }
            KeyCode::Char('c') => self.page.begin_contact(),
            KeyCode::Char(c) => {
                if let Some(section) = c.to_digit(10).and_then(Section::from_number) {
                    self.page.jump_to(section);
                }
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Animator settings from the `[particles]` config table.
fn field_settings(config: &ParticlesConfig) -> FieldSettings {
    FieldSettings {
        mobile_breakpoint: config.mobile_breakpoint,
        compact_count: config.compact_count,
        wide_count: config.wide_count,
        compact_frame_ms: config.compact_frame_ms,
        wide_frame_ms: config.wide_frame_ms,
        resize_quiet_ms: config.resize_quiet_ms,
        accent_probability: config.accent_probability,
    }
}

#[cfg(test)]
mod tests {
    use atelier_core::Viewport;
    use atelier_particles::{AnimatorPhase, Surface};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn seeded(reduced_motion: bool) -> Config {
        let mut config = Config {
            reduced_motion,
            ..Config::default()
        };
        config.particles.seed = Some(7);
        config
    }

    /// A 128x48 terminal is a 1024x768 viewport at the default cell size.
    fn desktop_app(reduced_motion: bool) -> App {
        App::with_terminal(seeded(reduced_motion), 128, 48, true)
    }

    #[test]
    fn test_focus_loss_pauses_field_while_frames_keep_firing() {
        let mut app = desktop_app(false);
        assert_eq!(app.field.phase(), AnimatorPhase::Running);
        assert_eq!(app.field.particles().len(), 25);

        app.on_event(Event::FocusLost);
        assert_eq!(app.field.phase(), AnimatorPhase::Paused);
        for now in [100, 200, 300] {
            assert!(app.host.take_due_frame(now).is_some());
            assert_eq!(app.field.on_frame(&mut app.host, now), FrameOutcome::Paused);
        }

        app.on_event(Event::FocusGained);
        assert_eq!(app.field.phase(), AnimatorPhase::Running);
        assert!(app.host.take_due_frame(400).is_some());
        assert_eq!(app.field.on_frame(&mut app.host, 400), FrameOutcome::Drawn);
    }

    #[test]
    fn test_resize_burst_regenerates_once() {
        let mut app = desktop_app(false);
        app.on_event(Event::Resize(100, 40));
        app.on_event(Event::Resize(90, 30));
        app.on_event(Event::Resize(80, 24));

        let deadline = app.field.resize_deadline().unwrap();
        assert!(!app.field.poll_timers(deadline - 1));
        assert!(app.field.poll_timers(deadline));
        assert!(!app.field.poll_timers(deadline + 1000));

        assert_eq!(app.field.regenerations(), 1);
        assert_eq!(app.field.surface().unwrap().size(), Viewport::new(640, 384));
        assert_eq!(app.field.device_class(), DeviceClass::Compact);
        assert_eq!(app.field.particles().len(), 15);
        assert!(app.is_compact());
    }

    #[test]
    fn test_unmount_leaves_nothing_scheduled() {
        let mut app = desktop_app(false);
        app.on_event(Event::Resize(80, 24));
        app.field.unmount(&mut app.host);

        assert_eq!(app.field.phase(), AnimatorPhase::Terminated);
        assert_eq!(app.host.next_frame_at(), None);
        assert_eq!(app.field.resize_deadline(), None);
        assert!(!app.host.listens_to(HostEvent::Resize));
        assert!(!app.host.listens_to(HostEvent::VisibilityChange));
        assert_eq!(app.field.on_frame(&mut app.host, 10_000), FrameOutcome::Inactive);
        assert_eq!(app.host.next_frame_at(), None);
    }

    #[test]
    fn test_reduced_motion_page_renders_without_field() {
        let mut app = desktop_app(true);
        assert_eq!(app.field.phase(), AnimatorPhase::Terminated);
        assert_eq!(app.host.next_frame_at(), None);
        assert!(!app.host.listens_to(HostEvent::Resize));

        app.on_event(Event::FocusLost);
        assert_eq!(app.field.phase(), AnimatorPhase::Terminated);

        app.loader.dismiss();
        let mut terminal = Terminal::new(TestBackend::new(128, 48)).unwrap();
        app.tick();
        terminal.draw(|frame| app.render(frame)).unwrap();
        app.page.jump_to(Section::About);
        app.tick();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("500+"));
    }

    #[test]
    fn test_field_settings_follow_config() {
        let config = ParticlesConfig {
            compact_count: 5,
            wide_frame_ms: 20,
            ..ParticlesConfig::default()
        };
        let settings = field_settings(&config);
        assert_eq!(settings.compact_count, 5);
        assert_eq!(settings.wide_frame_ms, 20);
        assert_eq!(settings.particle_count(DeviceClass::Wide), 25);
        assert_eq!(settings.frame_interval_ms(DeviceClass::Compact), 33);
    }
}
