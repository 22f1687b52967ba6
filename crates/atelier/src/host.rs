//! The terminal as a particle field host.

use atelier_config::CellConfig;
use atelier_core::Viewport;
use atelier_particles::{CellSurface, FrameRequest, Host, HostEvent, ListenerId};

/// Refresh cadence the host offers frames at.
pub const REFRESH_MS: u64 = 16;

/// Terminal-backed [`Host`].
///
/// The viewport is the terminal size in cells scaled by the configured
/// cell metrics. A requested frame becomes due one refresh after the last
/// frame fired; the event loop collects it with
/// [`TerminalHost::take_due_frame`].
#[derive(Debug)]
pub struct TerminalHost {
    cols: u16,
    rows: u16,
    cells: CellConfig,
    layer_opacity: f32,
    reduced_motion: bool,
    drawing_supported: bool,
    next_id: u64,
    pending_frame: Option<FrameRequest>,
    last_frame_ms: u64,
    listeners: Vec<(ListenerId, HostEvent)>,
}

impl TerminalHost {
    pub fn new(
        cols: u16,
        rows: u16,
        cells: CellConfig,
        layer_opacity: f32,
        reduced_motion: bool,
        drawing_supported: bool,
    ) -> Self {
        Self {
            cols,
            rows,
            cells,
            layer_opacity,
            reduced_motion,
            drawing_supported,
            next_id: 0,
            pending_frame: None,
            last_frame_ms: 0,
            listeners: Vec::new(),
        }
    }

    /// Record a new terminal size.
    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Whether anyone subscribed to `event`.
    pub fn listens_to(&self, event: HostEvent) -> bool {
        self.listeners.iter().any(|(_, e)| *e == event)
    }

    /// Hand out the pending frame request if a refresh has passed.
    pub fn take_due_frame(&mut self, now_ms: u64) -> Option<FrameRequest> {
        if self.pending_frame.is_none() || now_ms < self.next_frame_at()? {
            return None;
        }
        self.last_frame_ms = now_ms;
        self.pending_frame.take()
    }

    /// When the pending frame becomes due, if one is pending.
    pub fn next_frame_at(&self) -> Option<u64> {
        self.pending_frame
            .map(|_| self.last_frame_ms.saturating_add(REFRESH_MS))
    }
}

impl Host for TerminalHost {
    type Surface = CellSurface;

    fn viewport(&self) -> Viewport {
        Viewport::from_cells(self.cols, self.rows, self.cells.width_px, self.cells.height_px)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn acquire_surface(&mut self, viewport: Viewport) -> Option<CellSurface> {
        self.drawing_supported.then(|| {
            CellSurface::new(
                viewport,
                self.cells.width_px,
                self.cells.height_px,
                self.layer_opacity,
            )
        })
    }

    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending_frame = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending_frame == Some(request) {
            self.pending_frame = None;
        }
    }

    fn subscribe(&mut self, event: HostEvent) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, event));
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.retain(|(id, _)| *id != listener);
    }
}

/// Whether the terminal can show the backdrop at all.
pub fn terminal_supports_drawing(term: Option<&str>) -> bool {
    !matches!(term, Some("dumb"))
}
