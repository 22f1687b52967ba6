//! Recording host and surface for animator tests.

use atelier_core::{Rgba, Viewport};

use crate::host::{FrameRequest, Host, HostEvent, ListenerId};
use crate::surface::Surface;

/// Surface that records what was drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    /// Circles drawn since the last clear.
    pub fills: Vec<(f32, f32, f32, Rgba)>,
    pub total_fills: usize,
    pub clears: usize,
    pub resizes: usize,
}

impl Surface for RecordingSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.fills.clear();
        self.resizes += 1;
    }

    fn clear(&mut self) {
        self.fills.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.fills.push((x, y, radius, color));
        self.total_fills += 1;
    }
}

/// Host that records every request made of it.
#[derive(Debug)]
pub struct RecordingHost {
    pub viewport: Viewport,
    pub reduced_motion: bool,
    pub drawing_supported: bool,
    pub surfaces_acquired: usize,
    pub requested: Vec<FrameRequest>,
    pub cancelled: Vec<FrameRequest>,
    pub subscribed: Vec<(ListenerId, HostEvent)>,
    pub unsubscribed: Vec<ListenerId>,
    next_id: u64,
}

impl RecordingHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            reduced_motion: false,
            drawing_supported: true,
            surfaces_acquired: 0,
            requested: Vec::new(),
            cancelled: Vec::new(),
            subscribed: Vec::new(),
            unsubscribed: Vec::new(),
            next_id: 0,
        }
    }

    /// Listeners subscribed and not yet removed.
    pub fn active_listeners(&self) -> usize {
        self.subscribed
            .iter()
            .filter(|(id, _)| !self.unsubscribed.contains(id))
            .count()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Host for RecordingHost {
    type Surface = RecordingSurface;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn acquire_surface(&mut self, viewport: Viewport) -> Option<RecordingSurface> {
        if !self.drawing_supported {
            return None;
        }
        self.surfaces_acquired += 1;
        Some(RecordingSurface {
            viewport,
            ..Default::default()
        })
    }

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id());
        self.requested.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.cancelled.push(request);
    }

    fn subscribe(&mut self, event: HostEvent) -> ListenerId {
        let id = ListenerId(self.next_id());
        self.subscribed.push((id, event));
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.unsubscribed.push(listener);
    }
}
