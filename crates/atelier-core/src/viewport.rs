//! Viewport geometry and the classifications derived from it.

/// Size of the drawing region in virtual pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport for a terminal of `cols` x `rows` cells, each cell covering
    /// `cell_width` x `cell_height` virtual pixels.
    pub fn from_cells(cols: u16, rows: u16, cell_width: u32, cell_height: u32) -> Self {
        Self {
            width: u32::from(cols) * cell_width,
            height: u32::from(rows) * cell_height,
        }
    }

    /// Whether the viewport covers no area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Coarse device classification used to scale down work on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Narrow, phone-like viewport.
    Compact,
    /// Desktop-class viewport.
    #[default]
    Wide,
}

impl DeviceClass {
    /// Binary classification by viewport width. Widths below `breakpoint`
    /// are compact.
    pub fn classify(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// Whether the hosting view is currently shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Colour class of a backdrop particle, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleVariant {
    /// Gold accent.
    Accent,
    /// Grey filler.
    Neutral,
}

impl ParticleVariant {
    /// Base colour of the variant, before opacity is applied.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Accent => (201, 162, 39),
            Self::Neutral => (100, 100, 100),
        }
    }
}
