//! Drawing surfaces.

use atelier_core::{Palette, Rgba, Viewport};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::chars::{PARTICLE_CHARS, particle_char};

/// A 2D target the particle field draws into.
pub trait Surface {
    /// Current size in virtual pixels.
    fn size(&self) -> Viewport;

    /// Reallocate to `viewport`, discarding the contents.
    fn resize(&mut self, viewport: Viewport);

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Fill a circle centred at (`x`, `y`).
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Ink left in one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ink {
    glyph: char,
    color: Rgba,
}

/// A surface backed by a grid of terminal cells.
///
/// Each cell covers `cell_width` x `cell_height` virtual pixels. A circle
/// inks the cell holding its centre with a glyph sized by radius, and any
/// other cell it touches with a faint dot. Where circles overlap the more
/// opaque one wins.
#[derive(Debug, Clone)]
pub struct CellSurface {
    viewport: Viewport,
    cell_width: u32,
    cell_height: u32,
    cols: u16,
    rows: u16,
    layer_opacity: f32,
    cells: Vec<Option<Ink>>,
}

impl CellSurface {
    /// Create a blank surface for `viewport`.
    pub fn new(viewport: Viewport, cell_width: u32, cell_height: u32, layer_opacity: f32) -> Self {
        let mut surface = Self {
            viewport,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            cols: 0,
            rows: 0,
            layer_opacity: layer_opacity.clamp(0.0, 1.0),
            cells: Vec::new(),
        };
        surface.resize(viewport);
        surface
    }

    /// Grid size in cells.
    pub fn grid(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Number of cells holding ink.
    pub fn inked_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Glyph and colour drawn at a cell, if any.
    pub fn ink_at(&self, col: u16, row: u16) -> Option<(char, Rgba)> {
        self.index(col, row)
            .and_then(|i| self.cells[i])
            .map(|ink| (ink.glyph, ink.color))
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows)
            .then(|| row as usize * self.cols as usize + col as usize)
    }

    fn ink(&mut self, col: u16, row: u16, ink: Ink) {
        if let Some(i) = self.index(col, row) {
            match self.cells[i] {
                Some(existing) if existing.color.a >= ink.color.a => {}
                _ => self.cells[i] = Some(ink),
            }
        }
    }
}

impl Surface for CellSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.cols = viewport.width.div_ceil(self.cell_width).min(u16::MAX as u32) as u16;
        self.rows = viewport.height.div_ceil(self.cell_height).min(u16::MAX as u32) as u16;
        self.cells = vec![None; self.cols as usize * self.rows as usize];
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        if self.cells.is_empty() || x < 0.0 || y < 0.0 {
            return;
        }
        let cw = self.cell_width as f32;
        let ch = self.cell_height as f32;
        let center_col = (x / cw) as u16;
        let center_row = (y / ch) as u16;

        let first_col = ((x - radius).max(0.0) / cw) as u16;
        let last_col = ((x + radius) / cw) as u16;
        let first_row = ((y - radius).max(0.0) / ch) as u16;
        let last_row = ((y + radius) / ch) as u16;

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                if (col, row) == (center_col, center_row) {
                    continue;
                }
                // Distance from the centre to the nearest point of the cell
                let left = col as f32 * cw;
                let top = row as f32 * ch;
                let nx = x.clamp(left, left + cw);
                let ny = y.clamp(top, top + ch);
                if (nx - x).powi(2) + (ny - y).powi(2) <= radius * radius {
                    let faint = Rgba { a: color.a * 0.5, ..color };
                    self.ink(col, row, Ink { glyph: PARTICLE_CHARS[0], color: faint });
                }
            }
        }

        self.ink(
            center_col,
            center_row,
            Ink {
                glyph: particle_char(radius),
                color,
            },
        );
    }
}

impl Widget for &CellSurface {
    /// Draw inked cells only, leaving the rest of `buf` untouched so the
    /// field can sit under other widgets.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows.min(area.height);
        let cols = self.cols.min(area.width);
        for row in 0..rows {
            for col in 0..cols {
                let Some((glyph, color)) = self.ink_at(col, row) else {
                    continue;
                };
                let shade = Rgba {
                    a: color.a * self.layer_opacity,
                    ..color
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(glyph).set_fg(shade.over(Palette::BACKDROP));
                }
            }
        }
    }
}
