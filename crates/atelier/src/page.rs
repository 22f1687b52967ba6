//! Scrollable page state: block layout, reveals, selection and overlays.

use atelier_core::{Palette, Section, blend};
use atelier_effects::{Reveal, TypeWriter};
use ratatui::{
    layout::Rect,
    style::Color,
    text::{Line, Span},
};

use crate::contact::ContactForm;
use crate::content::{HERO_LINES, HERO_TYPE_DELAY_MS, HERO_TYPE_SPEED_MS, PORTFOLIO};
use crate::sections::{self, SectionContext};

/// Five sections plus the footer.
const BLOCKS: usize = 6;
/// Widest the reading column gets.
pub const CONTENT_WIDTH: u16 = 76;
/// Rows a block must be inside the viewport edge before it reveals.
const REVEAL_MARGIN: u32 = 2;
const REVEAL_FADE_MS: u64 = 600;
/// Time constant of the smooth scroll.
const SCROLL_EASE_MS: f32 = 90.0;
const FOREGROUND_RGB: (u8, u8, u8) = (235, 230, 220);

/// State of the single scrolling page.
#[derive(Debug)]
pub struct Page {
    /// Rendered scroll offset, easing toward `target`.
    scroll: f32,
    /// Row the page is scrolling to.
    target: u32,
    max_scroll: u32,
    view_rows: u16,
    offsets: [u32; BLOCKS],
    heights: [u32; BLOCKS],
    reveals: [Reveal; BLOCKS],
    hero: TypeWriter,
    selected_work: usize,
    lightbox: Option<usize>,
    sidebar: Option<Section>,
    contact: ContactForm,
    reduced_motion: bool,
}

impl Page {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            scroll: 0.0,
            target: 0,
            max_scroll: 0,
            view_rows: 0,
            offsets: [0; BLOCKS],
            heights: [0; BLOCKS],
            reveals: std::array::from_fn(|_| Reveal::new(REVEAL_MARGIN)),
            hero: TypeWriter::new(HERO_LINES, HERO_TYPE_DELAY_MS, HERO_TYPE_SPEED_MS),
            selected_work: 0,
            lightbox: None,
            sidebar: None,
            contact: ContactForm::default(),
            reduced_motion,
        }
    }

    /// Lay out every block for a column `width` wide and `view_rows` tall,
    /// update reveals and return the lines currently in view.
    pub fn compose(&mut self, width: u16, view_rows: u16, now_ms: u64, year: i32) -> Vec<Line<'static>> {
        self.view_rows = view_rows;
        let blocks = {
            let typewriter = if self.reduced_motion {
                self.hero.state_at(self.hero.total_duration_ms())
            } else {
                self.hero.state_at(now_ms)
            };
            let about_elapsed = if self.reduced_motion {
                Some(u64::MAX)
            } else {
                self.reveals[Section::About.index()].elapsed(now_ms)
            };
            let ctx = SectionContext {
                width,
                view_rows,
                typewriter,
                about_elapsed,
                selected_work: self.selected_work,
                contact: &self.contact,
                year,
            };
            [
                sections::hero(&ctx),
                sections::about(&ctx),
                sections::services(&ctx),
                sections::portfolio(&ctx),
                sections::contact(&ctx),
                sections::footer(&ctx),
            ]
        };

        let mut total = 0u32;
        for (i, block) in blocks.iter().enumerate() {
            self.offsets[i] = total;
            self.heights[i] = block.len() as u32;
            total += self.heights[i];
        }
        self.max_scroll = total.saturating_sub(u32::from(view_rows));
        self.target = self.target.min(self.max_scroll);
        self.scroll = self.scroll.min(self.max_scroll as f32);

        let top = self.scroll_offset();
        let viewport = top..top + u32::from(view_rows);
        for i in 0..BLOCKS {
            let element = self.offsets[i]..self.offsets[i] + self.heights[i];
            self.reveals[i].observe(element, viewport.clone(), now_ms);
        }

        let mut visible = Vec::with_capacity(usize::from(view_rows));
        for (i, block) in blocks.into_iter().enumerate() {
            let start = self.offsets[i];
            let end = start + self.heights[i];
            if end <= viewport.start || start >= viewport.end {
                continue;
            }
            let opacity = if self.reduced_motion {
                1.0
            } else {
                self.reveals[i].progress(now_ms, REVEAL_FADE_MS)
            };
            let skip = viewport.start.saturating_sub(start) as usize;
            let take = (viewport.end.min(end) - start.max(viewport.start)) as usize;
            visible.extend(
                block
                    .into_iter()
                    .skip(skip)
                    .take(take)
                    .map(|line| fade(line, opacity)),
            );
        }
        visible
    }

    /// Ease the scroll offset toward its target.
    pub fn tick(&mut self, dt_ms: u64) {
        let target = self.target as f32;
        let diff = target - self.scroll;
        if self.reduced_motion || diff.abs() < 0.5 {
            self.scroll = target;
            return;
        }
        let step = 1.0 - (-(dt_ms as f32) / SCROLL_EASE_MS).exp();
        self.scroll += diff * step;
    }

    /// First row in view.
    pub fn scroll_offset(&self) -> u32 {
        (self.scroll.round().max(0.0) as u32).min(self.max_scroll)
    }

    pub fn max_scroll(&self) -> u32 {
        self.max_scroll
    }

    pub fn scroll_by(&mut self, rows: i32) {
        self.target = self
            .target
            .saturating_add_signed(rows)
            .min(self.max_scroll);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.view_rows.saturating_sub(2).max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.view_rows.saturating_sub(2).max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.target = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.target = self.max_scroll;
    }

    pub fn jump_to(&mut self, section: Section) {
        self.target = self.offsets[section.index()].min(self.max_scroll);
    }

    /// Section the reader is in: the last one whose top has passed the
    /// upper third of the view.
    pub fn active_section(&self) -> Section {
        let marker = self.scroll_offset() + u32::from(self.view_rows) / 3;
        Section::ALL
            .into_iter()
            .rev()
            .find(|section| self.offsets[section.index()] <= marker)
            .unwrap_or(Section::Home)
    }

    /// Back-to-top hint shows once the hero has scrolled away.
    pub fn shows_back_to_top(&self) -> bool {
        self.heights[Section::Home.index()] > 0
            && self.scroll_offset() >= self.heights[Section::Home.index()]
    }

    pub fn select_work(&mut self, delta: i32) {
        self.selected_work = step_index(self.selected_work, delta, PORTFOLIO.len());
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn open_lightbox(&mut self) {
        self.lightbox = Some(self.selected_work);
    }

    /// Move the open lightbox, keeping the gallery selection in step.
    pub fn step_lightbox(&mut self, delta: i32) {
        if let Some(index) = self.lightbox {
            let index = step_index(index, delta, PORTFOLIO.len());
            self.lightbox = Some(index);
            self.selected_work = index;
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Highlighted entry of the open sidebar.
    pub fn sidebar(&self) -> Option<Section> {
        self.sidebar
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = match self.sidebar {
            Some(_) => None,
            None => Some(self.active_section()),
        };
    }

    pub fn sidebar_move(&mut self, delta: i32) {
        if let Some(section) = self.sidebar {
            self.sidebar = Some(if delta < 0 { section.prev() } else { section.next() });
        }
    }

    /// Jump to the highlighted entry and close the sidebar.
    pub fn sidebar_confirm(&mut self) {
        if let Some(section) = self.sidebar.take() {
            self.jump_to(section);
        }
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar = None;
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Scroll to the contact block and start typing into the form.
    pub fn begin_contact(&mut self) {
        self.jump_to(Section::Contact);
        self.contact.begin_editing();
    }
}

/// Horizontally centred reading column inside `area`.
pub fn content_column(area: Rect) -> Rect {
    let width = area.width.min(CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn step_index(index: usize, delta: i32, len: usize) -> usize {
    let len = len as i64;
    (index as i64 + i64::from(delta)).rem_euclid(len) as usize
}

/// Fade a line toward the backdrop. At zero the line is dropped so the
/// particle layer shows through.
fn fade(line: Line<'static>, opacity: f32) -> Line<'static> {
    if opacity >= 1.0 {
        return line;
    }
    if opacity <= 0.0 {
        return Line::default();
    }
    let line_fg = line.style.fg;
    let spans: Vec<Span<'static>> = line
        .spans
        .into_iter()
        .map(|mut span| {
            span.style.fg = Some(faded(span.style.fg.or(line_fg), opacity));
            if let Some(bg) = span.style.bg {
                span.style.bg = Some(faded(Some(bg), opacity));
            }
            span
        })
        .collect();
    let mut faded_line = Line::from(spans);
    faded_line.style = line.style;
    faded_line.style.fg = None;
    faded_line.alignment = line.alignment;
    faded_line
}

fn faded(color: Option<Color>, opacity: f32) -> Color {
    let rgb = match color {
        Some(Color::Rgb(r, g, b)) => (r, g, b),
        Some(Color::Black) => (0, 0, 0),
        _ => FOREGROUND_RGB,
    };
    let (r, g, b) = blend(rgb, Palette::BACKDROP, opacity);
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Alignment;

    use super::*;

    fn composed(reduced_motion: bool) -> Page {
        let mut page = Page::new(reduced_motion);
        page.compose(70, 24, 0, 2026);
        page
    }

    #[test]
    fn test_blocks_stack_in_order() {
        let page = composed(true);
        assert_eq!(page.offsets[0], 0);
        assert_eq!(page.heights[0], 24);
        for i in 1..BLOCKS {
            assert_eq!(page.offsets[i], page.offsets[i - 1] + page.heights[i - 1]);
            assert!(page.heights[i] > 0);
        }
        let total = page.offsets[BLOCKS - 1] + page.heights[BLOCKS - 1];
        assert_eq!(page.max_scroll(), total - 24);
    }

    #[test]
    fn test_compose_returns_one_screen() {
        let mut page = composed(true);
        page.jump_to(Section::Services);
        page.tick(16);
        assert_eq!(page.compose(70, 24, 100, 2026).len(), 24);
    }

    #[test]
    fn test_jump_and_active_section() {
        let mut page = composed(true);
        assert_eq!(page.active_section(), Section::Home);
        page.jump_to(Section::Portfolio);
        page.tick(16);
        assert_eq!(page.scroll_offset(), page.offsets[Section::Portfolio.index()]);
        assert_eq!(page.active_section(), Section::Portfolio);
        assert!(page.shows_back_to_top());

        page.scroll_to_top();
        page.tick(16);
        assert_eq!(page.scroll_offset(), 0);
        assert!(!page.shows_back_to_top());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut page = composed(true);
        page.scroll_by(-10);
        assert_eq!(page.target, 0);
        page.scroll_by(i32::MAX);
        assert_eq!(page.target, page.max_scroll());
        page.scroll_to_end();
        page.tick(16);
        assert_eq!(page.scroll_offset(), page.max_scroll());
    }

    #[test]
    fn test_smooth_scroll_converges() {
        let mut page = composed(false);
        page.jump_to(Section::About);
        page.tick(16);
        let first = page.scroll_offset();
        assert!(first > 0 && first < 24);
        for _ in 0..100 {
            page.tick(16);
        }
        assert_eq!(page.scroll_offset(), 24);
    }

    #[test]
    fn test_sections_reveal_once_scrolled_into_view() {
        let mut page = composed(false);
        assert!(page.reveals[0].is_revealed());
        assert!(!page.reveals[1].is_revealed());

        page.jump_to(Section::About);
        for _ in 0..100 {
            page.tick(16);
        }
        page.compose(70, 24, 2_000, 2026);
        assert!(page.reveals[1].is_revealed());

        page.scroll_to_top();
        for _ in 0..100 {
            page.tick(16);
        }
        page.compose(70, 24, 3_000, 2026);
        assert!(page.reveals[1].is_revealed());
    }

    #[test]
    fn test_reduced_motion_shows_final_stats() {
        let mut page = composed(true);
        page.jump_to(Section::About);
        page.tick(16);
        let text: String = page
            .compose(70, 24, 0, 2026)
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("500+"));
        assert!(text.contains("2M+"));
    }

    #[test]
    fn test_unrevealed_lines_are_blank() {
        let line = Line::from("hello").centered();
        assert_eq!(fade(line.clone(), 0.0), Line::default());
        assert_eq!(fade(line.clone(), 1.0), line);

        let half = fade(line, 0.5);
        assert_eq!(half.alignment, Some(Alignment::Center));
        assert_eq!(half.spans[0].style.fg, Some(Color::Rgb(123, 120, 115)));
    }

    #[test]
    fn test_gallery_selection_wraps() {
        let mut page = Page::new(true);
        page.select_work(-1);
        assert_eq!(page.selected_work, PORTFOLIO.len() - 1);
        page.select_work(1);
        assert_eq!(page.selected_work, 0);

        page.open_lightbox();
        assert_eq!(page.lightbox(), Some(0));
        page.step_lightbox(-1);
        assert_eq!(page.lightbox(), Some(7));
        assert_eq!(page.selected_work, 7);
        page.close_lightbox();
        assert_eq!(page.lightbox(), None);
    }

    #[test]
    fn test_sidebar_jumps_and_closes() {
        let mut page = composed(true);
        page.toggle_sidebar();
        assert_eq!(page.sidebar(), Some(Section::Home));
        page.sidebar_move(1);
        page.sidebar_move(1);
        assert_eq!(page.sidebar(), Some(Section::Services));
        page.sidebar_confirm();
        assert_eq!(page.sidebar(), None);
        page.tick(16);
        assert_eq!(page.active_section(), Section::Services);
    }

    #[test]
    fn test_begin_contact_focuses_form() {
        let mut page = composed(true);
        page.begin_contact();
        assert!(page.contact().is_editing());
        assert_eq!(page.target, page.offsets[Section::Contact.index()].min(page.max_scroll()));
    }

    #[test]
    fn test_content_column_is_centred() {
        let column = content_column(Rect::new(0, 2, 100, 20));
        assert_eq!(column, Rect::new(12, 2, 76, 20));
        let narrow = content_column(Rect::new(0, 0, 40, 10));
        assert_eq!(narrow, Rect::new(0, 0, 40, 10));
    }
}
