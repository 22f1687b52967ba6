//! Fixed chrome drawn around and over the page.

use atelier_core::{Palette, ParticleVariant, Section, blend};
use atelier_effects::{CursorTrail, PageLoader};
use atelier_fonts::{HEIGHT, build_banner};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::content::{FIRST_NAME, LAST_NAME, PORTFOLIO, SOCIALS};

const LOADER_BAR_WIDTH: u16 = 30;
/// Delay before the second loader title fades in.
const LOADER_STAGGER_MS: u64 = 200;

/// Thin gold bar across the top showing how far down the page is.
pub fn progress_bar(frame: &mut Frame, area: Rect, progress: Option<f32>) {
    let Some(progress) = progress else {
        return;
    };
    let filled = (f32::from(area.width) * progress).round() as usize;
    let bar = Line::from("━".repeat(filled)).fg(Palette::GOLD);
    frame.render_widget(bar, area);
}

/// Name on the left, section links on the right. Compact layouts collapse
/// the links into a menu hint.
pub fn nav_bar(frame: &mut Frame, area: Rect, active: Section, compact: bool) {
    let [brand_area, links_area] =
        Layout::horizontal([Constraint::Length(14), Constraint::Fill(1)]).areas(area);

    let brand = Line::from(vec![
        Span::styled(" AK", Style::new().fg(Palette::GOLD).bold()),
        Span::styled(".", Style::new().fg(Palette::FOREGROUND)),
    ]);
    frame.render_widget(brand, brand_area);

    if compact {
        let menu = Line::from(vec![
            "m".bold().fg(Palette::GOLD),
            " menu ".fg(Palette::MUTED),
        ])
        .right_aligned();
        frame.render_widget(menu, links_area);
        return;
    }

    let mut spans = Vec::new();
    for (i, section) in Section::ALL.into_iter().enumerate() {
        let style = if section == active {
            Style::new().fg(Palette::GOLD).bold()
        } else {
            Style::new().fg(Palette::MUTED)
        };
        spans.push(Span::styled(format!("{} ", i + 1), Style::new().fg(Palette::BORDER)));
        spans.push(Span::styled(section.label().to_uppercase(), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Line::from(spans).right_aligned(), links_area);
}

/// Slide-in menu listing the sections.
pub fn sidebar(frame: &mut Frame, area: Rect, cursor: Section) {
    let width = area.width.min(28);
    let [_, panel] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(width)]).areas(area);
    frame.render_widget(Clear, panel);

    let mut lines = vec![Line::default()];
    for section in Section::ALL {
        let line = if section == cursor {
            Line::from(vec![
                Span::styled(" ▸ ", Style::new().fg(Palette::GOLD)),
                Span::styled(section.label().to_uppercase(), Style::new().fg(Palette::GOLD).bold()),
            ])
        } else {
            Line::from(format!("   {}", section.label().to_uppercase())).fg(Palette::FOREGROUND)
        };
        lines.push(line);
        lines.push(Line::default());
    }
    for (network, handle) in SOCIALS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {network} "), Style::new().fg(Palette::MUTED)),
            Span::styled(handle, Style::new().fg(Palette::BORDER)),
        ]));
    }

    let block = Block::bordered()
        .border_style(Style::new().fg(Palette::BORDER))
        .title(Line::from(" MENU ").fg(Palette::GOLD));
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

/// Full view of one portfolio piece.
pub fn lightbox(frame: &mut Frame, area: Rect, index: usize) {
    let Some(work) = PORTFOLIO.get(index) else {
        return;
    };
    let popup = popup_area(area, area.width.saturating_sub(8).min(64), 11);
    frame.render_widget(Clear, popup);

    let mut lines = vec![
        Line::default(),
        Line::from(work.category.to_uppercase()).fg(Palette::GOLD).centered(),
        Line::default(),
        Line::from(work.title).fg(Palette::FOREGROUND).bold().centered(),
    ];
    if let Some(badge) = work.badge {
        lines.push(Line::from(format!("[{badge}]")).fg(Palette::MUTED).centered());
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines.push(
        Line::from(format!("{} / {}", index + 1, PORTFOLIO.len()))
            .fg(Palette::MUTED)
            .centered(),
    );
    lines.push(Line::from("← prev · → next · esc close").fg(Palette::BORDER).centered());

    let block = Block::bordered().border_style(Style::new().fg(Palette::GOLD));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Splash with the block-letter name and a loading bar.
pub fn loader(frame: &mut Frame, area: Rect, loader: &PageLoader, elapsed_ms: u64) {
    frame.render_widget(Clear, area);

    let [_, first, _, last, _, bar, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(HEIGHT as u16),
        Constraint::Length(1),
        Constraint::Length(HEIGHT as u16),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    let titles = [
        (FIRST_NAME, first, (235, 230, 220), 0),
        (LAST_NAME, last, ParticleVariant::Accent.rgb(), LOADER_STAGGER_MS),
    ];
    for (text, rect, rgb, delay) in titles {
        let opacity = loader.title_opacity(elapsed_ms, delay);
        let (r, g, b) = blend(rgb, Palette::BACKDROP, opacity);
        let lines: Vec<Line> = build_banner(text)
            .into_iter()
            .map(|row| Line::from(row).fg(Color::Rgb(r, g, b)).centered())
            .collect();
        frame.render_widget(Paragraph::new(lines), rect);
    }

    let width = LOADER_BAR_WIDTH.min(area.width);
    let filled = (f32::from(width) * loader.bar_progress(elapsed_ms)).round() as usize;
    let empty = usize::from(width).saturating_sub(filled);
    let bar_line = Line::from(vec![
        Span::styled("━".repeat(filled), Style::new().fg(Palette::GOLD)),
        Span::styled("─".repeat(empty), Style::new().fg(Palette::BORDER)),
    ])
    .centered();
    frame.render_widget(bar_line, bar);
}

/// Fading dots left behind by the mouse pointer.
pub fn trail(frame: &mut Frame, trail: &CursorTrail, now_ms: u64) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for (dot, intensity) in trail.visible(now_ms) {
        if dot.col >= area.right() || dot.row >= area.bottom() {
            continue;
        }
        let (r, g, b) = blend(ParticleVariant::Accent.rgb(), Palette::BACKDROP, intensity);
        if let Some(cell) = buf.cell_mut((dot.col, dot.row)) {
            cell.set_char('•').set_fg(Color::Rgb(r, g, b));
        }
    }
}

/// Hint in the bottom-right corner once the hero is out of view.
pub fn back_to_top(frame: &mut Frame, area: Rect) {
    let [_, row] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
    let hint = Line::from(vec![
        "↑ ".fg(Palette::GOLD),
        "home".fg(Palette::MUTED),
        " ".into(),
    ])
    .right_aligned();
    frame.render_widget(hint, row);
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
