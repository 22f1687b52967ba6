//! Line builders for each block of the page.
//!
//! Every builder returns owned lines for a column `width` wide. Blocks are
//! laid out top to bottom by [`crate::page::Page`].

use atelier_core::{Palette, hsl_to_rgb};
use atelier_effects::TypeWriterState;
use atelier_fonts::{banner_width, build_banner};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

use crate::contact::{ContactForm, Field, SubmitStatus};
use crate::content::{
    ABOUT_PARAGRAPHS, CONTACT_BLURB, CONTACT_INFO, COPYRIGHT_HOLDER, FIRST_NAME, LAST_NAME,
    PORTFOLIO, PROCESS, SERVICES, SOCIALS, STATS, TAGLINE, TRUST_LINE,
};

/// Inputs shared by the section builders.
pub struct SectionContext<'a> {
    /// Column width in cells.
    pub width: u16,
    /// Rows of page visible at once.
    pub view_rows: u16,
    /// Hero headline at this instant.
    pub typewriter: TypeWriterState<'a>,
    /// Time since the about block was revealed.
    pub about_elapsed: Option<u64>,
    /// Highlighted portfolio piece.
    pub selected_work: usize,
    pub contact: &'a ContactForm,
    /// Year shown in the footer.
    pub year: i32,
}

/// Hero banner. Fills at least one screen with its content centred.
pub fn hero(ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut body = Vec::new();
    let fits_banner = usize::from(ctx.width) >= banner_width(LAST_NAME);

    if fits_banner {
        for row in build_banner(FIRST_NAME) {
            body.push(Line::from(row).fg(Palette::FOREGROUND).centered());
        }
        body.push(blank());
        body.extend(gold_banner(LAST_NAME));
    } else {
        body.push(Line::from(FIRST_NAME).fg(Palette::FOREGROUND).bold().centered());
        body.push(Line::from(LAST_NAME).fg(Palette::GOLD).bold().italic().centered());
    }

    body.push(blank());
    body.push(
        Line::from(vec![
            Span::styled("──── ", Style::new().fg(Palette::BORDER)),
            Span::styled(spaced(TAGLINE), Style::new().fg(Palette::GOLD)),
            Span::styled(" ────", Style::new().fg(Palette::BORDER)),
        ])
        .centered(),
    );
    body.push(blank());

    let state = &ctx.typewriter;
    for line in state.completed {
        body.push(Line::from(line.clone()).fg(Palette::GOLD).centered());
    }
    let mut current = vec![Span::styled(
        state.current.to_string(),
        Style::new().fg(Palette::GOLD),
    )];
    if state.cursor_visible() {
        current.push(Span::styled("▌", Style::new().fg(Palette::GOLD)));
    }
    body.push(Line::from(current).centered());
    // Keep the block height stable while lines commit
    let typed_rows = state.completed.len() + 1;
    for _ in typed_rows..crate::content::HERO_LINES.len() {
        body.push(blank());
    }

    body.push(blank());
    body.push(Line::from(TRUST_LINE).fg(Palette::MUTED).centered());
    body.push(blank());
    body.push(
        Line::from(vec![
            Span::styled(" VIEW SERVICES ", Style::new().fg(Color::Black).bg(Palette::GOLD).bold()),
            Span::raw("   "),
            Span::styled(" PORTFOLIO ", Style::new().fg(Palette::GOLD)).underlined(),
        ])
        .centered(),
    );
    body.push(Line::from("press 3 or 4").fg(Palette::BORDER).centered());
    body.push(blank());
    body.push(socials_line());

    let rows = usize::from(ctx.view_rows).max(body.len() + 1);
    let top = (rows - body.len()).saturating_sub(1) / 2;
    let mut lines = vec![blank(); top];
    lines.extend(body);
    while lines.len() + 1 < rows {
        lines.push(blank());
    }
    lines.push(Line::from("↓ scroll").fg(Palette::BORDER).centered());
    lines
}

/// About block with paragraphs and count-up stats.
pub fn about(ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = section_header("Get to know me", "ABOUT ", "ME");
    for paragraph in ABOUT_PARAGRAPHS {
        for row in wrap(paragraph, ctx.width) {
            lines.push(Line::from(row).fg(Palette::MUTED));
        }
        lines.push(blank());
    }

    let mut values = Vec::new();
    let mut labels = Vec::new();
    for (i, stat) in STATS.iter().enumerate() {
        if i > 0 {
            values.push(Span::raw("      "));
            labels.push(Span::raw("   "));
        }
        let value = stat.display(ctx.about_elapsed);
        let cell = stat.label.len().max(value.len());
        values.push(Span::styled(
            format!("{value:^cell$}"),
            Style::new().fg(Palette::GOLD).bold(),
        ));
        labels.push(Span::styled(
            format!("{:^cell$}", stat.label),
            Style::new().fg(Palette::MUTED),
        ));
    }
    lines.push(Line::from(values).centered());
    lines.push(Line::from(labels).centered());
    lines.push(blank());
    lines
}

/// Services grid and the four-step process.
pub fn services(ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = section_header("What I offer", "MY ", "SERVICES");
    for (i, service) in SERVICES.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:02}  ", i + 1), Style::new().fg(Palette::BORDER)),
            Span::styled(service.title.to_uppercase(), Style::new().fg(Palette::FOREGROUND).bold()),
        ]));
        for row in wrap(service.description, ctx.width.saturating_sub(4)) {
            lines.push(Line::from(format!("    {row}")).fg(Palette::MUTED));
        }
        lines.push(blank());
    }

    lines.push(blank());
    lines.extend(section_header("How I work", "MY ", "PROCESS"));
    for (i, step) in PROCESS.iter().enumerate() {
        let connector = if i + 1 == PROCESS.len() { "  " } else { "│ " };
        lines.push(Line::from(vec![
            Span::styled("◆ ", Style::new().fg(Palette::GOLD)),
            Span::styled(step.title.to_string(), Style::new().fg(Palette::FOREGROUND).bold()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(connector, Style::new().fg(Palette::BORDER)),
            Span::styled(step.description.to_string(), Style::new().fg(Palette::MUTED)),
        ]));
    }
    lines.push(blank());
    lines
}

/// Portfolio gallery list.
pub fn portfolio(ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = section_header("My work", "FEATURED ", "PORTFOLIO");
    lines.push(Line::from("AI-generated digital visual projects.").fg(Palette::MUTED).centered());
    lines.push(blank());

    for (i, work) in PORTFOLIO.iter().enumerate() {
        let selected = i == ctx.selected_work;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::new().fg(Palette::GOLD).bold()
        } else {
            Style::new().fg(Palette::FOREGROUND)
        };
        let mut spans = vec![
            Span::styled(marker, Style::new().fg(Palette::GOLD)),
            Span::styled(work.title.to_string(), title_style),
        ];
        if let Some(badge) = work.badge {
            spans.push(Span::styled(format!("  [{badge}]"), Style::new().fg(Palette::BORDER)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(format!("    {}", work.category)).fg(Palette::MUTED));
    }
    lines.push(blank());
    lines.push(Line::from("←/→ select · enter view").fg(Palette::BORDER).centered());
    lines.push(blank());
    lines
}

/// Contact details and the form.
pub fn contact(ctx: &SectionContext) -> Vec<Line<'static>> {
    let mut lines = section_header("Get in touch", "CONTACT ", "ME");
    lines.push(Line::from("Let's Create Together").fg(Palette::FOREGROUND).bold());
    for row in wrap(CONTACT_BLURB, ctx.width) {
        lines.push(Line::from(row).fg(Palette::MUTED));
    }
    lines.push(blank());
    for (label, value) in CONTACT_INFO {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<10}"), Style::new().fg(Palette::GOLD)),
            Span::styled(value, Style::new().fg(Palette::FOREGROUND)),
        ]));
    }
    lines.push(blank());

    let form = ctx.contact;
    for field in Field::ALL {
        let focused = form.focus() == Some(field);
        let label_style = if focused {
            Style::new().fg(Palette::GOLD).bold()
        } else {
            Style::new().fg(Palette::MUTED)
        };
        lines.push(Line::from(Span::styled(field.label().to_uppercase(), label_style)));

        let value = form.value(field);
        let mut spans = vec![Span::styled("│ ", Style::new().fg(Palette::BORDER))];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), Style::new().fg(Palette::BORDER)));
        } else {
            spans.push(Span::styled(value.to_string(), Style::new().fg(Palette::FOREGROUND)));
        }
        if focused {
            spans.push(Span::styled("▌", Style::new().fg(Palette::GOLD)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(blank());

    let status = match form.status() {
        Some(SubmitStatus::Sent) => {
            Line::from("Thank you! Your message is on its way.").fg(Palette::GOLD)
        }
        Some(SubmitStatus::Invalid(reason)) => Line::from(*reason).fg(Color::Rgb(255, 107, 107)),
        None if form.is_editing() => {
            Line::from("tab next field · enter send · esc done").fg(Palette::BORDER)
        }
        None => Line::from("press c to write a message").fg(Palette::BORDER),
    };
    lines.push(status);
    lines.push(blank());
    lines
}

/// Footer with socials and copyright.
pub fn footer(ctx: &SectionContext) -> Vec<Line<'static>> {
    vec![
        Line::from("─".repeat(usize::from(ctx.width))).fg(Palette::BORDER),
        blank(),
        Line::from(vec![
            Span::styled(format!("{FIRST_NAME} "), Style::new().fg(Palette::FOREGROUND)),
            Span::styled(LAST_NAME, Style::new().fg(Palette::GOLD).bold()),
        ])
        .centered(),
        socials_line(),
        Line::from(format!(
            "© {} {COPYRIGHT_HOLDER}. All rights reserved.",
            ctx.year
        ))
        .fg(Palette::MUTED)
        .centered(),
        blank(),
    ]
}

fn section_header(eyebrow: &str, light: &str, gold: &str) -> Vec<Line<'static>> {
    vec![
        blank(),
        Line::from(spaced(&eyebrow.to_uppercase())).fg(Palette::GOLD).centered(),
        Line::from(vec![
            Span::styled(light.to_string(), Style::new().fg(Palette::FOREGROUND)),
            Span::styled(gold.to_string(), Style::new().fg(Palette::GOLD).bold()),
        ])
        .centered(),
        Line::from("───").fg(Palette::GOLD).centered(),
        blank(),
    ]
}

fn socials_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (network, handle)) in SOCIALS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::new().fg(Palette::BORDER)));
        }
        spans.push(Span::styled(*network, Style::new().fg(Palette::GOLD)));
        spans.push(Span::styled(format!(" {handle}"), Style::new().fg(Palette::MUTED)));
    }
    Line::from(spans).centered()
}

/// Banner rows shaded with a gold-to-white sweep.
fn gold_banner(text: &str) -> Vec<Line<'static>> {
    build_banner(text)
        .into_iter()
        .map(|row| {
            let len = row.chars().count().max(1);
            let spans: Vec<Span> = row
                .chars()
                .enumerate()
                .map(|(i, ch)| {
                    let t = i as f32 / len as f32;
                    let color = hsl_to_rgb(43.0, 0.65 - 0.35 * t, 0.47 + 0.35 * t);
                    Span::styled(ch.to_string(), Style::new().fg(color))
                })
                .collect();
            Line::from(spans).centered()
        })
        .collect()
}

fn spaced(text: &str) -> String {
    text.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn blank() -> Line<'static> {
    Line::default()
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if row_len > 0 {
                rows.push(std::mem::take(&mut row));
                row_len = 0;
            }
            let rest = word.split_off(width);
            rows.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if row_len == 0 { word.len() } else { row_len + 1 + word.len() };
        if needed > width {
            rows.push(std::mem::take(&mut row));
            row_len = 0;
        }
        if row_len > 0 {
            row.push(' ');
            row_len += 1;
        }
        row.extend(word.iter());
        row_len += word.len();
    }
    if row_len > 0 {
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(form: &ContactForm) -> SectionContext<'_> {
        SectionContext {
            width: 60,
            view_rows: 30,
            typewriter: TypeWriterState {
                completed: &[],
                current: "AI VIS",
                started: true,
                done: false,
            },
            about_elapsed: None,
            selected_work: 2,
            contact: form,
            year: 2026,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(rows, ["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij kl", 4), ["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_hero_fills_the_screen() {
        let form = ContactForm::default();
        let ctx = context(&form);
        let lines = hero(&ctx);
        assert_eq!(lines.len(), 30);
        assert!(lines.iter().any(|l| text(l) == "AI VIS▌"));
        assert_eq!(text(lines.last().unwrap()), "↓ scroll");
    }

    #[test]
    fn test_hero_falls_back_to_plain_names_when_narrow() {
        let form = ContactForm::default();
        let mut ctx = context(&form);
        ctx.width = 20;
        let lines = hero(&ctx);
        assert!(lines.iter().any(|l| text(l) == "KRAYEM"));
    }

    #[test]
    fn test_about_counts_from_zero() {
        let form = ContactForm::default();
        let mut ctx = context(&form);
        let lines = about(&ctx);
        assert!(lines.iter().any(|l| text(l).contains("0+")));
        ctx.about_elapsed = Some(5_000);
        let lines = about(&ctx);
        assert!(lines.iter().any(|l| text(l).contains("500+") && text(l).contains("2M+")));
    }

    #[test]
    fn test_portfolio_marks_selection() {
        let form = ContactForm::default();
        let ctx = context(&form);
        let lines = portfolio(&ctx);
        let marked: Vec<String> = lines
            .iter()
            .map(text)
            .filter(|t| t.starts_with("▸ "))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Cosmetic Product"));
    }

    #[test]
    fn test_footer_shows_year() {
        let form = ContactForm::default();
        let ctx = context(&form);
        assert!(footer(&ctx).iter().any(|l| text(l).contains("© 2026 Ali Krayem")));
    }
}
