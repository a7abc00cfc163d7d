//! The marketing launch screen.
//!
//! A tall virtual column scrolled behind a one-row progress bar: hero
//! copy with the magnetic call-to-action, the animated stats band,
//! feature highlights, pricing tiers and a footer. The stats band is
//! observed against the viewport; once half of it is on screen the
//! counters start and stay latched.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::format::format_number;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::pages::BandPlacer;
use crate::ui::theme;
use crate::ui::widgets::meter_spans;

const HERO_ROWS: u16 = 12;
/// Row of the call-to-action inside the hero band.
const CTA_ROW: u16 = 9;
const STATS_ROWS: u16 = 6;
const FEATURES_ROWS: u16 = 11;
const PRICING_ROWS: u16 = 10;
const FOOTER_ROWS: u16 = 3;

const CTA_LABEL: &str = "[ View Dashboard \u{2192} ]";
const DOCS_LABEL: &str = "[ Read Docs ]";

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, registry: &mut HitAreaRegistry) {
    // Top row is the scroll progress indicator, the rest scrolls
    let progress_rect = Rect::new(area.x, area.y, area.width, 1);
    let content = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );

    let offset = app.launch_scroll.offset();
    let mut placer = BandPlacer::new(content, offset);

    render_hero(frame, &mut placer, content, app, registry);
    placer.gap();
    render_stats(frame, &mut placer, app);
    placer.gap();
    render_features(frame, &mut placer, offset);
    placer.gap();
    render_pricing(frame, &mut placer, offset);
    placer.gap();
    render_footer(frame, &mut placer, offset);

    app.launch_scroll
        .set_extents(placer.total_rows(), content.height);

    // Painted last so it never scrolls away
    let progress = app.launch_scroll.progress() as f64 / 100.0;
    frame.render_widget(
        Paragraph::new(Line::from(meter_spans(
            progress,
            progress_rect.width,
            theme::COLOR_PROGRESS,
        ))),
        progress_rect,
    );
}

/// A band of plain text lines, clipped correctly at the viewport edges.
fn render_text_band(
    frame: &mut Frame,
    placer: &mut BandPlacer,
    offset: u16,
    height: u16,
    lines: Vec<Line<'static>>,
) {
    let (band_start, _) = placer.peek_range(height);
    if let Some(rect) = placer.place(height) {
        let clip_top = offset.saturating_sub(band_start);
        frame.render_widget(Paragraph::new(lines).scroll((clip_top, 0)), rect);
    }
}

fn render_hero(
    frame: &mut Frame,
    placer: &mut BandPlacer,
    content: Rect,
    app: &mut App,
    registry: &mut HitAreaRegistry,
) {
    let offset = app.launch_scroll.offset();
    let (band_start, _) = placer.peek_range(HERO_ROWS);

    let title_style = Style::default()
        .fg(theme::COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled(
            " \u{25c8} PRODUCTION READY",
            Style::default().fg(theme::COLOR_WARNING),
        ),
        Line::default(),
        Line::styled(" D A S H B O A R D", title_style),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " T H A T ",
                Style::default()
                    .fg(ratatui::style::Color::Black)
                    .bg(theme::COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(" P E R F O R M S", title_style),
        Line::default(),
        Line::styled(
            " Built for modern teams who demand speed, reliability,",
            Style::default().fg(theme::COLOR_DIM),
        ),
        Line::styled(
            " and a UI that doesn't waste time. Zero fluff.",
            Style::default().fg(theme::COLOR_DIM),
        ),
        Line::default(),
    ];
    render_text_band(frame, placer, offset, HERO_ROWS, lines);

    // The call-to-action is placed by hand so the magnetic offset can
    // move it; the pointer is tracked against the resting position
    let cta_virtual = band_start + CTA_ROW;
    let view_end = offset + content.height;
    if cta_virtual >= offset && cta_virtual < view_end {
        let base = Rect::new(
            content.x + 1,
            content.y + (cta_virtual - offset),
            CTA_LABEL.width() as u16,
            1,
        );
        app.cta_rect = Some(base);

        let drawn = app.magnetic.displace(base, content);
        let style = if registry.pointer_over(base) {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme::COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(Line::styled(CTA_LABEL, style)), drawn);
        registry.register(drawn, ClickAction::PressCta);

        let docs = Rect::new(
            base.x + base.width + 3,
            base.y,
            DOCS_LABEL.width() as u16,
            1,
        );
        if docs.right() <= content.right() {
            frame.render_widget(
                Paragraph::new(Line::styled(
                    DOCS_LABEL,
                    Style::default().fg(theme::COLOR_DIM),
                )),
                docs,
            );
        }
    } else {
        app.cta_rect = None;
    }
}

fn render_stats(frame: &mut Frame, placer: &mut BandPlacer, app: &mut App) {
    let offset = app.launch_scroll.offset();
    let (start, end) = placer.peek_range(STATS_ROWS);
    let (view_start, view_end) = placer.view_range();
    app.stats_reveal.observe(start, end, view_start, view_end);

    let users = format!("{}+", format_number(app.stats.users.value()));
    let uptime = format!("{:.1}%", app.stats.uptime.value());
    let load = format!("<{:.1}s", app.stats.load_time.value());

    let value_style = Style::default()
        .fg(theme::COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme::COLOR_DIM);

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(format!(" {:<14}", users), value_style),
            Span::styled(format!("{:<14}", uptime), value_style),
            Span::styled(format!("{:<14}", load), value_style),
        ]),
        Line::from(vec![
            Span::styled(" USERS".to_string(), label_style),
            Span::styled(format!("{:<8}", ""), label_style),
            Span::styled("UPTIME".to_string(), label_style),
            Span::styled(format!("{:<8}", ""), label_style),
            Span::styled("LOAD TIME".to_string(), label_style),
        ]),
        Line::default(),
    ];
    render_text_band(frame, placer, offset, STATS_ROWS, lines);
}

fn render_features(frame: &mut Frame, placer: &mut BandPlacer, offset: u16) {
    let title_style = Style::default()
        .fg(theme::COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let name_style = Style::default().fg(theme::COLOR_ACCENT);
    let dim = Style::default().fg(theme::COLOR_DIM);

    let feature = |name: &'static str, blurb: &'static str| {
        Line::from(vec![
            Span::styled(format!(" \u{00bb} {:<22}", name), name_style),
            Span::styled(blurb, dim),
        ])
    };

    let lines = vec![
        Line::styled(" FEATURES", title_style),
        Line::default(),
        feature("Realtime Analytics", "Live charts without the lag"),
        Line::default(),
        feature("Secure by Default", "Scoped sessions and audit trails"),
        Line::default(),
        feature("Instant Publishing", "Push content in one keystroke"),
        Line::default(),
        feature("Built to Scale", "From one editor to a newsroom"),
    ];
    render_text_band(frame, placer, offset, FEATURES_ROWS, lines);
}

fn render_pricing(frame: &mut Frame, placer: &mut BandPlacer, offset: u16) {
    let title_style = Style::default()
        .fg(theme::COLOR_HEADER)
        .add_modifier(Modifier::BOLD);
    let tier_style = Style::default().fg(theme::COLOR_ACCENT);
    let dim = Style::default().fg(theme::COLOR_DIM);

    let lines = vec![
        Line::styled(" PRICING", title_style),
        Line::default(),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "STARTER"), tier_style),
            Span::styled(format!("{:<16}", "PRO"), tier_style),
            Span::styled("ENTERPRISE", tier_style),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "$0/mo"), dim),
            Span::styled(format!("{:<16}", "$29/mo"), dim),
            Span::styled("custom", dim),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "1 editor"), dim),
            Span::styled(format!("{:<16}", "10 editors"), dim),
            Span::styled("unlimited", dim),
        ]),
        Line::from(vec![
            Span::styled(format!(" {:<16}", "community"), dim),
            Span::styled(format!("{:<16}", "email support"), dim),
            Span::styled("dedicated", dim),
        ]),
    ];
    render_text_band(frame, placer, offset, PRICING_ROWS, lines);
}

fn render_footer(frame: &mut Frame, placer: &mut BandPlacer, offset: u16) {
    let lines = vec![
        Line::styled(
            " Enter launches the dashboard \u{00b7} j/k scroll \u{00b7} q quits",
            Style::default().fg(theme::COLOR_DIM),
        ),
        Line::styled(
            " \u{00a9} 2024 Pulse. Built for modern teams.",
            Style::default().fg(theme::COLOR_DIM),
        ),
    ];
    render_text_band(frame, placer, offset, FOOTER_ROWS, lines);
}
