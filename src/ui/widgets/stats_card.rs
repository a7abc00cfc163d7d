//! Stat card widget: a headline metric with its change badge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::format_percentage;
use crate::models::{StatCard, Trend};
use crate::ui::theme;

/// Rows a stat card occupies, borders included.
pub const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, stat: &StatCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let glyph = match stat.trend {
        Trend::Up => "\u{25b2}",
        Trend::Down => "\u{25bc}",
    };
    // The badge always shows a magnitude; the glyph carries the sign
    let change = format_percentage(stat.change.abs(), 1);

    let lines = vec![
        Line::styled(stat.label.clone(), Style::default().fg(theme::COLOR_DIM)),
        Line::styled(
            stat.value.clone(),
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(
                format!("{} {}", glyph, change),
                Style::default().fg(theme::trend_color(stat.trend)),
            ),
            Span::styled(" vs last month", Style::default().fg(theme::COLOR_DIM)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
