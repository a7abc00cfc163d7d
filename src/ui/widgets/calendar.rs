//! Upcoming events list.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::{format_date, format_relative_time};
use crate::models::CalendarEvent;
use crate::ui::theme;

pub fn render(frame: &mut Frame, area: Rect, events: &[CalendarEvent], now: &DateTime<Utc>) {
    let block = Block::default()
        .title("Upcoming Events")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let mut lines = Vec::new();
    for event in events {
        let mut spans = vec![
            Span::styled(
                format!("{}  ", format_date(&event.start, "%b %d %H:%M")),
                Style::default().fg(theme::COLOR_ACCENT),
            ),
            Span::styled(event.title.clone(), Style::default().fg(theme::COLOR_HEADER)),
            Span::styled(
                format!("  {}", format_relative_time(&event.start, now)),
                Style::default().fg(theme::COLOR_DIM),
            ),
        ];
        if let Some(description) = &event.description {
            spans.push(Span::styled(
                format!("  {}", description),
                Style::default().fg(theme::COLOR_DIM),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
